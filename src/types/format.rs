use std::{fmt::Display, str::FromStr};

use clap::ValueEnum;
use serde::Deserialize;

use crate::result::Error;

/// The file format the playlist records are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    Txt,
    Csv,
    Json,
}

impl OutputFormat {
    /// Return the tag of the format, which is also the file extension.
    /// e.g. "csv"
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(Self::Txt),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat(s.to_owned())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// How records are laid out in a `txt` file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextLayout {
    /// One bare URL per line
    #[default]
    Urls,
    /// "<index>. <title>" followed by the URL, records separated by a blank line
    Numbered,
}

impl TextLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            TextLayout::Urls => "urls",
            TextLayout::Numbered => "numbered",
        }
    }
}
