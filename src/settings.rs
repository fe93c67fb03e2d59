use std::path::{Path, PathBuf};

use ::config::{Config, File, FileFormat};
use miette::{Context, IntoDiagnostic, Result};
use serde::Deserialize;

use crate::{
    cli::Args,
    types::{OutputFormat, TextLayout},
};

pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// The resolved configuration of a run.
///
/// Layers, the last one winning:
/// 1. Built-in defaults
/// 2. The TOML file given with `--config`, if any
/// 3. The command-line flags
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub format: OutputFormat,
    pub output: PathBuf,
    pub layout: TextLayout,
    /// The extraction program to use instead of looking for one
    #[serde(default)]
    pub ytdl: Option<String>,
}

impl Settings {
    pub fn load(args: &Args) -> Result<Self> {
        Self::load_from(
            args.config.as_deref(),
            Overrides {
                format: args.format,
                output: args.output.as_deref(),
                layout: args.layout,
                ytdl: args.ytdl.as_deref(),
            },
        )
    }

    fn load_from(file: Option<&Path>, overrides: Overrides<'_>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("format", OutputFormat::Txt.extension())
            .and_then(|b| b.set_default("output", DEFAULT_OUTPUT_DIR))
            .and_then(|b| b.set_default("layout", TextLayout::default().as_str()))
            .into_diagnostic()?;

        if let Some(file) = file {
            builder = builder.add_source(File::from(file).format(FileFormat::Toml).required(true));
        }

        builder
            .set_override_option("format", overrides.format.map(|f| f.extension()))
            .and_then(|b| {
                b.set_override_option(
                    "output",
                    overrides.output.map(|p| p.to_string_lossy().into_owned()),
                )
            })
            .and_then(|b| b.set_override_option("layout", overrides.layout.map(|l| l.as_str())))
            .and_then(|b| b.set_override_option("ytdl", overrides.ytdl))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .into_diagnostic()
            .wrap_err("Could not load the configuration")
    }
}

/// Values given on the command line
#[derive(Debug, Default)]
struct Overrides<'a> {
    format: Option<OutputFormat>,
    output: Option<&'a Path>,
    layout: Option<TextLayout>,
    ytdl: Option<&'a str>,
}
