use std::path::PathBuf;

use clap::{ArgAction, Parser};
use indoc::indoc;

use crate::types::{OutputFormat, TextLayout};

macro_rules! arg_env {
    ($v:literal) => {
        concat!("PLEXTRACT_", $v)
    };
}

const EXAMPLES: &str = indoc! {"
    Examples:
      plextract https://youtube.com/playlist?list=xyz
      plextract https://youtube.com/playlist?list=xyz -f json
      plextract https://youtube.com/playlist?list=xyz -o ./my-playlists
"};

/// Extract the video links of a YouTube playlist into a file.
///
/// The playlist is listed with `yt-dlp` (or `youtube-dl`),
/// which must be installed.
#[derive(Parser, Debug)]
#[command(version, after_help = EXAMPLES)]
pub struct Args {
    /// The playlist URL, e.g. https://www.youtube.com/playlist?list=...
    pub url: String,

    /// The output file format [default: txt]
    #[arg(short, long, value_enum, env = arg_env!("FORMAT"))]
    pub format: Option<OutputFormat>,

    /// The path to the output directory, created if needed [default: ./output]
    #[arg(short, long, env = arg_env!("OUTPUT"))]
    pub output: Option<PathBuf>,

    /// How the records are laid out in a txt file [default: urls]
    #[arg(long, value_enum)]
    pub layout: Option<TextLayout>,

    /// The playlist extraction program to use.
    /// By default, `yt-dlp` then `youtube-dl` are looked for.
    #[arg(long, env = arg_env!("YTDL"))]
    pub ytdl: Option<String>,

    /// A TOML file giving default values to the options above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log more details, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
