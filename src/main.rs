mod cli;
mod io;
mod logging;
mod my_regex;
mod outside;
mod pipeline;
mod render;
mod report;
mod result;
mod settings;
mod types;

use clap::Parser;
use miette::Result;
use tracing::{debug, info};

use crate::{
    cli::Args,
    logging::{init_logging, level_from_verbosity},
    outside::Ytdl,
    pipeline::Pipeline,
    report::LogReporter,
    settings::Settings,
};

fn main() -> Result<()> {
    // Initialize the environment & CLI
    let args = Args::parse();
    init_logging(level_from_verbosity(args.verbose))?;

    let settings = Settings::load(&args)?;
    debug!("Settings: {settings:?}");

    let ytdl = Ytdl::new(settings.ytdl.clone());
    let reporter = LogReporter;
    let mut pipeline = Pipeline::new(&ytdl, &reporter, &settings);

    let res = pipeline.run(&args.url);
    debug!("Pipeline stopped in state {:?}", pipeline.state());
    let extraction = res?;

    info!(
        "Extracted {} video links from '{}'",
        extraction.records.len(),
        extraction.title.as_deref().unwrap_or("untitled playlist")
    );

    // The only thing on stdout, for scripts
    println!("{}", extraction.path.display());
    Ok(())
}
