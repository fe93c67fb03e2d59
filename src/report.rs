use std::fmt::Display;

use tracing::{debug, info};

use crate::result::Error;

/// A step of the extraction, run one after the other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Fetching,
    Mapping,
    Formatting,
    Writing,
}

impl Stage {
    /// What the stage is busy doing, for status messages
    pub fn activity(self) -> &'static str {
        match self {
            Stage::Validating => "Validating playlist URL",
            Stage::Fetching => "Extracting video links",
            Stage::Mapping => "Building the video records",
            Stage::Formatting => "Formatting the records",
            Stage::Writing => "Writing the output file",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Fetching => "fetching",
            Stage::Mapping => "mapping",
            Stage::Formatting => "formatting",
            Stage::Writing => "writing",
        };
        f.write_str(name)
    }
}

/// Receiver of the user-facing progress of an extraction.
///
/// Given to the pipeline instead of logging directly,
/// so that the messages can be checked or silenced.
pub trait Reporter {
    fn stage_started(&self, stage: Stage);

    fn stage_completed(&self, stage: Stage, summary: &str);

    /// The error is also returned by the pipeline to its caller,
    /// which is the one showing it to the user.
    fn stage_failed(&self, stage: Stage, error: &Error);
}

/// Report the progress through the logging system
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn stage_started(&self, stage: Stage) {
        debug!("{}...", stage.activity());
    }

    fn stage_completed(&self, _stage: Stage, summary: &str) {
        info!("{summary}");
    }

    fn stage_failed(&self, stage: Stage, error: &Error) {
        debug!("{} failed: {error}", stage.activity());
    }
}
