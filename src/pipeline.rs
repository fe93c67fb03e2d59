use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use time::OffsetDateTime;

use crate::{
    io::{base_file_name, find_unused_base, write_output},
    outside::PlaylistFetcher,
    render::render,
    report::{Reporter, Stage},
    result::{Error, Result},
    settings::Settings,
    types::{OutputRecord, PlaylistUrl, RawPlaylist},
};

/// Where the pipeline is at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Running(Stage),
    Done,
    /// Absorbing state, holding the stage that failed
    Failed(Stage),
}

/// A failure of the pipeline, with the stage it happened in
#[derive(Debug, Error, Diagnostic)]
#[error("Extraction failed while {stage}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    #[diagnostic_source]
    pub source: Error,
}

/// The result of a successful extraction
#[derive(Debug)]
pub struct Extraction {
    pub title: Option<String>,
    pub records: Vec<OutputRecord>,
    pub path: PathBuf,
}

/// Extract a playlist into a file, one stage after the other:
/// validating, fetching, mapping, formatting then writing.
///
/// The first failing stage stops the extraction.
/// Nothing is written to the disk before the writing stage.
pub struct Pipeline<'a> {
    fetcher: &'a dyn PlaylistFetcher,
    reporter: &'a dyn Reporter,
    settings: &'a Settings,
    state: State,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        fetcher: &'a dyn PlaylistFetcher,
        reporter: &'a dyn Reporter,
        settings: &'a Settings,
    ) -> Self {
        Self {
            fetcher,
            reporter,
            settings,
            state: State::Idle,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Run all the stages on the user-given playlist URL.
    /// Each call starts over from [`State::Idle`].
    pub fn run(&mut self, input: &str) -> std::result::Result<Extraction, StageError> {
        self.state = State::Idle;
        let fetcher = self.fetcher;
        let settings = self.settings;

        let url = self.stage(
            Stage::Validating,
            || PlaylistUrl::parse(input),
            |_| "Playlist URL is valid".to_owned(),
        )?;

        let playlist = self.stage(
            Stage::Fetching,
            || fetcher.fetch_playlist(&url).and_then(ensure_not_empty),
            |playlist: &RawPlaylist| {
                format!(
                    "Found {} videos in '{}'",
                    playlist.entries.len(),
                    playlist.title().unwrap_or("untitled playlist")
                )
            },
        )?;

        let records = self.stage(
            Stage::Mapping,
            || Ok(OutputRecord::from_playlist(&playlist)),
            |records: &Vec<OutputRecord>| {
                format!("Successfully extracted {} video links", records.len())
            },
        )?;

        let content = self.stage(
            Stage::Formatting,
            || Ok(render(&records, settings.format, settings.layout)),
            |_| format!("Formatted the records as {}", settings.format),
        )?;

        let path = self.stage(
            Stage::Writing,
            || {
                let base = base_file_name(playlist.title(), OffsetDateTime::now_utc());
                let base = find_unused_base(&settings.output, &base, settings.format)?;
                write_output(&settings.output, &base, settings.format, &content)
            },
            |path: &PathBuf| format!("Saved to {}", path.display()),
        )?;

        self.state = State::Done;
        Ok(Extraction {
            title: playlist.title().map(str::to_owned),
            records,
            path,
        })
    }

    /// Run the operation of a stage, keeping the state and the reporter up to date
    fn stage<T, F, S>(
        &mut self,
        stage: Stage,
        f: F,
        summary: S,
    ) -> std::result::Result<T, StageError>
    where
        F: FnOnce() -> Result<T>,
        S: FnOnce(&T) -> String,
    {
        self.state = State::Running(stage);
        self.reporter.stage_started(stage);

        match f() {
            Ok(value) => {
                self.reporter.stage_completed(stage, &summary(&value));
                Ok(value)
            }
            Err(source) => {
                self.state = State::Failed(stage);
                self.reporter.stage_failed(stage, &source);
                Err(StageError { stage, source })
            }
        }
    }
}

fn ensure_not_empty(playlist: RawPlaylist) -> Result<RawPlaylist> {
    if playlist.entries.is_empty() {
        Err(Error::EmptyPlaylist)
    } else {
        Ok(playlist)
    }
}
