use serde::Deserialize;

use crate::result::{Error, Result};

/// Playlist description as dumped by the extraction tool
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlaylist {
    #[serde(default)]
    pub title: Option<String>,
    pub entries: Vec<RawEntry>,
}

/// One flat entry of the playlist, in playlist order
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl RawPlaylist {
    /// Parse the JSON document printed by the extraction tool.
    ///
    /// Any other key of the document is ignored.
    pub fn from_json(json: &[u8]) -> Result<Self> {
        serde_json::from_slice(json).map_err(Error::MalformedResponse)
    }

    /// The playlist title, if the tool reported a non-blank one
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}
