mod format;
mod playlist;
mod playlist_url;
mod record;

pub use format::{OutputFormat, TextLayout};
pub use playlist::RawPlaylist;
pub use playlist_url::PlaylistUrl;
pub use record::OutputRecord;
