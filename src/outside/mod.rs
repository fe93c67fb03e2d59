mod command;
mod ytdl;

pub use ytdl::{PlaylistFetcher, Ytdl};
