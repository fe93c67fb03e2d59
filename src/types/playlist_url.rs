use std::{fmt::Display, ops::Deref, str::FromStr};

use crate::{
    my_regex::playlist_url_re,
    result::{Error, Result},
};

/// A playlist URL that has been checked against the accepted URL shape.
///
/// The only way to build one is through [`PlaylistUrl::parse`],
/// so holding a value means the extraction tool may be called with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistUrl(String);

impl PlaylistUrl {
    pub fn parse(url: &str) -> Result<Self> {
        if url.is_empty() {
            return Err(Error::invalid_input("Playlist URL is required"));
        }

        if playlist_url_re().is_match(url) {
            Ok(Self(url.to_owned()))
        } else {
            Err(Error::invalid_input(format!(
                "Invalid playlist URL format: '{url}'"
            )))
        }
    }
}

impl FromStr for PlaylistUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Deref for PlaylistUrl {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for PlaylistUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_playlist_urls() {
        for url in [
            "https://www.youtube.com/playlist?list=PL1234",
            "http://www.youtube.com/playlist?list=PL1234",
            "https://youtube.com/playlist?list=PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf",
            "www.youtube.com/playlist?list=a_b-c",
            "youtube.com/playlist?list=x",
            "https://youtu.be/playlist?list=OLAK5uy_k",
        ] {
            assert!(PlaylistUrl::parse(url).is_ok(), "{url} should be valid");
        }
    }

    #[test]
    fn rejects_other_urls() {
        for url in [
            "https://youtube.com/watch?v=abc",
            "ftp://youtube.com/playlist?list=abc",
            "https://www.youtube.com/playlist?list=",
            "https://www.youtube.com/playlist?list=PL1234&index=2",
            "https://m.youtube.com/playlist?list=PL1234",
            "https://www.youtube.com/playlist?list=PL 1234",
            "https://www.youtube.com/playlist?list=PLé",
            " https://www.youtube.com/playlist?list=PL1234",
            "https://vimeo.com/playlist?list=PL1234",
        ] {
            assert!(
                matches!(PlaylistUrl::parse(url), Err(Error::InvalidInput { .. })),
                "{url} should be invalid"
            );
        }
    }

    #[test]
    fn rejects_empty_input() {
        let err = PlaylistUrl::parse("").unwrap_err();
        assert_eq!(err.to_string(), "Playlist URL is required");
    }

    #[test]
    fn keeps_the_url_untouched() {
        let url: PlaylistUrl = "youtube.com/playlist?list=PL1234".parse().unwrap();
        assert_eq!(&*url, "youtube.com/playlist?list=PL1234");
    }
}
