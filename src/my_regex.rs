use std::sync::OnceLock;

use regex::Regex;

/// Optional scheme, either plain or secure
macro_rules! opt_scheme {
    () => {
        r#"(?:https?://)?"#
    };
}
/// Optional `www.` subdomain
macro_rules! opt_www {
    () => {
        r#"(?:www\.)?"#
    };
}
/// Either the long or the short YouTube host
macro_rules! host {
    () => {
        r#"(?:youtube\.com|youtu\.be)"#
    };
}
/// The playlist path with its single `list` parameter.
/// The token is ASCII only, `\w` would also accept unicode letters.
macro_rules! playlist_query {
    () => {
        r#"/playlist\?list=[A-Za-z0-9_-]+"#
    };
}

/// Accepted shape of a playlist URL, nothing before and nothing after.
/// Example: "https://www.youtube.com/playlist?list=PL1234"
const PLAYLIST_URL: &str = concat!("^", opt_scheme!(), opt_www!(), host!(), playlist_query!(), "$");

static PLAYLIST_URL_RE: OnceLock<Regex> = OnceLock::new();

pub fn playlist_url_re() -> &'static Regex {
    PLAYLIST_URL_RE.get_or_init(|| Regex::new(PLAYLIST_URL).unwrap())
}
