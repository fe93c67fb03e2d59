use std::borrow::Cow;

use tracing::debug;

use super::command::{check_success_command, run_command, Capture, YT_DL, YT_DLP};
use crate::{
    result::{Error, Result},
    types::{PlaylistUrl, RawPlaylist},
};

/// Request identity sent to the video platform, a common desktop browser
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REFERER: &str = "youtube.com";

/// Interface for getting the description of a playlist
pub trait PlaylistFetcher {
    /// Get the playlist title and its entries, in playlist order.
    ///
    /// A single attempt is made, failures are returned as-is.
    fn fetch_playlist(&self, url: &PlaylistUrl) -> Result<RawPlaylist>;
}

/// Interface for the [yt-dlp](https://github.com/yt-dlp/yt-dlp) program,
/// or its ancestor [youtube-dl](https://github.com/ytdl-org/youtube-dl)
#[derive(Debug)]
pub struct Ytdl {
    program: Option<String>,
}

impl Ytdl {
    /// Use the given program, or find one of `yt-dlp` and `youtube-dl`
    /// when the playlist is fetched.
    ///
    /// Nothing is executed here.
    pub fn new(program: Option<String>) -> Self {
        Self { program }
    }

    /// Return the program to execute, probing the known ones if none was given
    fn program(&self) -> Result<Cow<'_, str>> {
        if let Some(program) = &self.program {
            return Ok(Cow::Borrowed(program.as_str()));
        }

        [YT_DLP, YT_DL]
            .into_iter()
            .find(|program| check_success_command(program, |cmd| cmd.arg("--version")))
            .map(Cow::Borrowed)
            .ok_or_else(|| Error::ToolUnavailable {
                program: YT_DLP.to_owned(),
                source: None,
            })
    }
}

impl PlaylistFetcher for Ytdl {
    fn fetch_playlist(&self, url: &PlaylistUrl) -> Result<RawPlaylist> {
        let program = self.program()?;
        debug!("Using {program} to fetch the playlist");

        let res = run_command(
            &program,
            |cmd| {
                cmd.arg("--dump-single-json")
                    .arg("--flat-playlist")
                    .arg("--no-warnings")
                    .arg("--no-check-certificates")
                    .args(["--add-header", &format!("referer:{REFERER}")])
                    .args(["--add-header", &format!("user-agent:{USER_AGENT}")])
                    .arg("--")
                    .arg(&**url)
            },
            Capture::STDOUT | Capture::STDERR,
        )
        .map_err(|err| Error::ToolUnavailable {
            program: program.to_string(),
            source: Some(err),
        })?;

        if !res.status.success() {
            return Err(Error::FetchFailed {
                program: program.into_owned(),
                code: res.status.code(),
                stderr: String::from_utf8_lossy(&res.stderr).trim().to_owned(),
            });
        }

        RawPlaylist::from_json(&res.stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::{fs, os::unix::fs::PermissionsExt, path::Path};

    use super::*;

    /// Stand-in for yt-dlp: exits with 3 unless called with the expected
    /// arguments, then prints a two videos playlist
    const FAKE_YTDL: &str = r#"#!/bin/sh
args=" $* "
for expected in \
    " --dump-single-json " \
    " --flat-playlist " \
    " --no-warnings " \
    " --no-check-certificates " \
    " --add-header referer:youtube.com " \
    " --add-header user-agent:Mozilla/5.0 (Windows NT 10.0; Win64; x64) "
do
    case "$args" in
        *"$expected"*) ;;
        *) echo "missing:$expected" >&2; exit 3 ;;
    esac
done

prev=""
last=""
for arg in "$@"; do
    prev="$last"
    last="$arg"
done
if [ "$prev" != "--" ] || [ "$last" != "https://www.youtube.com/playlist?list=PL1234" ]; then
    echo "bad url position: $prev $last" >&2
    exit 4
fi

cat <<'JSON'
{
    "_type": "playlist",
    "title": "Fake playlist",
    "entries": [
        {"_type": "url", "id": "first", "title": "One"},
        {"_type": "url", "id": "second", "title": "Two"}
    ]
}
JSON
"#;

    fn write_script(dir: &Path, content: &str) -> String {
        let path = dir.join("fake-ytdl");
        fs::write(&path, content).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().into_owned()
    }

    /// Fetch with the script, retrying while another test's child process
    /// may still hold the freshly written file open
    fn fetch_with_script(script: String) -> Result<RawPlaylist> {
        let ytdl = Ytdl::new(Some(script));
        let mut res = ytdl.fetch_playlist(&url());
        for _ in 0..10 {
            if !matches!(res, Err(Error::ToolUnavailable { .. })) {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(50));
            res = ytdl.fetch_playlist(&url());
        }
        res
    }

    fn url() -> PlaylistUrl {
        PlaylistUrl::parse("https://www.youtube.com/playlist?list=PL1234").unwrap()
    }

    #[test]
    fn missing_program_is_unavailable() {
        let ytdl = Ytdl::new(Some("plextract-no-such-program".to_owned()));

        match ytdl.fetch_playlist(&url()) {
            Err(Error::ToolUnavailable { program, source }) => {
                assert_eq!(program, "plextract-no-such-program");
                assert!(source.is_some());
            }
            res => panic!("Unexpected result: {res:?}"),
        }
    }

    #[test]
    fn non_zero_exit_is_a_fetch_failure() {
        let ytdl = Ytdl::new(Some("false".to_owned()));

        match ytdl.fetch_playlist(&url()) {
            Err(Error::FetchFailed { program, code, .. }) => {
                assert_eq!(program, "false");
                assert_eq!(code, Some(1));
            }
            res => panic!("Unexpected result: {res:?}"),
        }
    }

    #[test]
    fn empty_output_is_malformed() {
        let ytdl = Ytdl::new(Some("true".to_owned()));
        assert!(matches!(
            ytdl.fetch_playlist(&url()),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_json_output_is_malformed() {
        // `echo` prints its arguments back
        let ytdl = Ytdl::new(Some("echo".to_owned()));
        assert!(matches!(
            ytdl.fetch_playlist(&url()),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn fetches_with_the_expected_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), FAKE_YTDL);

        let playlist = fetch_with_script(script).unwrap();

        assert_eq!(playlist.title(), Some("Fake playlist"));
        let ids: Vec<_> = playlist.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
        assert_eq!(playlist.entries[1].title.as_deref(), Some("Two"));
    }

    #[test]
    fn script_failure_carries_code_and_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "#!/bin/sh\necho 'ERROR: [youtube:tab] PL1234: does not exist' >&2\nexit 2\n",
        );

        match fetch_with_script(script) {
            Err(Error::FetchFailed { code, stderr, .. }) => {
                assert_eq!(code, Some(2));
                assert_eq!(stderr, "ERROR: [youtube:tab] PL1234: does not exist");
            }
            res => panic!("Unexpected result: {res:?}"),
        }
    }
}
