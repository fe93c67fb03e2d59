use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};
use tracing::debug;

use crate::{
    result::{Error, Result},
    types::OutputFormat,
};

/// File name prefix when the playlist has no title
const DEFAULT_PREFIX: &str = "playlist";

/// ISO-8601 instant with the `:` and `.` separators replaced by `-`
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]-[minute]-[second]-[subsecond digits:3]Z");

/// Maximum length in bytes of the title part of a file name.
/// Leaves room for the timestamp, a collision counter and the extension
/// within the usual 255 bytes limit.
const MAX_PREFIX_BYTES: usize = 200;

/// Replace the characters that are forbidden in file names by `_`,
/// then cut the result to at most [`MAX_PREFIX_BYTES`] bytes on a char boundary
pub fn sanitize_title(title: &str) -> String {
    let mut sanitized = String::with_capacity(title.len().min(MAX_PREFIX_BYTES));
    for c in title.chars() {
        let c = match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        };

        if sanitized.len() + c.len_utf8() > MAX_PREFIX_BYTES {
            break;
        }
        sanitized.push(c);
    }
    sanitized
}

/// Build the base file name (without extension) of an output file:
/// `<title or "playlist">_<timestamp>`
pub fn base_file_name(title: Option<&str>, now: OffsetDateTime) -> String {
    let prefix = title.map_or_else(|| DEFAULT_PREFIX.to_owned(), sanitize_title);

    // The format only contains numeric components, formatting cannot fail
    let timestamp = now
        .to_offset(time::UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_default();

    format!("{prefix}_{timestamp}")
}

/// Path of the output file with this base name in the directory
pub fn output_path(out_dir: &Path, base: &str, format: OutputFormat) -> PathBuf {
    out_dir.join(format!("{base}.{}", format.extension()))
}

/// Return a base name whose output file does not exist yet.
///
/// Format for 1st file: <base>.<ext>
/// Format for 2nd file and up: <base>_<count>.<ext>
pub fn find_unused_base(out_dir: &Path, base: &str, format: OutputFormat) -> Result<String> {
    find_unused_base_up_to(out_dir, base, format, u16::MAX)
}

fn find_unused_base_up_to(
    out_dir: &Path,
    base: &str,
    format: OutputFormat,
    max_count: u16,
) -> Result<String> {
    if !output_path(out_dir, base, format).exists() {
        return Ok(base.to_owned());
    }

    (2..=max_count)
        .map(|n| format!("{base}_{n}"))
        .find(|candidate| !output_path(out_dir, candidate, format).exists())
        .ok_or_else(|| {
            Error::write_failed(
                output_path(out_dir, base, format),
                std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "Too many files with the same name",
                ),
            )
        })
}

/// Write the content to `<out_dir>/<base>.<ext>` and return the written path.
///
/// The directory and its parents are created if needed.
/// An existing file with the same name is replaced.
/// The content is first written to a temporary file of the same directory,
/// which is then renamed, so the final path is never left half written.
pub fn write_output(
    out_dir: &Path,
    base: &str,
    format: OutputFormat,
    content: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|err| Error::write_failed(out_dir, err))?;

    let path = output_path(out_dir, base, format);
    debug!("Writing {} bytes to {}", content.len(), path.display());

    let mut file = tempfile::Builder::new()
        .prefix(".plextract")
        .tempfile_in(out_dir)
        .map_err(|err| Error::write_failed(out_dir, err))?;

    if let Err(err) = file.write_all(content.as_bytes()) {
        return Err(Error::write_failed(file.path(), err));
    }

    file.persist(&path)
        .map_err(|err| Error::write_failed(&path, err.error))?;

    Ok(path)
}
