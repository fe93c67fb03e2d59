use std::fmt::Display;

use serde::Serialize;

use super::RawPlaylist;

/// Prefix of the canonical URL of a video, to be followed by its ID
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// One video of the playlist, as written to the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    /// 1-based position in the playlist
    pub index: usize,
    pub title: String,
    pub url: String,
}

impl OutputRecord {
    /// Map every playlist entry to its record, keeping the playlist order.
    ///
    /// IDs are not checked, a malformed ID gives a malformed URL.
    pub fn from_playlist(playlist: &RawPlaylist) -> Vec<Self> {
        playlist
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| OutputRecord {
                index: i + 1,
                title: entry.title.clone().unwrap_or_default(),
                url: format!("{WATCH_URL_PREFIX}{}", entry.id),
            })
            .collect()
    }
}

impl Display for OutputRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.index, self.title)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn playlist(entries: &[(&str, Option<&str>)]) -> RawPlaylist {
        let entries: Vec<_> = entries
            .iter()
            .map(|(id, title)| json!({"id": id, "title": title}))
            .collect();
        let json = json!({"title": "Some playlist", "entries": entries});

        RawPlaylist::from_json(json.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn map_keeps_order_and_is_one_based() {
        let playlist = playlist(&[("a", Some("T1")), ("b", Some("T2"))]);
        let records = OutputRecord::from_playlist(&playlist);

        assert_eq!(
            records,
            vec![
                OutputRecord {
                    index: 1,
                    title: "T1".to_owned(),
                    url: "https://www.youtube.com/watch?v=a".to_owned(),
                },
                OutputRecord {
                    index: 2,
                    title: "T2".to_owned(),
                    url: "https://www.youtube.com/watch?v=b".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn map_does_not_deduplicate() {
        let playlist = playlist(&[("a", Some("T")), ("a", Some("T")), ("c", None)]);
        let records = OutputRecord::from_playlist(&playlist);

        let indexes: Vec<_> = records.iter().map(|r| r.index).collect();
        assert_eq!(indexes, [1, 2, 3]);
        assert_eq!(records[0].url, records[1].url);
        assert_eq!(records[2].title, "");
    }
}
