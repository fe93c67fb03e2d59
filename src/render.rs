use crate::types::{OutputFormat, OutputRecord, TextLayout};

const CSV_HEADER: &str = "Index,Title,URL";

/// Render the records into the full content of the output file.
///
/// No trailing newline is added, whatever the format.
/// Unknown format tags are rejected when parsing the [`OutputFormat`].
pub fn render(records: &[OutputRecord], format: OutputFormat, layout: TextLayout) -> String {
    match format {
        OutputFormat::Txt => render_txt(records, layout),
        OutputFormat::Csv => render_csv(records),
        OutputFormat::Json => render_json(records),
    }
}

fn render_txt(records: &[OutputRecord], layout: TextLayout) -> String {
    match layout {
        TextLayout::Urls => records
            .iter()
            .map(|r| r.url.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        TextLayout::Numbered => records
            .iter()
            .map(|r| format!("{r}\n{}", r.url))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn render_csv(records: &[OutputRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_owned());

    // Titles are always quoted, embedded quotes are doubled
    lines.extend(records.iter().map(|r| {
        format!(
            "{},\"{}\",{}",
            r.index,
            r.title.replace('"', "\"\""),
            r.url
        )
    }));

    lines.join("\n")
}

fn render_json(records: &[OutputRecord]) -> String {
    // Records only hold strings and integers
    serde_json::to_string_pretty(records).expect("Records are serializable")
}
