// src/persistence/csv.rs — Minimal CSV row encoding for the append-only logs

/// Rows end with CRLF, matching the existing log files.
const LINE_END: &str = "\r\n";

/// Quote a field when it contains a delimiter, quote or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn bool_field(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Encode one row, including the line terminator.
pub fn format_row(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push_str(LINE_END);
    line
}
