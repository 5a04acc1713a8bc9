//! Roster CSV parsing.
//!
//! The tracker publishes its list as a spreadsheet CSV export. The format is
//! loose: an optional header row, optional RFC4180-style quoting, and the
//! occasional malformed line. Parsing is tolerant throughout; bad rows are
//! skipped, never an error.

use std::collections::HashSet;

/// Header cells that mark the company-name column.
const HEADER_KEYWORDS: &[&str] = &["company", "company name", "name"];

/// Splits one CSV line into trimmed fields.
///
/// Quoted fields may contain commas; `""` inside a quoted field is an
/// escaped quote. An unterminated quote swallows the rest of the line as
/// field content rather than failing.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Parses a roster document into a deduplicated company list.
///
/// If the first non-blank line contains a header keyword, that cell's column
/// becomes the data column and the header row is skipped; otherwise every
/// line contributes its first column. Duplicates are dropped case-sensitively,
/// keeping first-seen order.
pub fn parse_roster(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text
        .split(|c| c == '\r' || c == '\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((first, rest)) = lines.split_first() else {
        return Vec::new();
    };

    let header = parse_line(first);
    let header_column = header
        .iter()
        .position(|cell| HEADER_KEYWORDS.iter().any(|kw| cell.eq_ignore_ascii_case(kw)));

    let (column, data_rows): (usize, &[&str]) = match header_column {
        Some(index) => (index, rest),
        None => (0, &lines),
    };

    let mut seen = HashSet::new();
    let mut companies = Vec::new();
    for row in data_rows {
        let fields = parse_line(row);
        let Some(value) = fields.get(column) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.clone()) {
            companies.push(value.clone());
        }
    }
    companies
}
