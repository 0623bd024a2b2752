//! Catalog header completion.
//!
//! Hand-written catalogs often carry only `Language` and `Plural-Forms` in
//! their header, or no header at all. The PO parser requires the standard
//! fields, so missing ones are filled in before parsing.

use std::{borrow::Cow, collections::HashSet, fmt::Write};

/// Plural rule assumed when a catalog does not declare one.
pub const DEFAULT_PLURAL_FORMS: &str = "nplurals=2; plural=(n != 1);";

/// Header fields the parser requires, with the value used when absent.
const STANDARD_FIELDS: [(&str, &str); 9] = [
    ("Project-Id-Version", "PACKAGE VERSION"),
    ("POT-Creation-Date", ""),
    ("PO-Revision-Date", ""),
    ("Language-Team", ""),
    ("MIME-Version", "1.0"),
    ("Content-Type", "text/plain; charset=UTF-8"),
    ("Content-Transfer-Encoding", "8bit"),
    ("Language", ""),
    ("Plural-Forms", DEFAULT_PLURAL_FORMS),
];

#[derive(Clone, Copy)]
enum Field {
    Id,
    Str,
    Other,
}

/// The header entry: `msgid ""` followed by the metadata `msgstr`.
struct HeaderEntry {
    /// Raw, still escaped, metadata text.
    msgstr: String,
    /// Index of the last line belonging to the `msgstr`.
    last_line: usize,
}

/// Returns `text` with every missing standard header field filled in.
///
/// A catalog without a header entry gets a complete default header
/// prepended. Text that already has every field is returned borrowed.
pub fn complete_header(text: &str) -> Cow<'_, str> {
    let lines: Vec<&str> = text.lines().collect();

    let Some(header) = find_header(&lines) else {
        let mut completed = String::from("msgid \"\"\nmsgstr \"\"\n");
        push_fields(&mut completed, &STANDARD_FIELDS);
        completed.push('\n');
        completed.push_str(text);
        return Cow::Owned(completed);
    };

    let missing = missing_fields(&header.msgstr);
    if missing.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut completed = String::with_capacity(text.len() + missing.len() * 32);
    for line in &lines[..=header.last_line] {
        completed.push_str(line);
        completed.push('\n');
    }
    if !header.msgstr.is_empty() && !header.msgstr.ends_with("\\n") {
        completed.push_str("\"\\n\"\n");
    }
    push_fields(&mut completed, &missing);
    for line in &lines[header.last_line + 1..] {
        completed.push_str(line);
        completed.push('\n');
    }

    Cow::Owned(completed)
}

fn push_fields(out: &mut String, fields: &[(&str, &str)]) {
    for (key, value) in fields {
        let _ = writeln!(out, "\"{key}: {value}\\n\"");
    }
}

fn missing_fields(msgstr: &str) -> Vec<(&'static str, &'static str)> {
    let present: HashSet<&str> = msgstr
        .split("\\n")
        .filter_map(|line| line.split_once(':'))
        .map(|(key, _)| key)
        .collect();

    STANDARD_FIELDS
        .iter()
        .filter(|(key, _)| !present.contains(key))
        .copied()
        .collect()
}

/// Locates the first entry of the catalog and returns it if it is a header.
fn find_header(lines: &[&str]) -> Option<HeaderEntry> {
    let start = lines
        .iter()
        .position(|l| l.starts_with("msgid ") || l.starts_with("msgctxt "))?;

    let mut field = Field::Other;
    let mut msgid = String::new();
    let mut msgstr: Option<String> = None;
    let mut last_line = start;

    for (index, line) in lines.iter().enumerate().skip(start) {
        if line.is_empty() {
            break;
        }
        if let Some(rest) = line.strip_prefix("msgid ") {
            field = Field::Id;
            msgid.push_str(unquote(rest));
        } else if let Some(rest) = line.strip_prefix("msgstr ") {
            field = Field::Str;
            msgstr = Some(unquote(rest).to_string());
            last_line = index;
        } else if line.starts_with('"') {
            match (field, msgstr.as_mut()) {
                (Field::Id, _) => msgid.push_str(unquote(line)),
                (Field::Str, Some(value)) => {
                    value.push_str(unquote(line));
                    last_line = index;
                }
                _ => {}
            }
        } else if line.starts_with("msg") {
            field = Field::Other;
        }
    }

    let msgstr = msgstr?;
    msgid.is_empty().then_some(HeaderEntry { msgstr, last_line })
}

fn unquote(s: &str) -> &str {
    s.trim()
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or("")
}
