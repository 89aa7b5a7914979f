use std::sync::LazyLock;

use regex::Regex;

use crate::store::Document;

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\[(\d{4}\.\d{2})\s+([A-Za-z]+)\]").unwrap());

/// The `(date, label)` pair from a list's identifier line, e.g. `#[2024.09 TCG]`.
/// Dates are zero-padded `YYYY.MM`, so lexicographic order is chronological.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub date: String,
    pub label: String,
}

/// Parse the identifier from a document's first line, if it carries one.
pub fn parse_identifier(first_line: &str) -> Option<Identifier> {
    let caps = IDENT_RE.captures(first_line.trim())?;
    Some(Identifier {
        date: caps[1].to_string(),
        label: caps[2].to_string(),
    })
}

/// The most recent identifier across the given documents. Documents without a
/// parsable first line are skipped; ties keep the first document encountered.
pub fn latest_identifier<'a, I>(docs: I) -> Option<Identifier>
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut latest: Option<Identifier> = None;
    for doc in docs {
        let Some(ident) = doc.lines.first().and_then(|l| parse_identifier(l)) else {
            continue;
        };
        let newer = match &latest {
            Some(current) => ident.date > current.date,
            None => true,
        };
        if newer {
            latest = Some(ident);
        }
    }
    latest
}
