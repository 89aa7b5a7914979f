use std::sync::LazyLock;

use regex::Regex;

use super::format::{append_with_sections, sort_key};
use super::lines::is_marker;
use crate::error::BanlistError;
use crate::store::Document;

static PROMOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*\d+\s+)0(\s+--)").unwrap());
static RELABEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"TCG|OCG").unwrap());

/// Sections reinserted into the Traditional artifact. No `#Forbidden`:
/// promotion leaves no count-0 entries.
const SECTIONS: [(u8, &str); 2] = [(1, "#Limited"), (2, "#Semi-Limited")];

/// Derive the Traditional list from a single source document: every
/// forbidden card becomes limited, the identifier is relabeled, and the
/// body is re-sorted with fresh section markers.
pub fn transform(doc: &Document) -> Result<Vec<String>, BanlistError> {
    if doc.lines.len() < 2 {
        return Err(BanlistError::MalformedDocument {
            format: doc.source,
            lines: doc.lines.len(),
        });
    }
    let (first, second) = (&doc.lines[0], &doc.lines[1]);

    let mut keyed: Vec<((u32, String), String)> = doc
        .lines
        .iter()
        .map(|line| promote_forbidden(line))
        .map(|line| (sort_key(&line), line))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.retain(|(_, line)| !is_marker(line));

    let mut out = Vec::with_capacity(keyed.len() + 4);
    out.push(RELABEL_RE.replace_all(first.trim(), "Traditional").into_owned());
    out.push(RELABEL_RE.replace_all(second.trim(), "Traditional").into_owned());
    append_with_sections(&mut out, keyed, &SECTIONS);

    out.retain(|line| !line.trim().is_empty());
    Ok(out)
}

/// Rewrite `<id> 0 -- …` to `<id> 1 -- …`, leaving the rest of the line
/// byte-for-byte intact. Non-forbidden lines pass through unchanged.
fn promote_forbidden(line: &str) -> String {
    PROMOTE_RE.replace(line, "${1}1${2}").into_owned()
}
