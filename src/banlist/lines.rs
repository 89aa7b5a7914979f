use std::sync::LazyLock;

use regex::Regex;

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(\d+)\s+--\s*(.*)$").unwrap());

/// One card's restriction: id, allowed copies, name, and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u32,
    pub count: u8,
    pub name: String,
    pub raw: String,
}

#[derive(Debug, Clone)]
pub enum LineKind {
    /// A card-restriction line: `<id> <count> -- <name>`.
    Entry(Entry),
    /// A header or comment line (stripped text starts with `#` or `!`).
    Marker,
    /// A whitespace-only line.
    Blank,
    /// Anything else; carried through verbatim.
    Other,
}

/// Classify a single raw line. Both the merge path and the Traditional path
/// go through here, so the two output formats cannot drift apart.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with('#') || trimmed.starts_with('!') {
        return LineKind::Marker;
    }
    match parse_entry(line) {
        Some(entry) => LineKind::Entry(entry),
        None => LineKind::Other,
    }
}

/// Parse a card-restriction line, tolerating surrounding whitespace.
/// Returns `None` for anything that is not an entry.
pub fn parse_entry(line: &str) -> Option<Entry> {
    let caps = ENTRY_RE.captures(line.trim())?;
    // Oversized numbers mean the line is not a real card entry; treat as opaque.
    let id = caps[1].parse::<u32>().ok()?;
    let count = caps[2].parse::<u8>().ok()?;
    Some(Entry {
        id,
        count,
        name: caps[3].to_string(),
        raw: line.to_string(),
    })
}

pub fn is_marker(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('#') || trimmed.starts_with('!')
}
