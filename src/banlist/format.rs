use super::lines::parse_entry;

/// Section markers inserted at count boundaries. Counts of 3 and above are
/// unrestricted and get no marker.
const SECTIONS: [(u8, &str); 3] = [(0, "#Forbidden"), (1, "#Limited"), (2, "#Semi-Limited")];

/// Sort key shared by the Worlds formatter and the Traditional transform:
/// entries order by `(count, name)`, anything else sinks to the end ordered
/// by its stripped text.
pub fn sort_key(line: &str) -> (u32, String) {
    match parse_entry(line) {
        Some(entry) => (u32::from(entry.count), entry.name),
        None => (u32::MAX, line.trim().to_string()),
    }
}

/// Produce the canonical list: identifier header, then the lines sorted by
/// `(count, name)` with a section marker before the first entry of each group.
pub fn canonicalize(lines: Vec<String>, date: &str, label: &str) -> Vec<String> {
    let mut keyed: Vec<((u32, String), String)> =
        lines.into_iter().map(|l| (sort_key(&l), l)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = Vec::with_capacity(keyed.len() + 5);
    out.push(format!("#[{date} {label}]"));
    out.push(format!("!{date} {label}"));
    append_with_sections(&mut out, keyed, &SECTIONS);
    out
}

/// Walk the sorted lines once, emitting each section marker at most once,
/// immediately before the first line of its count group.
pub(super) fn append_with_sections(
    out: &mut Vec<String>,
    keyed: Vec<((u32, String), String)>,
    sections: &[(u8, &str)],
) {
    let mut emitted = [false; 3];
    for ((count, _), line) in keyed {
        for &(section_count, marker) in sections {
            if count == u32::from(section_count) && !emitted[section_count as usize] {
                out.push(marker.to_string());
                emitted[section_count as usize] = true;
            }
        }
        out.push(line);
    }
}
