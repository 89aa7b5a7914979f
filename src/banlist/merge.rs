use std::collections::HashMap;

use super::lines::{is_marker, parse_entry, Entry};
use crate::store::Document;

/// Merge two lists' lines into one reconciled restriction list.
///
/// Header and comment lines are dropped; blank lines survive. When the same
/// card id appears more than once, the lowest count wins. The result keeps
/// retained entries first (ascending count, first-seen order within a count),
/// then the remaining opaque lines in their original relative order. The
/// canonical ordering is the formatter's job.
pub fn merge_reconcile(a: &Document, b: &Document) -> Vec<String> {
    let mut merged: Vec<String> = a
        .lines
        .iter()
        .chain(b.lines.iter())
        .filter(|line| !is_marker(line))
        .cloned()
        .collect();

    merged.sort();
    // Adjacent exact duplicates only; identical lines separated by another
    // line both survive.
    merged.dedup();

    reconcile(merged)
}

fn reconcile(lines: Vec<String>) -> Vec<String> {
    let mut kept: Vec<Entry> = Vec::new();
    let mut by_id: HashMap<u32, usize> = HashMap::new();
    let mut opaque: Vec<String> = Vec::new();

    for line in lines {
        match parse_entry(&line) {
            Some(entry) => match by_id.get(&entry.id).copied() {
                Some(slot) if kept[slot].count > entry.count => kept[slot] = entry,
                Some(_) => {}
                None => {
                    by_id.insert(entry.id, kept.len());
                    kept.push(entry);
                }
            },
            None => opaque.push(line),
        }
    }

    kept.sort_by_key(|entry| entry.count);
    kept.into_iter().map(|entry| entry.raw).chain(opaque).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Document, Format};

    fn doc(format: Format, lines: &[&str]) -> Document {
        Document {
            source: format,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn lowest_count_wins() {
        let a = doc(Format::Tcg, &["1 0 -- Card X"]);
        let b = doc(Format::Ocg, &["1 1 -- Card X"]);
        assert_eq!(merge_reconcile(&a, &b), vec!["1 0 -- Card X"]);
    }

    #[test]
    fn lowest_count_wins_regardless_of_side() {
        let a = doc(Format::Tcg, &["1 2 -- Card X"]);
        let b = doc(Format::Ocg, &["1 0 -- Card X"]);
        assert_eq!(merge_reconcile(&a, &b), vec!["1 0 -- Card X"]);
    }

    #[test]
    fn each_id_appears_once() {
        let a = doc(
            Format::Tcg,
            &["10000 0 -- Alpha", "20000 1 -- Beta", "30000 2 -- Gamma"],
        );
        let b = doc(
            Format::Ocg,
            &["20000 0 -- Beta", "30000 3 -- Gamma", "40000 1 -- Delta"],
        );
        let out = merge_reconcile(&a, &b);
        let entries: Vec<_> = out.iter().filter_map(|l| parse_entry(l)).collect();
        assert_eq!(entries.len(), 4);
        for entry in &entries {
            assert_eq!(entries.iter().filter(|e| e.id == entry.id).count(), 1);
        }
        let beta = entries.iter().find(|e| e.id == 20000).unwrap();
        assert_eq!(beta.count, 0);
        let gamma = entries.iter().find(|e| e.id == 30000).unwrap();
        assert_eq!(gamma.count, 2);
    }

    #[test]
    fn headers_and_comments_dropped_blanks_kept() {
        let a = doc(
            Format::Tcg,
            &["#[2024.09 TCG]", "!2024.09 TCG", "#Forbidden", "10000 0 -- Alpha", ""],
        );
        let b = doc(Format::Ocg, &["#[2024.07 OCG]", "20000 1 -- Beta", ""]);
        let out = merge_reconcile(&a, &b);
        assert!(out.iter().all(|l| !is_marker(l)));
        // The two blank lines sort adjacent and collapse to one.
        assert_eq!(out.iter().filter(|l| l.trim().is_empty()).count(), 1);
        assert_eq!(out.iter().filter_map(|l| parse_entry(l)).count(), 2);
    }

    #[test]
    fn identical_lines_collapse() {
        let a = doc(Format::Tcg, &["10000 1 -- Alpha"]);
        let b = doc(Format::Ocg, &["10000 1 -- Alpha"]);
        assert_eq!(merge_reconcile(&a, &b), vec!["10000 1 -- Alpha"]);
    }

    #[test]
    fn entries_ordered_by_count_then_opaque() {
        let a = doc(Format::Tcg, &["30000 2 -- Gamma", "stray text"]);
        let b = doc(Format::Ocg, &["10000 0 -- Alpha", "20000 1 -- Beta"]);
        let out = merge_reconcile(&a, &b);
        assert_eq!(
            out,
            vec![
                "10000 0 -- Alpha",
                "20000 1 -- Beta",
                "30000 2 -- Gamma",
                "stray text",
            ]
        );
    }

    #[test]
    fn idempotent_on_own_output() {
        let a = doc(
            Format::Tcg,
            &[
                "#[2024.09 TCG]",
                "30000 2 -- Gamma",
                "10000 0 -- Alpha",
                "",
                "10000 1 -- Alpha",
            ],
        );
        let b = doc(Format::Ocg, &["#[2024.07 OCG]", "20000 1 -- Beta", ""]);
        let once = merge_reconcile(&a, &b);
        let again = merge_reconcile(
            &Document {
                source: Format::Worlds,
                lines: once.clone(),
            },
            &Document {
                source: Format::Worlds,
                lines: Vec::new(),
            },
        );
        assert_eq!(once, again);
    }
}
