pub mod format;
pub mod ident;
pub mod lines;
pub mod merge;
pub mod traditional;

use crate::error::BanlistError;
use crate::store::Document;

/// Two-stage pipeline: merge-reconcile the TCG and OCG lists, then emit the
/// canonical Worlds list stamped with the most recent source identifier.
pub fn generate_worlds(tcg: &Document, ocg: &Document) -> Result<Vec<String>, BanlistError> {
    let merged = merge::merge_reconcile(tcg, ocg);
    let ident = ident::latest_identifier([tcg, ocg]).ok_or(BanlistError::UnparsableHeader)?;
    Ok(format::canonicalize(merged, &ident.date, "Worlds"))
}

/// Single-source pipeline: promote forbidden cards and relabel the TCG list
/// as Traditional.
pub fn generate_traditional(tcg: &Document) -> Result<Vec<String>, BanlistError> {
    traditional::transform(tcg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Format;

    fn doc(format: Format, lines: &[&str]) -> Document {
        Document {
            source: format,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn worlds_end_to_end() {
        let tcg = doc(
            Format::Tcg,
            &[
                "#[2024.01 TCG]",
                "!2024.01 TCG",
                "#Forbidden",
                "94145021 0 -- Cyber-Stein",
                "#Limited",
                "23434538 1 -- Maxx \"C\"",
                "83764718 1 -- Monster Reborn",
            ],
        );
        let ocg = doc(
            Format::Ocg,
            &[
                "#[2024.07 OCG]",
                "!2024.07 OCG",
                "#Forbidden",
                "23434538 0 -- Maxx \"C\"",
                "#Semi-Limited",
                "94145021 2 -- Cyber-Stein",
                "70368879 2 -- Upstart Goblin",
            ],
        );
        let out = generate_worlds(&tcg, &ocg).unwrap();
        assert_eq!(
            out,
            vec![
                "#[2024.07 Worlds]",
                "!2024.07 Worlds",
                "#Forbidden",
                "94145021 0 -- Cyber-Stein",
                "23434538 0 -- Maxx \"C\"",
                "#Limited",
                "83764718 1 -- Monster Reborn",
                "#Semi-Limited",
                "70368879 2 -- Upstart Goblin",
            ]
        );
    }

    #[test]
    fn worlds_from_fixture_lists() {
        use std::path::Path;

        use crate::store::read_list;

        let tcg = read_list(Path::new("tests/fixtures/0TCG.lflist.conf"), Format::Tcg).unwrap();
        let ocg = read_list(Path::new("tests/fixtures/OCG.lflist.conf"), Format::Ocg).unwrap();
        let out = generate_worlds(&tcg, &ocg).unwrap();
        assert_eq!(
            out,
            vec![
                "#[2024.07 Worlds]",
                "!2024.07 Worlds",
                "#Forbidden",
                "94145021 0 -- Cyber-Stein",
                "23434538 0 -- Maxx \"C\"",
                "#Limited",
                "83764718 1 -- Monster Reborn",
                "70368879 1 -- Upstart Goblin",
                "#Semi-Limited",
                "14558127 2 -- Ash Blossom & Joyous Spring",
                "32807846 2 -- Reinforcement of the Army",
            ]
        );
    }

    #[test]
    fn worlds_without_any_identifier_fails() {
        let tcg = doc(Format::Tcg, &["10000 0 -- Alpha"]);
        let ocg = doc(Format::Ocg, &["20000 1 -- Beta"]);
        assert!(matches!(
            generate_worlds(&tcg, &ocg),
            Err(BanlistError::UnparsableHeader)
        ));
    }

    #[test]
    fn traditional_end_to_end() {
        let tcg = doc(
            Format::Tcg,
            &[
                "#[2024.01 TCG]",
                "!2024.01 TCG",
                "#Forbidden",
                "94145021 0 -- Cyber-Stein",
                "#Limited",
                "83764718 1 -- Monster Reborn",
            ],
        );
        let out = generate_traditional(&tcg).unwrap();
        assert_eq!(
            out,
            vec![
                "#[2024.01 Traditional]",
                "!2024.01 Traditional",
                "#Limited",
                "94145021 1 -- Cyber-Stein",
                "83764718 1 -- Monster Reborn",
            ]
        );
    }
}
