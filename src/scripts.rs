use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;

pub struct FixStats {
    pub scanned: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Fix the card-name comments in a directory of `c<ID>.lua` card scripts:
/// line 2 gets the database name, and `-- ` comment prefixes lose their
/// space. Files are only rewritten when something actually changed.
pub fn fix_card_names(scripts_dir: &Path, names: &HashMap<u32, String>) -> Result<FixStats> {
    let mut files: Vec<(PathBuf, String)> = Vec::new();
    let mut skipped = 0usize;

    let entries = fs::read_dir(scripts_dir)
        .with_context(|| format!("failed to read scripts directory {}", scripts_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(stem) = file_name.strip_prefix('c').and_then(|s| s.strip_suffix(".lua")) else {
            continue;
        };
        match stem.parse::<u32>() {
            Ok(id) => match names.get(&id) {
                Some(name) => files.push((entry.path(), name.clone())),
                None => {
                    warn!("card id {} not found in the database, skipping {}", id, file_name);
                    skipped += 1;
                }
            },
            Err(_) => {
                warn!("invalid card id in file name {}, skipping", file_name);
                skipped += 1;
            }
        }
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let updated: usize = files
        .par_iter()
        .map(|(path, name)| {
            let result = fix_one(path, name);
            pb.inc(1);
            match result {
                Ok(changed) => usize::from(changed),
                Err(e) => {
                    warn!("failed to fix {}: {}", path.display(), e);
                    0
                }
            }
        })
        .sum();
    pb.finish_and_clear();

    Ok(FixStats {
        scanned: files.len(),
        updated,
        skipped,
    })
}

fn fix_one(path: &Path, correct_name: &str) -> Result<bool> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    match fix_script_lines(&lines, correct_name) {
        Some(fixed) => {
            let mut out = fixed.join("\n");
            out.push('\n');
            fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Apply both fixes to a script's lines. Returns `None` when nothing changed.
fn fix_script_lines(lines: &[String], correct_name: &str) -> Option<Vec<String>> {
    let mut out = lines.to_vec();
    let mut changed = false;

    // The name comment sits on line 2, right under the function header.
    if out.len() >= 2 && out[1].starts_with("--") {
        let current = out[1][2..].trim();
        if current != correct_name {
            out[1] = format!("--{correct_name}");
            changed = true;
        }
    }

    for line in &mut out {
        if line.trim_start().starts_with("-- ") {
            *line = line.replacen("-- ", "--", 1);
            changed = true;
        }
    }

    changed.then_some(out)
}
