use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::BanlistError;

/// The four rule formats a list file can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Tcg,
    Ocg,
    Traditional,
    Worlds,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::Tcg => "TCG",
            Format::Ocg => "OCG",
            Format::Traditional => "Traditional",
            Format::Worlds => "Worlds",
        }
    }

    pub const ALL: [Format; 4] = [Format::Tcg, Format::Ocg, Format::Traditional, Format::Worlds];
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One loaded list file. Lines are stored without trailing newlines and
/// never mutated; pipelines produce fresh line vectors.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: Format,
    pub lines: Vec<String>,
}

/// Read a list file. An unreadable file is a warning, not a failure: the
/// pipelines that do not need it stay usable.
pub fn read_list(path: &Path, source: Format) -> Option<Document> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            info!("{} list loaded from {} ({} lines)", source, path.display(), lines.len());
            Some(Document { source, lines })
        }
        Err(e) => {
            warn!("could not read {} list from {}: {}", source, path.display(), e);
            None
        }
    }
}

/// Write an output artifact, one line per element, newline-terminated.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

/// The session context: all four source lists, loaded once per run and
/// passed by reference into each pipeline invocation.
pub struct ListSet {
    pub tcg: Option<Document>,
    pub ocg: Option<Document>,
    pub traditional: Option<Document>,
    pub worlds: Option<Document>,
}

impl ListSet {
    pub fn load(settings: &Settings) -> Self {
        ListSet {
            tcg: read_list(Path::new(&settings.tcg_list), Format::Tcg),
            ocg: read_list(Path::new(&settings.ocg_list), Format::Ocg),
            traditional: read_list(Path::new(&settings.traditional_list), Format::Traditional),
            worlds: read_list(Path::new(&settings.worlds_list), Format::Worlds),
        }
    }

    pub fn get(&self, format: Format) -> Option<&Document> {
        match format {
            Format::Tcg => self.tcg.as_ref(),
            Format::Ocg => self.ocg.as_ref(),
            Format::Traditional => self.traditional.as_ref(),
            Format::Worlds => self.worlds.as_ref(),
        }
    }

    pub fn require(&self, format: Format) -> Result<&Document, BanlistError> {
        self.get(format).ok_or(BanlistError::MissingSource(format))
    }
}
