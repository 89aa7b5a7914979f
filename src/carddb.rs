use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use tracing::info;

/// Card names keyed by card id, read from a YGOPro card database.
pub fn load_card_names(path: &Path) -> Result<HashMap<u32, String>> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("failed to open card database {}", path.display()))?;

    let mut stmt = conn.prepare("SELECT id, name FROM texts")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut names = HashMap::new();
    for row in rows {
        let (id, name) = row?;
        // Ids outside u32 cannot name a script file; ignore them.
        if let Ok(id) = u32::try_from(id) {
            names.insert(id, name);
        }
    }

    info!("loaded {} card names from {}", names.len(), path.display());
    Ok(names)
}
