use crate::store::Format;

/// Pipeline failures. Each aborts only the invocation that raised it; the
/// other pipelines stay usable. Non-matching body lines are never errors:
/// comments and blanks are expected content.
#[derive(Debug, thiserror::Error)]
pub enum BanlistError {
    /// A required source list was not loaded.
    #[error("{0} list is not loaded")]
    MissingSource(Format),

    /// No source list carries a parsable identifier header, so a derived
    /// list cannot be stamped.
    #[error("no source list carries a parsable identifier header")]
    UnparsableHeader,

    /// A header rewrite needs at least two lines.
    #[error("{format} list has {lines} line(s), need at least 2 to rewrite the header")]
    MalformedDocument { format: Format, lines: usize },
}
