/// Wiki page store - markdown pages with line-indexed editing and wiki links
///
/// A wiki is a directory tree of markdown files carrying a `.wikimage`
/// sentinel marker. Pages are identified by filename stem and may live in
/// subdirectories. All content is plain markdown; `[[Page Name]]` links to
/// another page.
pub mod edit;
pub mod init;
pub mod links;
pub mod store;

// Re-export core types
pub use self::edit::Edit;
pub use self::store::WikiStore;

/// Errors raised by wiki operations
///
/// Messages are written for the calling agent: they name the page and state
/// what to do instead.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("Page '{0}' does not exist. Please create the page before using it.")]
    PageNotFound(String),

    #[error("Page '{0}' already exists. Please choose a different name, or use the edit tool.")]
    PageExists(String),

    #[error("Invalid page name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Edit ({start}, {end}) is out of bounds. Page only has {line_count} lines. Please ensure that the edit is within the bounds of the page")]
    EditOutOfBounds {
        start: usize,
        end: usize,
        line_count: usize,
    },

    #[error("Edit ({start}, {end}) has start after end. Please ensure that start <= end")]
    EditReversed { start: usize, end: usize },

    #[error("Edits {first} ({first_start}, {first_end}) and {second} ({second_start}, {second_end}) overlap. Please ensure that edits do not overlap")]
    EditsOverlap {
        first: usize,
        first_start: usize,
        first_end: usize,
        second: usize,
        second_start: usize,
        second_end: usize,
    },

    #[error("Directory '{0}' is not a wikimage-managed wiki (missing .wikimage marker)")]
    NotAWiki(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
