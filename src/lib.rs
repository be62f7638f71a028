//! Navigation buttons for paginated UIs.
//!
//! Given the current page, the page range and a few display preferences,
//! [`pagination`] decides which page numbers to show, where to put ellipses
//! and which pages are the previous/next targets. The result is plain data
//! for a rendering layer; [`assembly`] exposes the same calculation to
//! JavaScript as JSON.

pub mod assembly;
mod calculator;
mod console;
pub mod schema;

pub use calculator::pagination;
pub use schema::{
    Button, ButtonType, PageKind, PaginationArgs, PaginationData, PaginationError,
    PaginationOptions,
};
