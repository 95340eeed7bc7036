//! The two screens and the row component they share.

pub mod completed;
pub mod list;
pub mod row;

pub use list::ListScreen;
pub use row::{RowResponse, task_row};

/// Which screen fills the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    List,
    Completed,
}
