pub mod commands;
pub mod cursor;
pub mod projection;
pub mod sort;
pub mod state;

pub use projection::{NO_DESCRIPTION, Row, project};
pub use sort::{SortColumn, SortDirection, SortSpec};
pub use state::ViewState;
