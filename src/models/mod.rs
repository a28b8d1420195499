// Data Models
pub mod entry;
pub mod focus;
pub mod submission;
pub mod text_cursor;
pub mod viewport;

pub use entry::{Entry, EntryKind, IconStyle, SelectionMode};
pub use focus::{FocusCoordinator, FocusTarget};
pub use submission::{compose_path, unmet_requirements, Requirement};
pub use text_cursor::{TextCursor, TextWindow};
pub use viewport::ViewportScroller;
