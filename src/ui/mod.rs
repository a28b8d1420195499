// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

pub use layout::{dialog_area, resolve, Rectangle, WidgetRole, DIALOG_PAD_X, DIALOG_PAD_Y};

pub use components::{DialogOptions, DialogState, FileDialog};
pub use theme::{Theme, ThemeManager};
