// UI Components
pub mod button;
pub mod dialog;
pub mod error_popup;
pub mod name_field;
pub mod selector;
pub mod widget;

// Re-export components for convenience
pub use button::{Button, ButtonRole};
pub use dialog::{DialogOptions, DialogState, FileDialog};
pub use error_popup::ErrorPopup;
pub use name_field::NameField;
pub use selector::{Activation, FileSelector, ScrollDirection};
pub use widget::{DialogWidget, WidgetAction};
