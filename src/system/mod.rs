// System Layer
pub mod filesystem;

pub use filesystem::{DirectorySource, FileSystem, ListedItem};
