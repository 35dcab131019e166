pub mod category;
pub mod format;
pub mod list;
