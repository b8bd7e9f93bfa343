pub mod build;
pub mod check;
pub mod completions;
pub mod list;
