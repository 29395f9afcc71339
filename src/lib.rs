pub mod completions;
pub mod dispatch;
pub mod errors;
pub mod pathspec;
pub mod register;
pub mod registry;
