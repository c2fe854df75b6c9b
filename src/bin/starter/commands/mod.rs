//! Command implementations

pub mod completions;
pub mod includes;
pub mod new;
pub mod templates;
