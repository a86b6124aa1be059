//! CLI commands

pub mod clean;
pub mod columns;
pub mod generate;
pub mod list;
pub mod new;
pub mod render;
