//! Embedded data tables the generators are built from.

pub mod macros;
pub mod property;
pub mod status;
pub mod types;
