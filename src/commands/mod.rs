//! Command implementations

pub mod backup;

pub use backup::*;
