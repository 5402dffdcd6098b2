//! Domain model module declarations.

pub mod habit;
pub mod sleep;
pub mod task;
