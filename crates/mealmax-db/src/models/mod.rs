//! Database models for persistent storage.

mod meal;

pub use meal::*;
