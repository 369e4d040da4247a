//! MealMax Random - remote random draws for battles
//!
//! `RandomOrgClient` asks random.org for a single decimal fraction per
//! battle. It blocks the calling thread, enforces its own timeout and maps
//! every failure onto `mealmax_core::RandomError`.

mod client;
mod config;

pub use client::{parse_fraction, RandomOrgClient};
pub use config::RandomOrgConfig;
