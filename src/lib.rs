//! ahora - Build-in-public diary dashboard
//!
//! Reads hand-written diary entries (YAML front matter plus markdown) and
//! derives the dashboard aggregates: goal progress, category balance and
//! colors, build-day counters, the week/day timeline and achievement tallies.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
