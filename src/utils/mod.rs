//! Utility Module
//!
//! - [`GameTime`]: frame clock producing the per-frame elapsed seconds

pub mod time;

pub use time::GameTime;
