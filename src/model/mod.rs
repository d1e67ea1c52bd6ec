//! Output model for converted presentations.
//!
//! The converter produces these structures; renderers turn them into JSON
//! or standalone HTML pages.

mod animation;
mod presentation;

pub use animation::*;
pub use presentation::*;
