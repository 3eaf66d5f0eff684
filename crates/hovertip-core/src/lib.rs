#![forbid(unsafe_code)]

//! Core: geometry snapshots, hover lifecycle, reflow coalescing, and content lookup.

pub mod content;
pub mod geometry;
pub mod hover;
pub mod reflow;
