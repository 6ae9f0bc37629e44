//! Reusable rendering widgets.

pub mod slider;
