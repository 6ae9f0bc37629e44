//! Folio Core — dataset model and the chart data pipeline.
//!
//! The pipeline stages, in order:
//! - fetch + decode (`data`): workbook/CSV bytes → `Dataset`
//! - return transform (`transform::returns`): percent change from start
//! - range filter (`transform::range`): percentage sub-window
//! - smoothing (`transform::smoothing`): trailing moving average
//! - chart spec (`render`): tracks, axes, baseline for the UI surface
//!
//! Every stage is a pure, synchronous function. A view change re-runs the
//! per-view stages from the full dataset; nothing is updated incrementally.

pub mod config;
pub mod data;
pub mod domain;
pub mod render;
pub mod transform;
