//! Pure transformation stages. Each stage is a standalone function over the
//! previous stage's output; `ViewState` strings the per-view ones together.

pub mod range;
pub mod returns;
pub mod smoothing;
pub mod view;

pub use range::RangePct;
pub use view::ViewState;
