//! View-state layer - scroll position and viewport geometry
//!
//! # Module Structure
//!
//! - `types`: ViewportDimensions and the status bar reservation
//! - `viewport`: Viewport - clamped scroll offset, visible range, position readout

pub mod types;
pub mod viewport;
