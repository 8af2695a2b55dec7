//! ttpager
//!
//! Line-oriented terminal pager for files and piped input.
//!
//! The whole input is read into a [`model::LineStore`] before the first
//! frame; a [`view::PagerApp`] then moves a [`view_state::viewport::Viewport`]
//! over it in response to keys. Pure Core / Impure Shell: `model`, `state`
//! and `view_state` hold no terminal handles, `view` and `handoff` do.

pub mod config;
pub mod handoff;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
