//! Toolbar state of the topology renderer.
//!
//! [`apply`] is the pure reducer; [`RendererStore`] wraps it with a current
//! snapshot and subscribers.

pub mod actions;
pub mod reducer;
pub mod state;
pub mod store;

#[cfg(test)]
mod actions_test;
#[cfg(test)]
mod store_test;

pub use actions::{ACTION_KINDS, Action};
pub use reducer::{apply, apply_all};
pub use state::{ButtonFlag, ButtonsState, TopologyRendererState};
pub use store::RendererStore;
