use std::sync::Arc;

use tracing::{debug, trace};

use super::actions::Action;
use super::reducer::apply;
use super::state::TopologyRendererState;

type Listener = Box<dyn Fn(&Action, &TopologyRendererState) + Send + Sync>;

/// Owns the current renderer snapshot and runs dispatched actions through
/// the reducer.
///
/// Snapshots are handed out as `Arc`s; a snapshot obtained before a dispatch
/// keeps its contents afterwards.
pub struct RendererStore {
    state: Arc<TopologyRendererState>,
    listeners: Vec<Listener>,
    dispatched: u64,
}

impl Default for RendererStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererStore {
    pub fn new() -> Self {
        Self::with_state(TopologyRendererState::new())
    }

    pub fn with_state(state: TopologyRendererState) -> Self {
        Self {
            state: Arc::new(state),
            listeners: Vec::new(),
            dispatched: 0,
        }
    }

    pub fn state(&self) -> Arc<TopologyRendererState> {
        Arc::clone(&self.state)
    }

    /// Number of actions dispatched so far, recognized or not.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&Action, &TopologyRendererState) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn dispatch(&mut self, action: Action) -> Arc<TopologyRendererState> {
        self.dispatched += 1;

        if action.is_recognized() {
            let next = apply(&self.state, &action);
            debug!(
                kind = action.kind(),
                selection = next.nodes_to_select.as_ref().map_or(0, Vec::len),
                "applied renderer action"
            );
            self.state = Arc::new(next);
        } else {
            // Keep the same allocation so callers can compare by pointer
            trace!(kind = action.kind(), "ignoring unrecognized renderer action");
        }

        for listener in &self.listeners {
            listener(&action, &self.state);
        }
        self.state()
    }

    pub fn dispatch_all<I>(&mut self, actions: I) -> Arc<TopologyRendererState>
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        self.state()
    }
}
