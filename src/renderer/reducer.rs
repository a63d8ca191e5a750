use super::actions::Action;
use super::state::TopologyRendererState;

/// Computes the snapshot that follows `state` once `action` is applied.
///
/// Never mutates `state`. Toggle actions flip their flag, highlight actions
/// replace or clear the selection, anything else is returned unchanged.
pub fn apply(state: &TopologyRendererState, action: &Action) -> TopologyRendererState {
    match action {
        Action::HighlightNodes { nodes_to_highlight } => TopologyRendererState {
            buttons_state: state.buttons_state,
            nodes_to_select: nodes_to_highlight
                .as_ref()
                .filter(|nodes| !nodes.is_empty())
                .cloned(),
        },
        Action::Unrecognized(_) => state.clone(),
        toggle => match toggle.flag() {
            Some(flag) => TopologyRendererState {
                buttons_state: state.buttons_state.toggled(flag),
                nodes_to_select: state.nodes_to_select.clone(),
            },
            None => state.clone(),
        },
    }
}

/// Folds a sequence of actions starting from `initial`.
pub fn apply_all<'a, I>(initial: &TopologyRendererState, actions: I) -> TopologyRendererState
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(initial.clone(), |state, action| apply(&state, action))
}
