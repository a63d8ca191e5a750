#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::super::actions::Action;
    use super::super::state::TopologyRendererState;
    use super::super::store::RendererStore;

    #[test]
    fn test_new_store_holds_initial_state() {
        let store = RendererStore::new();

        assert_eq!(*store.state(), TopologyRendererState::new());
        assert_eq!(store.dispatched(), 0);
    }

    #[test]
    fn test_dispatch_replaces_snapshot() {
        let mut store = RendererStore::new();
        let before = store.state();

        let after = store.dispatch(Action::ToggleProperties);

        assert!(after.buttons_state.properties_button);
        assert!(!before.buttons_state.properties_button);
        assert!(!Arc::ptr_eq(&before, &after));
        assert!(Arc::ptr_eq(&after, &store.state()));
    }

    #[test]
    fn test_unrecognized_dispatch_keeps_same_snapshot() {
        let mut store = RendererStore::new();
        let before = store.state();

        let after = store.dispatch(Action::Unrecognized("noop".to_string()));

        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(store.dispatched(), 1);
    }

    #[test]
    fn test_clear_does_not_touch_held_snapshot() {
        let mut store = RendererStore::new();
        let highlighted = store.dispatch(Action::highlight(["A"]));

        let cleared = store.dispatch(Action::clear_highlight());

        assert_eq!(highlighted.nodes_to_select, Some(vec!["A".to_string()]));
        assert_eq!(cleared.nodes_to_select, None);
    }

    #[test]
    fn test_subscribers_see_every_dispatch() {
        let mut store = RendererStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |action, state| {
            sink.lock()
                .unwrap()
                .push((action.kind().to_string(), state.buttons_state.layout_button));
        });

        store.dispatch(Action::ExecuteLayout);
        store.dispatch(Action::Unrecognized("other".to_string()));
        store.dispatch(Action::ExecuteLayout);

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("execute-layout".to_string(), true),
                ("other".to_string(), true),
                ("execute-layout".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_dispatch_all() {
        let mut store = RendererStore::with_state(TopologyRendererState::default());

        let state = store.dispatch_all(vec![
            Action::ImportTopology,
            Action::highlight(["x", "y"]),
            Action::CleanFreezableComponents,
        ]);

        assert!(state.buttons_state.import_topology_button);
        assert!(state.buttons_state.clean_freezable_components_button);
        assert_eq!(state.nodes_to_select.as_ref().map(Vec::len), Some(2));
        assert_eq!(store.dispatched(), 3);
    }
}
