#[cfg(test)]
mod tests {
    use super::super::actions::{ACTION_KINDS, Action};
    use super::super::state::ButtonFlag;

    #[test]
    fn test_every_kind_is_recognized() {
        for kind in ACTION_KINDS {
            let action = Action::from_kind(kind, None);
            assert!(action.is_recognized(), "{kind} decoded as unrecognized");
            assert_eq!(action.kind(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_kept_verbatim() {
        let action = Action::from_kind("@@redux/INIT", None);

        assert_eq!(action, Action::Unrecognized("@@redux/INIT".to_string()));
        assert_eq!(action.kind(), "@@redux/INIT");
        assert_eq!(action.flag(), None);
    }

    #[test]
    fn test_flag_mapping() {
        assert_eq!(Action::TogglePolicies.flag(), Some(ButtonFlag::Policies));
        assert_eq!(Action::ExecuteAlignHorizontal.flag(), Some(ButtonFlag::AlignH));
        assert_eq!(Action::ExecuteAlignVertical.flag(), Some(ButtonFlag::AlignV));
        assert_eq!(Action::DetectProblems.flag(), Some(ButtonFlag::ProblemDetection));
        assert_eq!(Action::EnrichNodeTemplates.flag(), Some(ButtonFlag::Enrichment));
        assert_eq!(
            Action::ThreatModelTopology.flag(),
            Some(ButtonFlag::ThreatModeling)
        );
        assert_eq!(Action::clear_highlight().flag(), None);
    }

    #[test]
    fn test_deserialize_toggle() {
        let action: Action = serde_json::from_str(r#"{"kind": "toggle-ids"}"#).unwrap();

        assert_eq!(action, Action::ToggleIds);
    }

    #[test]
    fn test_deserialize_highlight_with_nodes() {
        let action: Action =
            serde_json::from_str(r#"{"kind": "highlight-nodes", "nodesToHighlight": ["A", "B"]}"#)
                .unwrap();

        assert_eq!(action, Action::highlight(["A", "B"]));
    }

    #[test]
    fn test_deserialize_highlight_without_nodes() {
        let action: Action = serde_json::from_str(r#"{"kind": "highlight-nodes"}"#).unwrap();

        assert_eq!(action, Action::clear_highlight());
    }

    #[test]
    fn test_deserialize_unknown_kind() {
        let action: Action = serde_json::from_str(r#"{"kind": "zoom"}"#).unwrap();

        assert_eq!(action, Action::Unrecognized("zoom".to_string()));
    }

    #[test]
    fn test_deserialize_missing_kind_is_unrecognized() {
        let action: Action = serde_json::from_str(r#"{"type": "toggle-ids"}"#).unwrap();

        assert_eq!(action, Action::Unrecognized(String::new()));
        assert!(!action.is_recognized());
    }

    #[test]
    fn test_deserialize_non_string_kind_is_unrecognized() {
        let action: Action = serde_json::from_str(r#"{"kind": 42}"#).unwrap();

        assert_eq!(action, Action::Unrecognized(String::new()));
    }

    #[test]
    fn test_toggle_ignores_malformed_nodes_field() {
        let action: Action =
            serde_json::from_str(r#"{"kind": "toggle-ids", "nodesToHighlight": 5}"#).unwrap();

        assert_eq!(action, Action::ToggleIds);
    }

    #[test]
    fn test_highlight_with_non_array_nodes_counts_as_absent() {
        let action: Action =
            serde_json::from_str(r#"{"kind": "highlight-nodes", "nodesToHighlight": "A"}"#)
                .unwrap();

        assert_eq!(action, Action::clear_highlight());
    }

    #[test]
    fn test_highlight_drops_non_string_entries() {
        let action: Action = serde_json::from_str(
            r#"{"kind": "highlight-nodes", "nodesToHighlight": ["A", 3, null, "B"]}"#,
        )
        .unwrap();

        assert_eq!(action, Action::highlight(["A", "B"]));
    }

    #[test]
    fn test_deserialize_rejects_non_objects() {
        assert!(serde_json::from_str::<Action>("5").is_err());
        assert!(serde_json::from_str::<Action>(r#""toggle-ids""#).is_err());
        assert!(serde_json::from_str::<Action>(r#"["toggle-ids"]"#).is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let json = serde_json::to_value(Action::highlight(["n1"])).unwrap();
        assert_eq!(json["kind"], "highlight-nodes");
        assert_eq!(json["nodesToHighlight"][0], "n1");

        let json = serde_json::to_value(Action::RefineTopologyWithTests).unwrap();
        assert_eq!(json["kind"], "refine-topology-with-tests");
        assert!(json.get("nodesToHighlight").is_none());
    }
}
