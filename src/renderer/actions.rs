use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::state::ButtonFlag;

/// Every action kind the renderer understands, in wire form.
pub const ACTION_KINDS: [&str; 23] = [
    "toggle-policies",
    "toggle-target-locations",
    "toggle-properties",
    "toggle-requirements-capabilities",
    "toggle-deployment-artifacts",
    "toggle-ids",
    "toggle-types",
    "execute-layout",
    "execute-align-horizontal",
    "execute-align-vertical",
    "import-topology",
    "threat-model-topology",
    "split-topology",
    "match-topology",
    "detect-problems",
    "enrich-node-templates",
    "substitute-topology",
    "refine-topology",
    "refine-topology-with-tests",
    "highlight-nodes",
    "determine-stateful-components",
    "determine-freezable-components",
    "clean-freezable-components",
];

/// A user intent dispatched to the renderer store.
///
/// On the wire an action is `{"kind": "..."}`; highlight actions may also
/// carry `nodesToHighlight`. Any JSON object decodes: kinds outside
/// [`ACTION_KINDS`], and a missing or non-string `kind`, become
/// [`Action::Unrecognized`]. A `nodesToHighlight` that is not an array counts
/// as absent and non-string entries are dropped. Only non-objects fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "RawAction")]
pub enum Action {
    TogglePolicies,
    ToggleTargetLocations,
    ToggleProperties,
    ToggleRequirementsCapabilities,
    ToggleDeploymentArtifacts,
    ToggleIds,
    ToggleTypes,
    ExecuteLayout,
    ExecuteAlignHorizontal,
    ExecuteAlignVertical,
    ImportTopology,
    ThreatModelTopology,
    SplitTopology,
    MatchTopology,
    DetectProblems,
    EnrichNodeTemplates,
    SubstituteTopology,
    RefineTopology,
    RefineTopologyWithTests,
    HighlightNodes {
        nodes_to_highlight: Option<Vec<String>>,
    },
    DetermineStatefulComponents,
    DetermineFreezableComponents,
    CleanFreezableComponents,
    Unrecognized(String),
}

impl Action {
    pub fn highlight<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Action::HighlightNodes {
            nodes_to_highlight: Some(nodes.into_iter().map(Into::into).collect()),
        }
    }

    pub fn clear_highlight() -> Self {
        Action::HighlightNodes {
            nodes_to_highlight: None,
        }
    }

    pub fn from_kind(kind: &str, nodes_to_highlight: Option<Vec<String>>) -> Self {
        match kind {
            "toggle-policies" => Action::TogglePolicies,
            "toggle-target-locations" => Action::ToggleTargetLocations,
            "toggle-properties" => Action::ToggleProperties,
            "toggle-requirements-capabilities" => Action::ToggleRequirementsCapabilities,
            "toggle-deployment-artifacts" => Action::ToggleDeploymentArtifacts,
            "toggle-ids" => Action::ToggleIds,
            "toggle-types" => Action::ToggleTypes,
            "execute-layout" => Action::ExecuteLayout,
            "execute-align-horizontal" => Action::ExecuteAlignHorizontal,
            "execute-align-vertical" => Action::ExecuteAlignVertical,
            "import-topology" => Action::ImportTopology,
            "threat-model-topology" => Action::ThreatModelTopology,
            "split-topology" => Action::SplitTopology,
            "match-topology" => Action::MatchTopology,
            "detect-problems" => Action::DetectProblems,
            "enrich-node-templates" => Action::EnrichNodeTemplates,
            "substitute-topology" => Action::SubstituteTopology,
            "refine-topology" => Action::RefineTopology,
            "refine-topology-with-tests" => Action::RefineTopologyWithTests,
            "highlight-nodes" => Action::HighlightNodes { nodes_to_highlight },
            "determine-stateful-components" => Action::DetermineStatefulComponents,
            "determine-freezable-components" => Action::DetermineFreezableComponents,
            "clean-freezable-components" => Action::CleanFreezableComponents,
            other => Action::Unrecognized(other.to_string()),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Action::TogglePolicies => "toggle-policies",
            Action::ToggleTargetLocations => "toggle-target-locations",
            Action::ToggleProperties => "toggle-properties",
            Action::ToggleRequirementsCapabilities => "toggle-requirements-capabilities",
            Action::ToggleDeploymentArtifacts => "toggle-deployment-artifacts",
            Action::ToggleIds => "toggle-ids",
            Action::ToggleTypes => "toggle-types",
            Action::ExecuteLayout => "execute-layout",
            Action::ExecuteAlignHorizontal => "execute-align-horizontal",
            Action::ExecuteAlignVertical => "execute-align-vertical",
            Action::ImportTopology => "import-topology",
            Action::ThreatModelTopology => "threat-model-topology",
            Action::SplitTopology => "split-topology",
            Action::MatchTopology => "match-topology",
            Action::DetectProblems => "detect-problems",
            Action::EnrichNodeTemplates => "enrich-node-templates",
            Action::SubstituteTopology => "substitute-topology",
            Action::RefineTopology => "refine-topology",
            Action::RefineTopologyWithTests => "refine-topology-with-tests",
            Action::HighlightNodes { .. } => "highlight-nodes",
            Action::DetermineStatefulComponents => "determine-stateful-components",
            Action::DetermineFreezableComponents => "determine-freezable-components",
            Action::CleanFreezableComponents => "clean-freezable-components",
            Action::Unrecognized(kind) => kind.as_str(),
        }
    }

    /// The flag a toggle action flips. `None` for highlight and unrecognized
    /// actions.
    pub fn flag(&self) -> Option<ButtonFlag> {
        let flag = match self {
            Action::TogglePolicies => ButtonFlag::Policies,
            Action::ToggleTargetLocations => ButtonFlag::TargetLocations,
            Action::ToggleProperties => ButtonFlag::Properties,
            Action::ToggleRequirementsCapabilities => ButtonFlag::RequirementsCapabilities,
            Action::ToggleDeploymentArtifacts => ButtonFlag::DeploymentArtifacts,
            Action::ToggleIds => ButtonFlag::Ids,
            Action::ToggleTypes => ButtonFlag::Types,
            Action::ExecuteLayout => ButtonFlag::Layout,
            Action::ExecuteAlignHorizontal => ButtonFlag::AlignH,
            Action::ExecuteAlignVertical => ButtonFlag::AlignV,
            Action::ImportTopology => ButtonFlag::ImportTopology,
            Action::ThreatModelTopology => ButtonFlag::ThreatModeling,
            Action::SplitTopology => ButtonFlag::SplitTopology,
            Action::MatchTopology => ButtonFlag::MatchTopology,
            Action::DetectProblems => ButtonFlag::ProblemDetection,
            Action::EnrichNodeTemplates => ButtonFlag::Enrichment,
            Action::SubstituteTopology => ButtonFlag::SubstituteTopology,
            Action::RefineTopology => ButtonFlag::RefineTopology,
            Action::RefineTopologyWithTests => ButtonFlag::RefineTopologyWithTests,
            Action::DetermineStatefulComponents => ButtonFlag::DetermineStatefulComponents,
            Action::DetermineFreezableComponents => ButtonFlag::DetermineFreezableComponents,
            Action::CleanFreezableComponents => ButtonFlag::CleanFreezableComponents,
            Action::HighlightNodes { .. } | Action::Unrecognized(_) => return None,
        };
        Some(flag)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Action::Unrecognized(_))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawAction {
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    nodes_to_highlight: Option<Vec<String>>,
}

impl From<Map<String, Value>> for Action {
    fn from(object: Map<String, Value>) -> Self {
        let Some(kind) = object.get("kind").and_then(Value::as_str) else {
            tracing::warn!("action without a string kind, ignoring it");
            return Action::Unrecognized(String::new());
        };
        let nodes_to_highlight = match object.get("nodesToHighlight") {
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            _ => None,
        };
        Action::from_kind(kind, nodes_to_highlight)
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let kind = action.kind().to_string();
        let nodes_to_highlight = match action {
            Action::HighlightNodes { nodes_to_highlight } => nodes_to_highlight,
            _ => None,
        };
        RawAction {
            kind,
            nodes_to_highlight,
        }
    }
}
