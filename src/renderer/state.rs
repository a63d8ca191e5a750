use serde::{Deserialize, Serialize};

/// Names one of the fixed toolbar flags of the topology renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonFlag {
    TargetLocations,
    Policies,
    RequirementsCapabilities,
    DeploymentArtifacts,
    Properties,
    Types,
    Ids,
    Layout,
    AlignH,
    AlignV,
    ImportTopology,
    ThreatModeling,
    SplitTopology,
    MatchTopology,
    ProblemDetection,
    Enrichment,
    SubstituteTopology,
    RefineTopology,
    RefineTopologyWithTests,
    DetermineStatefulComponents,
    DetermineFreezableComponents,
    CleanFreezableComponents,
}

impl ButtonFlag {
    pub const ALL: [ButtonFlag; 22] = [
        ButtonFlag::TargetLocations,
        ButtonFlag::Policies,
        ButtonFlag::RequirementsCapabilities,
        ButtonFlag::DeploymentArtifacts,
        ButtonFlag::Properties,
        ButtonFlag::Types,
        ButtonFlag::Ids,
        ButtonFlag::Layout,
        ButtonFlag::AlignH,
        ButtonFlag::AlignV,
        ButtonFlag::ImportTopology,
        ButtonFlag::ThreatModeling,
        ButtonFlag::SplitTopology,
        ButtonFlag::MatchTopology,
        ButtonFlag::ProblemDetection,
        ButtonFlag::Enrichment,
        ButtonFlag::SubstituteTopology,
        ButtonFlag::RefineTopology,
        ButtonFlag::RefineTopologyWithTests,
        ButtonFlag::DetermineStatefulComponents,
        ButtonFlag::DetermineFreezableComponents,
        ButtonFlag::CleanFreezableComponents,
    ];

    /// Key used for this flag in the serialized `buttonsState` object.
    pub fn key(self) -> &'static str {
        match self {
            ButtonFlag::TargetLocations => "targetLocationsButton",
            ButtonFlag::Policies => "policiesButton",
            ButtonFlag::RequirementsCapabilities => "requirementsCapabilitiesButton",
            ButtonFlag::DeploymentArtifacts => "deploymentArtifactsButton",
            ButtonFlag::Properties => "propertiesButton",
            ButtonFlag::Types => "typesButton",
            ButtonFlag::Ids => "idsButton",
            ButtonFlag::Layout => "layoutButton",
            ButtonFlag::AlignH => "alignHButton",
            ButtonFlag::AlignV => "alignVButton",
            ButtonFlag::ImportTopology => "importTopologyButton",
            ButtonFlag::ThreatModeling => "threatModelingButton",
            ButtonFlag::SplitTopology => "splitTopologyButton",
            ButtonFlag::MatchTopology => "matchTopologyButton",
            ButtonFlag::ProblemDetection => "problemDetectionButton",
            ButtonFlag::Enrichment => "enrichmentButton",
            ButtonFlag::SubstituteTopology => "substituteTopologyButton",
            ButtonFlag::RefineTopology => "refineTopologyButton",
            ButtonFlag::RefineTopologyWithTests => "refineTopologyWithTestsButton",
            ButtonFlag::DetermineStatefulComponents => "determineStatefulComponents",
            ButtonFlag::DetermineFreezableComponents => "determineFreezableComponentsButton",
            ButtonFlag::CleanFreezableComponents => "cleanFreezableComponentsButton",
        }
    }
}

/// On/off state of every toolbar button.
///
/// Missing keys in serialized input fall back to the initial values, so a
/// partial `buttonsState` object still yields a complete set of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonsState {
    pub target_locations_button: bool,
    pub policies_button: bool,
    pub requirements_capabilities_button: bool,
    pub deployment_artifacts_button: bool,
    pub properties_button: bool,
    pub types_button: bool,
    pub ids_button: bool,
    pub layout_button: bool,
    pub align_h_button: bool,
    pub align_v_button: bool,
    pub import_topology_button: bool,
    pub threat_modeling_button: bool,
    pub split_topology_button: bool,
    pub match_topology_button: bool,
    pub problem_detection_button: bool,
    pub enrichment_button: bool,
    pub substitute_topology_button: bool,
    pub refine_topology_button: bool,
    pub refine_topology_with_tests_button: bool,
    pub determine_stateful_components: bool,
    pub determine_freezable_components_button: bool,
    pub clean_freezable_components_button: bool,
}

impl Default for ButtonsState {
    fn default() -> Self {
        Self {
            target_locations_button: false,
            policies_button: false,
            requirements_capabilities_button: false,
            deployment_artifacts_button: false,
            properties_button: false,
            types_button: true,
            ids_button: false,
            layout_button: false,
            align_h_button: false,
            align_v_button: false,
            import_topology_button: false,
            threat_modeling_button: false,
            split_topology_button: false,
            match_topology_button: false,
            problem_detection_button: false,
            enrichment_button: false,
            substitute_topology_button: false,
            refine_topology_button: false,
            refine_topology_with_tests_button: false,
            determine_stateful_components: false,
            determine_freezable_components_button: false,
            clean_freezable_components_button: false,
        }
    }
}

impl ButtonsState {
    pub fn get(&self, flag: ButtonFlag) -> bool {
        match flag {
            ButtonFlag::TargetLocations => self.target_locations_button,
            ButtonFlag::Policies => self.policies_button,
            ButtonFlag::RequirementsCapabilities => self.requirements_capabilities_button,
            ButtonFlag::DeploymentArtifacts => self.deployment_artifacts_button,
            ButtonFlag::Properties => self.properties_button,
            ButtonFlag::Types => self.types_button,
            ButtonFlag::Ids => self.ids_button,
            ButtonFlag::Layout => self.layout_button,
            ButtonFlag::AlignH => self.align_h_button,
            ButtonFlag::AlignV => self.align_v_button,
            ButtonFlag::ImportTopology => self.import_topology_button,
            ButtonFlag::ThreatModeling => self.threat_modeling_button,
            ButtonFlag::SplitTopology => self.split_topology_button,
            ButtonFlag::MatchTopology => self.match_topology_button,
            ButtonFlag::ProblemDetection => self.problem_detection_button,
            ButtonFlag::Enrichment => self.enrichment_button,
            ButtonFlag::SubstituteTopology => self.substitute_topology_button,
            ButtonFlag::RefineTopology => self.refine_topology_button,
            ButtonFlag::RefineTopologyWithTests => self.refine_topology_with_tests_button,
            ButtonFlag::DetermineStatefulComponents => self.determine_stateful_components,
            ButtonFlag::DetermineFreezableComponents => self.determine_freezable_components_button,
            ButtonFlag::CleanFreezableComponents => self.clean_freezable_components_button,
        }
    }

    /// Returns a copy with `flag` flipped and every other flag unchanged.
    pub fn toggled(&self, flag: ButtonFlag) -> Self {
        let mut next = *self;
        let slot = next.slot_mut(flag);
        *slot = !*slot;
        next
    }

    /// Iterates flags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ButtonFlag, bool)> + '_ {
        ButtonFlag::ALL.iter().map(move |&flag| (flag, self.get(flag)))
    }

    fn slot_mut(&mut self, flag: ButtonFlag) -> &mut bool {
        match flag {
            ButtonFlag::TargetLocations => &mut self.target_locations_button,
            ButtonFlag::Policies => &mut self.policies_button,
            ButtonFlag::RequirementsCapabilities => &mut self.requirements_capabilities_button,
            ButtonFlag::DeploymentArtifacts => &mut self.deployment_artifacts_button,
            ButtonFlag::Properties => &mut self.properties_button,
            ButtonFlag::Types => &mut self.types_button,
            ButtonFlag::Ids => &mut self.ids_button,
            ButtonFlag::Layout => &mut self.layout_button,
            ButtonFlag::AlignH => &mut self.align_h_button,
            ButtonFlag::AlignV => &mut self.align_v_button,
            ButtonFlag::ImportTopology => &mut self.import_topology_button,
            ButtonFlag::ThreatModeling => &mut self.threat_modeling_button,
            ButtonFlag::SplitTopology => &mut self.split_topology_button,
            ButtonFlag::MatchTopology => &mut self.match_topology_button,
            ButtonFlag::ProblemDetection => &mut self.problem_detection_button,
            ButtonFlag::Enrichment => &mut self.enrichment_button,
            ButtonFlag::SubstituteTopology => &mut self.substitute_topology_button,
            ButtonFlag::RefineTopology => &mut self.refine_topology_button,
            ButtonFlag::RefineTopologyWithTests => &mut self.refine_topology_with_tests_button,
            ButtonFlag::DetermineStatefulComponents => &mut self.determine_stateful_components,
            ButtonFlag::DetermineFreezableComponents => {
                &mut self.determine_freezable_components_button
            }
            ButtonFlag::CleanFreezableComponents => &mut self.clean_freezable_components_button,
        }
    }
}

/// Immutable snapshot held by the renderer store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyRendererState {
    #[serde(default)]
    pub buttons_state: ButtonsState,
    // None means no highlight; never Some(empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_to_select: Option<Vec<String>>,
}

impl TopologyRendererState {
    pub fn new() -> Self {
        Self::default()
    }
}
