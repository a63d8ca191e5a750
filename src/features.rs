use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::UiConfiguration;

/// Optional repository features that gate parts of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    Accountability,
    Completion,
    Compliance,
    FreezeAndDefrost,
    ManagementFeatureEnrichment,
    Nfv,
    PatternRefinement,
    ProblemDetection,
    Splitting,
    TestRefinement,
}

impl Feature {
    pub const ALL: [Feature; 10] = [
        Feature::Accountability,
        Feature::Completion,
        Feature::Compliance,
        Feature::FreezeAndDefrost,
        Feature::ManagementFeatureEnrichment,
        Feature::Nfv,
        Feature::PatternRefinement,
        Feature::ProblemDetection,
        Feature::Splitting,
        Feature::TestRefinement,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Feature::Accountability => "accountability",
            Feature::Completion => "completion",
            Feature::Compliance => "compliance",
            Feature::FreezeAndDefrost => "freezeAndDefrost",
            Feature::ManagementFeatureEnrichment => "managementFeatureEnrichment",
            Feature::Nfv => "nfv",
            Feature::PatternRefinement => "patternRefinement",
            Feature::ProblemDetection => "problemDetection",
            Feature::Splitting => "splitting",
            Feature::TestRefinement => "testRefinement",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.key() == s)
            .ok_or_else(|| format!("Unknown feature: {s}"))
    }
}

/// Decides whether a feature-gated piece of UI is rendered.
pub struct FeatureToggle<'a> {
    config: &'a UiConfiguration,
}

impl<'a> FeatureToggle<'a> {
    pub fn new(config: &'a UiConfiguration) -> Self {
        Self { config }
    }

    /// Keys missing from the configuration count as disabled.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.config.features.get(key).copied().unwrap_or(false)
    }

    /// Builds the gated content when `key` is enabled, otherwise renders
    /// nothing.
    pub fn render<T, F>(&self, key: &str, build: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        if self.is_enabled(key) {
            Some(build())
        } else {
            tracing::trace!(feature = key, "feature disabled, hiding content");
            None
        }
    }

    pub fn enabled_features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|feature| self.is_enabled(feature.key()))
            .collect()
    }
}
