use serde::{Deserialize, Deserializer, Serialize};

/// Java backends send `null` for empty collections and unset flags.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Which kind of properties definition an entity type uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropertiesDefinitionKind {
    Custom,
    Element,
    Type,
    #[default]
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertiesDefinition {
    pub element: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertiesDefinitionKvElement {
    pub key: Option<String>,
    #[serde(rename = "type")]
    pub value_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinerysPropertiesDefinition {
    pub namespace: Option<String>,
    pub element_name: Option<String>,
    #[serde(
        rename = "propertyDefinitionKVList",
        default,
        deserialize_with = "null_as_default"
    )]
    pub property_definition_kv_list: Vec<PropertiesDefinitionKvElement>,
    #[serde(
        rename = "isDerivedFromXSD",
        default,
        deserialize_with = "null_as_default"
    )]
    pub is_derived_from_xsd: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalWorkspaceUrlDefinition {
    pub external_workspace_url: Option<String>,
}

impl ExternalWorkspaceUrlDefinition {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            external_workspace_url: Some(url.into()),
        }
    }

    /// `true` when a non-blank URL is present.
    pub fn is_set(&self) -> bool {
        self.external_workspace_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// Payload exchanged with the properties-definition resource of an entity
/// type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertiesDefinitionsResourceApiData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties_definition: PropertiesDefinition,
    #[serde(default, deserialize_with = "null_as_default")]
    pub winerys_properties_definition: WinerysPropertiesDefinition,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_value: PropertiesDefinitionKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub external_workspace_url_def: ExternalWorkspaceUrlDefinition,
}

impl PropertiesDefinitionsResourceApiData {
    pub fn with_external_workspace_url(mut self, url: impl Into<String>) -> Self {
        self.external_workspace_url_def = ExternalWorkspaceUrlDefinition::new(url);
        self
    }
}
