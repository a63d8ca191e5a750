pub mod properties_definition;

pub use properties_definition::{
    ExternalWorkspaceUrlDefinition, PropertiesDefinition, PropertiesDefinitionKind,
    PropertiesDefinitionKvElement, PropertiesDefinitionsResourceApiData,
    WinerysPropertiesDefinition,
};
