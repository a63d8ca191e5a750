pub mod config;
pub mod features;
pub mod renderer;
pub mod schemas;
pub mod telemetry;
pub mod workspace;

pub use config::{RepositoryConfiguration, UiConfiguration, default_config_path};
pub use features::{Feature, FeatureToggle};
pub use renderer::{
    Action, ButtonFlag, ButtonsState, RendererStore, TopologyRendererState, apply, apply_all,
};
pub use schemas::{ExternalWorkspaceUrlDefinition, PropertiesDefinitionsResourceApiData};
pub use workspace::{
    Notification, WorkspaceClient, WorkspaceEditor, WorkspaceError, WorkspaceResponse,
    WorkspaceService,
};
