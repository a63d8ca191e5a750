use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use topology_renderer::{
    Action, Feature, FeatureToggle, Notification, RendererStore, RepositoryConfiguration,
    TopologyRendererState, WorkspaceClient, WorkspaceEditor, WorkspaceService, default_config_path,
    telemetry,
};

#[derive(Parser)]
#[command(
    name = "topology-renderer",
    version,
    about = "Replay topology renderer actions and manage repository UI settings",
    long_about = None
)]
struct Cli {
    /// Base URL of the repository backend
    #[arg(
        long,
        global = true,
        env = "WINERY_BACKEND_URL",
        default_value = "http://localhost:8080/winery"
    )]
    backend_url: String,

    /// Repository UI configuration file (default: ~/.winery/winery.json)
    #[arg(long, global = true, env = "WINERY_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fold a JSON-lines stream of actions through the renderer and print the final state
    Replay {
        /// Actions file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show repository features that gate UI controls
    Features {
        /// List every known feature with its status
        #[arg(long)]
        all: bool,

        /// Enable a feature and save the configuration
        #[arg(long, value_name = "FEATURE")]
        enable: Vec<String>,

        /// Disable a feature and save the configuration
        #[arg(long, value_name = "FEATURE")]
        disable: Vec<String>,
    },

    /// Read or store the external workspace URL of a repository entity
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommand,
    },
}

#[derive(Subcommand)]
enum WorkspaceCommand {
    /// Print the stored workspace URL
    Get {
        /// Entity path below the backend URL (e.g. /servicetemplates/ns/Shop)
        instance_path: String,
    },
    /// Store a new workspace URL
    Set {
        /// Entity path below the backend URL (e.g. /servicetemplates/ns/Shop)
        instance_path: String,
        url: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        telemetry::init_json_tracing(cli.verbose);
    } else {
        telemetry::init_tracing(cli.verbose);
    }

    match cli.command {
        Commands::Replay { file, format } => replay(file.as_deref(), format),
        Commands::Features {
            all,
            enable,
            disable,
        } => {
            let path = match cli.config {
                Some(path) => path,
                None => default_config_path()
                    .context("Could not determine home directory for configuration")?,
            };
            features(&path, all, &enable, &disable)
        }
        Commands::Workspace { command } => workspace(&cli.backend_url, command).await,
    }
}

fn replay(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut store = RendererStore::new();
    let mut ignored = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let action: Action = serde_json::from_str(&line)
            .with_context(|| format!("Invalid action on line {}", index + 1))?;
        if !action.is_recognized() {
            ignored += 1;
        }
        store.dispatch(action);
    }

    tracing::info!(
        "Replayed {} actions ({} unrecognized)",
        store.dispatched(),
        ignored
    );

    let state = store.state();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Text => print_state(&mut handle, &state)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, state.as_ref())?;
            writeln!(&mut handle)?;
        }
    }
    Ok(())
}

fn print_state(out: &mut impl Write, state: &TopologyRendererState) -> Result<()> {
    for (flag, value) in state.buttons_state.iter() {
        writeln!(out, "{:<36} {}", flag.key(), if value { "on" } else { "off" })?;
    }
    match &state.nodes_to_select {
        Some(nodes) => writeln!(out, "{:<36} {}", "nodesToSelect", nodes.join(", "))?,
        None => writeln!(out, "{:<36} (none)", "nodesToSelect")?,
    }
    Ok(())
}

fn features(path: &Path, all: bool, enable: &[String], disable: &[String]) -> Result<()> {
    let mut config = RepositoryConfiguration::load_or_create(path)?;

    if !enable.is_empty() || !disable.is_empty() {
        for key in enable {
            warn_unknown_feature(key);
            config.set_feature(key, true);
        }
        for key in disable {
            warn_unknown_feature(key);
            config.set_feature(key, false);
        }
        config.save(path)?;
        tracing::info!("Saved configuration to {}", path.display());
    }

    let toggle = FeatureToggle::new(&config.ui);
    if all {
        for feature in Feature::ALL {
            let status = if toggle.is_enabled(feature.key()) {
                "enabled"
            } else {
                "disabled"
            };
            println!("{:<30} {status}", feature.key());
        }
    } else {
        let enabled = toggle.enabled_features();
        if enabled.is_empty() {
            println!("No features enabled.");
        }
        for feature in enabled {
            println!("{feature}");
        }
    }
    Ok(())
}

fn warn_unknown_feature(key: &str) {
    if key.parse::<Feature>().is_err() {
        tracing::warn!("'{key}' is not a known feature; storing it anyway");
    }
}

async fn workspace(backend_url: &str, command: WorkspaceCommand) -> Result<()> {
    match command {
        WorkspaceCommand::Get { instance_path } => {
            let client = WorkspaceClient::new(backend_url, &instance_path)?;
            let url = client.fetch_url().await?;
            println!("{url}");
        }
        WorkspaceCommand::Set { instance_path, url } => {
            let client = WorkspaceClient::new(backend_url, &instance_path)?;
            let mut editor = WorkspaceEditor::new();
            editor.load(&client).await;
            editor.set_external_url(url);

            if editor.external_url_available && !editor.is_modified() {
                println!("Workspace url unchanged.");
                return Ok(());
            }

            match editor.save(&client).await {
                Notification::Success(message) => println!("{message}"),
                Notification::Error(message) => anyhow::bail!(message),
            }
        }
    }
    Ok(())
}
