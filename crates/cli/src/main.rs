//! `chronicle` -- operator CLI for the Chronicle archive backend.
//!
//! Drives the authenticated CRUD collections and the encrypted-vault
//! storage flow from the command line.  Results print as JSON on
//! stdout; failures print on stderr with a nonzero exit.
//!
//! # Environment variables
//!
//! | Variable                  | Required  | Default                 | Description                 |
//! |---------------------------|-----------|-------------------------|-----------------------------|
//! | `CHRONICLE_API_URL`       | no        | `http://localhost:5138` | Backend base URL            |
//! | `CHRONICLE_TOKEN`         | for CRUD  | --                      | Bearer credential           |
//! | `CHRONICLE_STORAGE_URL`   | for vault | --                      | Storage bridge endpoint     |
//! | `CHRONICLE_STORAGE_TOKEN` | for vault | --                      | Storage bridge access token |

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chronicle_client::api::{ApiClient, ResourceClient};
use chronicle_client::config::ClientConfig;
use chronicle_core::types::{RecordId, Resource};
use chronicle_storage::http::HttpStore;
use chronicle_storage::store::Cid;
use chronicle_storage::vault;

#[derive(Parser)]
#[command(name = "chronicle", about = "Operator CLI for the Chronicle archive backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Operate on the gallery collection.
    Gallery {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Operate on the research collection.
    Research {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Operate on the timeline collection.
    Timeline {
        #[command(subcommand)]
        action: CrudAction,
    },
    /// Move encrypted payloads to and from the storage network.
    Vault {
        #[command(subcommand)]
        action: VaultAction,
    },
}

#[derive(Subcommand)]
enum CrudAction {
    /// List every record in the collection.
    List,
    /// Create a record from a JSON file (stdin when omitted).
    Create { file: Option<PathBuf> },
    /// Replace the record with the given id wholesale.
    Update { id: RecordId, file: Option<PathBuf> },
    /// Delete the record with the given id.
    Delete { id: RecordId },
}

#[derive(Subcommand)]
enum VaultAction {
    /// Upload an (already encrypted) payload file and print its cid.
    Put {
        file: PathBuf,
        /// Stored file name (default: `secret.txt`).
        #[arg(long)]
        name: Option<String>,
    },
    /// Fetch a payload by cid and print it to stdout.
    Get {
        cid: String,
        /// Stored file name (default: `secret.txt`).
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chronicle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let api = ApiClient::new(config.base_url);

    match cli.command {
        Command::Gallery { action } => run_crud(api.gallery(), action).await,
        Command::Research { action } => run_crud(api.research(), action).await,
        Command::Timeline { action } => run_crud(api.timeline(), action).await,
        Command::Vault { action } => run_vault(action).await,
    }
}

/// Bearer credential for CRUD calls, from `CHRONICLE_TOKEN`.
fn api_token() -> anyhow::Result<String> {
    std::env::var("CHRONICLE_TOKEN").context("CHRONICLE_TOKEN environment variable is required")
}

/// Read a JSON record from a file, or stdin when no path is given.
fn read_record<R: Resource>(file: Option<&PathBuf>) -> anyhow::Result<R> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read record from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Record is not valid JSON for this collection")
}

async fn run_crud<R: Resource>(
    client: ResourceClient<'_, R>,
    action: CrudAction,
) -> anyhow::Result<()> {
    let token = api_token()?;

    match action {
        CrudAction::List => {
            let records = client.list(&token).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        CrudAction::Create { file } => {
            let record: R = read_record(file.as_ref())?;
            let created = client.create(&token, &record).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        CrudAction::Update { id, file } => {
            let record: R = read_record(file.as_ref())?;
            client.update(&token, id, &record).await?;
            tracing::info!(id, "Record updated");
        }
        CrudAction::Delete { id } => {
            client.delete(&token, id).await?;
            tracing::info!(id, "Record deleted");
        }
    }

    Ok(())
}

async fn run_vault(action: VaultAction) -> anyhow::Result<()> {
    let endpoint = std::env::var("CHRONICLE_STORAGE_URL")
        .context("CHRONICLE_STORAGE_URL environment variable is required")?;
    let token = std::env::var("CHRONICLE_STORAGE_TOKEN")
        .context("CHRONICLE_STORAGE_TOKEN environment variable is required")?;
    let store = HttpStore::new(endpoint, token);

    match action {
        VaultAction::Put { file, name } => {
            let payload = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let cid = vault::upload(&store, &payload, name.as_deref()).await?;
            println!("{cid}");
        }
        VaultAction::Get { cid, name } => {
            let payload = vault::fetch(&store, &Cid::new(cid), name.as_deref()).await?;
            println!("{payload}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
