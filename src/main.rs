mod api;
mod cli_messages;
mod config;
mod consts;
mod controller;
mod environment;
mod events;
mod food;
mod logging;
mod network;
mod session;
mod store;
mod sync;
mod ui;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::food::{FoodDraft, FoodId};
use crate::session::{HeadlessAction, run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for a food plate catalogue
struct Args {
    /// Base URL of the food API, overriding the environment and config file
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Print every plate in the catalogue
    List,
    /// Create a plate
    Add {
        #[arg(long)]
        name: String,
        /// Image URL
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long)]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Change the given fields of a plate
    Edit {
        /// ID of the plate to change
        #[arg(long, value_name = "ID")]
        id: u64,
        #[arg(long)]
        name: Option<String>,
        /// Image URL
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a plate
    Delete {
        /// ID of the plate to delete
        #[arg(long, value_name = "ID")]
        id: u64,
    },
    /// Show the configuration, saving any values given
    Config {
        /// API base URL to save
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Deployment to use when no URL is saved (local, staging, production)
        #[arg(long, value_name = "ENVIRONMENT")]
        environment: Option<Environment>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let api_url_flag = args.api_url.as_deref();

    match args.command {
        Command::Start { with_background } => {
            let session = setup_session(api_url_flag)?;
            run_tui_mode(session, with_background).await
        }
        Command::List => run_headless(api_url_flag, HeadlessAction::List).await,
        Command::Add {
            name,
            image,
            price,
            description,
        } => {
            let draft = FoodDraft {
                name,
                image,
                price,
                description,
            };
            run_headless(api_url_flag, HeadlessAction::Add(draft)).await
        }
        Command::Edit {
            id,
            name,
            image,
            price,
            description,
        } => {
            let action = HeadlessAction::Edit {
                id: FoodId(id),
                name,
                image,
                price,
                description,
            };
            run_headless(api_url_flag, action).await
        }
        Command::Delete { id } => {
            run_headless(api_url_flag, HeadlessAction::Delete(FoodId(id))).await
        }
        Command::Config {
            api_url,
            environment,
        } => configure(api_url_flag, api_url, environment),
    }
}

async fn run_headless(
    api_url_flag: Option<&str>,
    action: HeadlessAction,
) -> Result<(), Box<dyn Error>> {
    let session = setup_session(api_url_flag)?;
    run_headless_mode(session, action).await.map_err(|e| {
        crate::print_cmd_error!("Command failed", &e.to_string());
        e
    })
}

/// Prints the configuration after saving the values given on the command line.
fn configure(
    api_url_flag: Option<&str>,
    api_url: Option<String>,
    environment: Option<Environment>,
) -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let mut config = Config::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load config: {}", e))?;

    if api_url.is_some() || environment.is_some() {
        if let Some(api_url) = api_url {
            config.api_url = Some(api_url);
        }
        if let Some(environment) = environment {
            config.environment = environment;
        }
        config
            .save(&config_path)
            .map_err(|e| format!("Failed to save config: {}", e))?;
        crate::print_cmd_success!("Config saved", "{}", config_path.display());
    }

    println!("{}", serde_json::to_string_pretty(&config)?);
    crate::print_cmd_info!("API URL", "{}", config.resolve_api_url(api_url_flag));
    Ok(())
}
