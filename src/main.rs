//! # mongo-provisiodactyl - grant one user readWrite on every MongoDB user database
//!
//! ## Environment Variables
//!
//! Every flag can also come from the environment or a `.env` file:
//!
//! - `MONGO_ADMIN_USER` / `MONGO_ADMIN_PASSWORD`: administrator login
//! - `MONGO_HOST` / `MONGO_PORT`: server endpoint
//! - `MONGO_NEW_USER` / `MONGO_NEW_PASSWORD`: the account to create
//! - `RUST_LOG`: log filter, `info` when unset
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::{cli::Args, config::ProvisionConfig, db::MongoAdmin, errors::ProvisionError};

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod provisioner;

async fn run(config: ProvisionConfig) -> Result<Vec<String>, ProvisionError> {
    let admin = MongoAdmin::connect(&config.admin).await?;

    if config.dry_run {
        let targets = provisioner::plan(&admin).await?;
        for database in &targets {
            info!(database = %database, "Would grant readWrite");
        }
        return Ok(targets);
    }

    provisioner::provision(&admin, &config.new_user).await
}

fn finished_message(dry_run: bool) -> &'static str {
    if dry_run {
        "Dry run finished, nothing created"
    } else {
        "Provisioning finished"
    }
}

#[tokio::main]
async fn main() {
    config::load_env_file();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ProvisionConfig::from(Args::parse());
    let json = config.json;
    let dry_run = config.dry_run;
    let new_user = config.new_user.username.clone();

    match run(config).await {
        Ok(databases) => {
            if json {
                match serde_json::to_string(&databases) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to encode result: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            info!(user = %new_user, count = databases.len(), "{}", finished_message(dry_run));
        }
        Err(e) => {
            error!(user = %new_user, "Provisioning aborted");
            eprintln!("Failed to provision user: {}", e);
            std::process::exit(1);
        }
    }
}
