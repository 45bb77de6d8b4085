//! `portal`: drive the admin pages from the shell, or run the dev backend.
//!
//! Run from repo root: `cargo run -p portal-cli -- team show`

mod cli;
mod events;

use clap::Parser;
use cli::{PortalCli, PortalCommands, ServeArgs};
use std::process::ExitCode;
use team_portal::{
    init_tracing, ClientConfig, HttpClient, ProjectPage, ProjectService, Render,
    ServerConfig, TeamPage, TeamService, WorkDetailsPage, WorkDetailsService,
};

type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> ExitCode {
    if !init_tracing("team_portal=info,portal=info") {
        eprintln!("warning: logging was already initialised");
    }
    let cli = PortalCli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: PortalCli) -> CliResult {
    match cli.command {
        PortalCommands::Serve(args) => serve(args).await,
        PortalCommands::Work { op } => {
            let http = http_client(cli.api_url.as_deref())?;
            let mut page = WorkDetailsPage::new(WorkDetailsService::new(http));
            let mut outcome = page.init().await;
            for event in events::work_events(op) {
                if outcome.is_err() {
                    break;
                }
                outcome = page.dispatch(event).await;
            }
            println!("{}", page.render());
            Ok(outcome?)
        }
        PortalCommands::Team { op } => {
            let http = http_client(cli.api_url.as_deref())?;
            let mut page = TeamPage::new(TeamService::new(http));
            let mut outcome = page.init().await;
            for event in events::team_events(op) {
                if outcome.is_err() {
                    break;
                }
                outcome = page.dispatch(event).await;
            }
            println!("{}", page.render());
            Ok(outcome?)
        }
        PortalCommands::Project { op } => {
            let http = http_client(cli.api_url.as_deref())?;
            let mut page = ProjectPage::new(ProjectService::new(http));
            let mut outcome = page.init().await;
            for event in events::project_events(op) {
                if outcome.is_err() {
                    break;
                }
                outcome = page.dispatch(event).await;
            }
            println!("{}", page.render());
            Ok(outcome?)
        }
    }
}

fn http_client(api_url: Option<&str>) -> Result<HttpClient, Box<dyn std::error::Error + Send + Sync>> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = api_url {
        config.api_url = team_portal::config::normalize_api_url(url)?;
    }
    tracing::debug!(api_url = %config.api_url, "using backend");
    Ok(HttpClient::new(&config)?)
}

async fn serve(args: ServeArgs) -> CliResult {
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.seed.is_some() {
        config.seed_path = args.seed;
    }
    team_portal::serve(&config).await
}
