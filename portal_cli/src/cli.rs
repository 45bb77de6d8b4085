use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "portal", author, version, about, long_about = None)]
pub struct PortalCli {
    /// Backend base URL; overrides PORTAL_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: PortalCommands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum PortalCommands {
    /// Run the in-memory dev backend
    Serve(ServeArgs),
    /// Work details page
    #[command(alias = "w")]
    Work {
        #[command(subcommand)]
        op: WorkOperation,
    },
    /// Team details, bookmarks and FAQs page
    #[command(alias = "t")]
    Team {
        #[command(subcommand)]
        op: TeamOperation,
    },
    /// Tech stack, projects and dependencies page
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        op: ProjectOperation,
    },
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
    /// JSON seed file keyed by resource name
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum WorkOperation {
    Show,
    /// Edit the contact fields and save
    Set {
        #[arg(long)]
        unity: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        escalate: Option<String>,
    },
    #[command(subcommand)]
    Location(LocationOperation),
}

#[derive(Subcommand, Clone, Debug)]
pub enum LocationOperation {
    /// Append a location and save
    Add { place: String, time: String },
    /// Remove the location at INDEX and save
    Delete { index: usize },
}

#[derive(Subcommand, Clone, Debug)]
pub enum TeamOperation {
    Show,
    /// Edit team name and product focus, then save
    Details {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        focus: Option<String>,
    },
    #[command(subcommand)]
    Bookmark(BookmarkOperation),
    #[command(subcommand)]
    Faq(FaqOperation),
}

#[derive(Subcommand, Clone, Debug)]
pub enum BookmarkOperation {
    Add {
        title: String,
        #[arg(default_value = "")]
        description: String,
    },
    Update {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete { id: u64 },
}

#[derive(Subcommand, Clone, Debug)]
pub enum FaqOperation {
    Add {
        question: String,
        #[arg(default_value = "")]
        answer: String,
    },
    Update {
        id: u64,
        #[arg(long)]
        question: Option<String>,
        #[arg(long)]
        answer: Option<String>,
    },
    Delete { id: u64 },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ProjectOperation {
    Show,
    #[command(subcommand)]
    Tech(TechOperation),
    Add {
        title: String,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Update {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete { id: u64 },
    #[command(subcommand)]
    Deps(DepsOperation),
}

#[derive(Subcommand, Clone, Debug)]
pub enum TechOperation {
    Add { name: String },
    Delete { index: usize },
}

#[derive(Subcommand, Clone, Debug)]
pub enum DepsOperation {
    /// Replace the lists on dependency row INDEX (comma separated) and save
    Set {
        index: usize,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        tech_team: Option<String>,
    },
}
