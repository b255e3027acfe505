use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Record a new audit.
    Submit(SubmitArgs),
    /// List stored audits, newest first.
    List(ListArgs),
    /// Show a single audit by id.
    Get { id: String },
    /// Delete an audit by id.
    Delete { id: String },
    /// Summary statistics over a time window.
    Stats(StatsArgs),
    /// Run the JSON API server.
    Serve(ServeArgs),
    /// Check whether a running API server is reachable.
    Health(HealthArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// The five section scores in order Seiri,Seiton,Seiso,Seiketsu,Shitsuke
    #[arg(long, value_delimiter = ',')]
    pub scores: Vec<f64>,

    /// Section note as `<section>:<text>`, e.g. `seiri:tools sorted` (repeatable)
    #[arg(long)]
    pub note: Vec<String>,

    /// Responsible's first name
    #[arg(long)]
    pub name: String,

    /// Responsible's surname
    #[arg(long)]
    pub surname: Option<String>,

    /// Responsible's document id (7-12 digits)
    #[arg(long)]
    pub document: Option<String>,

    /// Responsible's role or title
    #[arg(long)]
    pub role: String,

    /// Responsible's work area
    #[arg(long)]
    pub area: Option<String>,

    /// Responsible's email
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Time window: all, 7d, 30d, 90d, 1y
    #[arg(long)]
    pub window: Option<String>,

    /// Keep only one rating bucket: excellent, good, regular, deficient
    #[arg(long)]
    pub rating: Option<String>,

    /// Max audits to show
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Time window: all, 7d, 30d, 90d, 1y
    #[arg(long)]
    pub window: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override the configured port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the configured bind address
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct HealthArgs {
    /// Server base URL (defaults to the configured bind address)
    #[arg(long)]
    pub url: Option<String>,
}
