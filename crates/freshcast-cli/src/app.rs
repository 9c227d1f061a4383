//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freshcast")]
#[command(
    author,
    version,
    about = "Demand forecasts and production planning for a small bakery"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Sales history CSV (overrides the configured path)
    #[arg(long, global = true)]
    pub history: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how a question would be routed
    Route(QuestionArgs),

    /// Answer a question
    Ask(QuestionArgs),

    /// Forecast demand and production for one product
    Forecast(ForecastArgs),

    /// Raw materials needed for upcoming production
    Materials(HorizonArgs),

    /// Production summary for every product
    Summary(HorizonArgs),

    /// Sourcing advice for a raw material
    Supplier(SupplierArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Start MCP server
    Mcp,
}

#[derive(Args)]
pub struct QuestionArgs {
    /// Question in plain English
    pub question: Vec<String>,
}

impl QuestionArgs {
    pub fn text(&self) -> String {
        self.question.join(" ")
    }
}

#[derive(Args)]
pub struct ForecastArgs {
    /// Product name (e.g. croissant, "cinnamon roll")
    pub product: String,

    /// Days to forecast
    #[arg(short, long)]
    pub days: Option<u32>,
}

#[derive(Args)]
pub struct HorizonArgs {
    /// Days to plan for
    #[arg(short, long)]
    pub days: Option<u32>,
}

#[derive(Args)]
pub struct SupplierArgs {
    /// Raw material to source
    pub material: String,

    /// Where the bakery is located
    #[arg(long, default_value = "general")]
    pub location: String,

    /// Budget level
    #[arg(long, default_value = "small")]
    pub budget: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
