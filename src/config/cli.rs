use crate::app::commands::{DescriptorFormat, ExportFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-catalog")]
#[command(about = "Inspect and lint the portfolio content catalog")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check the catalog and the deployment descriptor for authoring errors
    Lint {
        /// TOML catalog data file; the built-in catalog when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// TOML deployment descriptor; the built-in sample when omitted
        #[arg(long)]
        deploy: Option<PathBuf>,
    },
    /// Print the catalog the way the rendering layer consumes it
    Export {
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Print the resolved output directory of the deployment descriptor
    Deploy {
        #[arg(long)]
        deploy: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = DescriptorFormat::Plain)]
        format: DescriptorFormat,
    },
}
