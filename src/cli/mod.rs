//! CLI command definitions and handlers

pub mod designs;
pub mod link;
pub mod measurements;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_ABOUT: &str = r#"
Catalog SAW process design files (.mpar) and measurement files (.rpar),
extract their layer stacks, and link each design to the measurements that
describe the same stack.

PIPELINE:
    1. stacklink designs         Build output/mpar.json
    2. stacklink measurements    Build output/rpar.json (merges design stacks)
    3. stacklink link            Build output/link_mpar.json
    stacklink run                All three in order

CONFIGURATION:
    ~/.config/stacklink/config.toml (or $STACKLINK_HOME/config.toml)
    STACKLINK_DESIGN_ROOT, STACKLINK_MEASUREMENT_ROOT, STACKLINK_TABLE
    override the scan roots and the process-table export.

LOGGING:
    STACKLINK_LOG=debug stacklink run
"#;

/// SAW design/measurement catalog and stack linker
#[derive(Parser, Debug)]
#[command(name = "stacklink")]
#[command(author, version)]
#[command(about = "Catalog SAW design and measurement files and link them by layer stack")]
#[command(long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: stacklink home config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract design files into the design catalog
    #[command(visible_alias = "d")]
    Designs(DesignsArgs),

    /// Extract and enrich measurement files into the measurement catalog
    #[command(visible_alias = "m")]
    Measurements(MeasurementsArgs),

    /// Link design records to measurement records
    #[command(visible_alias = "l")]
    Link(LinkArgs),

    /// Run designs, measurements and link in order
    Run,
}

/// Arguments for the designs command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:
    stacklink designs                       Scan the configured design root
    stacklink designs -r /prj/SAW_INFRA/MPS Scan a specific directory
    stacklink designs -r one.mpar -o x.json Extract a single file")]
pub struct DesignsArgs {
    /// Directory or single file to scan
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output catalog path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the measurements command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:
    stacklink measurements                  Scan the configured measurement root
    stacklink measurements -t comparams.json
                                            Look up piezo classes in a table export")]
pub struct MeasurementsArgs {
    /// Directory or single file to scan
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output catalog path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Design catalog whose stacks are merged into referencing measurements
    #[arg(long)]
    pub designs: Option<PathBuf>,

    /// Process-table export (JSON array of rows)
    #[arg(short, long)]
    pub table: Option<PathBuf>,
}

/// Arguments for the link command
#[derive(Parser, Debug)]
pub struct LinkArgs {
    /// Design catalog path
    #[arg(long)]
    pub designs: Option<PathBuf>,

    /// Measurement catalog path
    #[arg(long)]
    pub measurements: Option<PathBuf>,

    /// Output link table path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not print the link table
    #[arg(short, long)]
    pub quiet: bool,
}
