use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filtergraph")]
#[command(author, version, about = "Filter-graph expression parser and formatter")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an expression and print its branches and chains
    Parse {
        /// Expression to parse (`-` reads stdin)
        expression: Option<String>,

        /// Read the expression from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that an expression is well formed
    Check {
        /// Expression to check (`-` reads stdin)
        expression: Option<String>,

        /// Read the expression from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the canonical form of an expression
    Format {
        /// Expression to format (`-` reads stdin)
        expression: Option<String>,

        /// Read the expression from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
