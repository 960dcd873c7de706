mod cli;

use filtergraph::{
    config::{self, OutputFormat},
    input, report,
};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "filtergraph=trace,fg_parser=trace".to_string()
        } else {
            "filtergraph=info,fg_parser=info".to_string()
        }
    });

    // Logs go to stderr so parse/format output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            expression,
            file,
            json,
        } => parse_cmd(
            expression.as_deref(),
            file.as_deref(),
            json,
            cli.config.as_deref(),
        ),
        Commands::Check { expression, file } => {
            check_cmd(expression.as_deref(), file.as_deref(), cli.config.as_deref())
        }
        Commands::Format { expression, file } => {
            format_cmd(expression.as_deref(), file.as_deref(), cli.config.as_deref())
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path: Option<PathBuf> = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("filtergraph {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn parse_cmd(
    expression: Option<&str>,
    file: Option<&Path>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    if json {
        config.output.format = OutputFormat::Json;
    }

    let expr = input::read_expression(expression, file, &config.parser)?;
    let graph = input::parse_expression(&expr, &config.parser)?;
    tracing::info!("Parsed {}", report::summary(&graph));

    let rendered = report::render(&graph, &config.output)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn check_cmd(
    expression: Option<&str>,
    file: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let expr = input::read_expression(expression, file, &config.parser)?;
    let graph = input::parse_expression(&expr, &config.parser)?;
    println!("ok: {}", report::summary(&graph));
    Ok(())
}

fn format_cmd(
    expression: Option<&str>,
    file: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let expr = input::read_expression(expression, file, &config.parser)?;
    let graph = input::parse_expression(&expr, &config.parser)?;
    println!("{}", fg_parser::render_graph(&graph));
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Max input length: {} bytes", config.parser.max_input_len);
            println!("  Output format: {:?}", config.output.format);
            println!("  Pretty JSON: {}", config.output.pretty);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Max input length: {} bytes", config.parser.max_input_len);
            println!("  Output format: {:?}", config.output.format);
        }
    }

    Ok(())
}
