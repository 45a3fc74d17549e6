use crate::{config::Overrides, error::CliError};
use clap::Parser;
use commands::Commands;
use filter_compiler::DataFilter;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "logfilter",
    version = "0.1.0",
    about = "Compile table/column filters for change-data-capture streams"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger, RUST_LOG takes precedence
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            filter,
            config: config_path,
            source_type,
            tenant,
            branch_db,
            json,
            output: output_path,
        } => {
            let overrides = Overrides {
                filter,
                source_type,
                tenant,
                branch_db,
            };
            let config = config::resolve_config(config_path.as_deref(), overrides).await?;

            info!(
                "Compiling filter for {}: tenant: {:?}, branch_db: {:?}",
                config.source_type, config.tenant, config.branch_db
            );

            let mut filter = DataFilter::from_config(&config);
            if !filter.compile(config.source_type)? {
                return Err(CliError::CompileRejected(config.source_type.to_string()));
            }

            match (output_path, json) {
                (Some(path), _) => output::write_report(&filter, path).await?,
                (None, true) => output::print_report(&filter)?,
                (None, false) => println!("{filter}"),
            }
        }
        Commands::Ast { filter } => {
            let spec = filter_syntax::parse(&filter)?;
            let json = serde_json::to_string_pretty(&spec).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
    }

    Ok(())
}
