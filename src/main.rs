use clap::Parser;
use element_inventory::cli::commands::{cmd_inspect, cmd_scan};
use element_inventory::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Scan {
            url,
            format,
            output,
        } => {
            // Resolve output format: CLI > config > default
            let format = format.as_deref().unwrap_or(&config.output.format);
            cmd_scan(&url, format, output.as_deref(), &config, cli.verbose)?;
        }
        Commands::Inspect {
            snapshot,
            format,
            output,
        } => {
            let format = format.as_deref().unwrap_or(&config.output.format);
            cmd_inspect(&snapshot, format, output.as_deref(), &config, cli.verbose)?;
        }
    }

    Ok(())
}
