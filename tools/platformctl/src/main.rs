use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use pianoled_platform::hal::{FakeHal, LinuxHal, SystemHal};
use pianoled_platform::{
    dispatch, logging, select_platform, Capability, PlatformConfig, PlatformKind, Request,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "platformctl")]
#[command(about = "Invoke piano LED visualizer platform capabilities")]
struct Cli {
    /// Platform variant: default, null or rpi. Detected from the host when omitted.
    #[arg(long)]
    variant: Option<PlatformKind>,

    /// Platform config file (TOML). Falls back to $PIANOLED_PLATFORM_CONFIG, then defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Record commands instead of running them, then print what would have run.
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every capability name and its argument count.
    List,

    /// Call one capability and print the result as JSON.
    Call {
        capability: Capability,
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref());

    match &cli.command {
        Commands::List => {
            for cap in Capability::ALL {
                println!("{}\t{}", cap.name(), cap.arity());
            }
            Ok(())
        }
        Commands::Call { capability, args } => call(&cli, *capability, args),
    }
}

fn call(cli: &Cli, capability: Capability, args: &[String]) -> Result<()> {
    let request = Request::from_args(capability, args).map_err(|e| anyhow!(e))?;
    let config = PlatformConfig::load_or_default(cli.config.as_deref())?;

    let fake = FakeHal::new();
    let hal: Arc<dyn SystemHal> = if cli.dry_run {
        Arc::new(fake.clone())
    } else {
        Arc::new(LinuxHal::new())
    };

    // Detection always reads the real host, even in a dry run.
    let kind = cli
        .variant
        .unwrap_or_else(|| PlatformKind::detect(&LinuxHal::new()));
    let platform = select_platform(kind, config, hal);

    let response = dispatch(platform.as_ref(), request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if cli.dry_run {
        for line in fake.command_lines() {
            println!("DRY RUN: {line}");
        }
    }
    Ok(())
}
