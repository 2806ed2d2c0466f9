use clap::Parser;
use doclet_recycler::config::RecyclerConfig;
use doclet_recycler::listing::PsLister;
use doclet_recycler::recycler;
use std::path::PathBuf;
use std::process::ExitCode;

/// Restart the doclet server: kill the running instance, then start a
/// replacement and wait for it.
///
/// Scans the process table for the target process, sends it SIGTERM, spawns
/// the configured launcher, and blocks until the replacement exits. Meant to
/// be invoked periodically by a scheduler; no arguments are required.
#[derive(Parser, Debug)]
#[command(name = "doclet-restart", version, about)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "recycler.toml")]
    config: PathBuf,

    /// Validate config and print resolved settings, don't run
    #[arg(long)]
    dry_run: bool,

    /// Extra logging (listing, scan, and relaunch details)
    #[arg(short, long)]
    verbose: bool,

    /// Only errors; status lines still go to stdout
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    doclet_recycler::logging::init(cli.verbose, cli.quiet);

    tracing::debug!(?cli, "parsed CLI arguments");

    let config = match RecyclerConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    if cli.dry_run {
        println!("doclet-restart v{}", env!("CARGO_PKG_VERSION"));
        println!("Config file: {}", cli.config.display());
        println!("Target: {}", config.target.name);
        println!(
            "Listing: {} {}",
            config.listing.command,
            config.listing.args.join(" ")
        );
        println!(
            "Launcher: {} {}",
            config.launcher.resolved_command().display(),
            config.launcher.args.join(" ")
        );
        println!("Dry run mode — config validated, not running.");
        return ExitCode::SUCCESS;
    }

    let lister = PsLister::new(&config.listing);
    ExitCode::from(recycler::run_restart(&config, &lister).await as u8)
}
