//! Human/Machine view toggle injector.
//!
//! Rewrites each configured `page.tsx` so its visible markup sits inside a
//! `HumanView` and a placeholder `MachineView` follows it. Pages that already
//! carry the toggle are left alone, so repeated runs are safe.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use view_toggle::apply::{Mode, run as run_pages};
use view_toggle::exit_codes;
use view_toggle::io::config::{CONFIG_FILE, ToggleConfig, init_config, load_config};
use view_toggle::logging;

#[derive(Parser)]
#[command(
    name = "view-toggle",
    version,
    about = "Inject the Human/Machine view toggle into page sources"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write `view-toggle.toml` with the default page list.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Rewrite pages in place and report per-page outcomes.
    Apply(PageArgs),
    /// Report which pages would change without writing them.
    Check(PageArgs),
}

#[derive(Args)]
struct PageArgs {
    /// Config file with the page list.
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// Pages to process instead of the configured list.
    paths: Vec<PathBuf>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(force),
        Command::Apply(args) => cmd_pages(args, Mode::Write),
        Command::Check(args) => cmd_pages(args, Mode::DryRun),
    }
}

fn cmd_init(force: bool) -> Result<i32> {
    let path = PathBuf::from(CONFIG_FILE);
    if init_config(&path, force)? {
        println!("wrote {}", path.display());
    } else {
        println!("{} already exists (use --force to overwrite)", path.display());
    }
    Ok(exit_codes::OK)
}

fn cmd_pages(args: PageArgs, mode: Mode) -> Result<i32> {
    let cfg = load_pages_config(args)?;
    debug!(pages = cfg.pages.len(), ?mode, "config loaded");

    let stdout = io::stdout();
    let summary = run_pages(&cfg, mode, &mut stdout.lock())?;
    if mode == Mode::DryRun && summary.updated_count() > 0 {
        return Ok(exit_codes::PENDING);
    }
    Ok(exit_codes::OK)
}

fn load_pages_config(args: PageArgs) -> Result<ToggleConfig> {
    let cfg = load_config(&args.config).context("load config")?;
    let cfg = cfg.with_pages(args.paths);
    cfg.validate()?;
    Ok(cfg)
}
