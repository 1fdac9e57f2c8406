use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use sentinel_console::SentinelApp;
use sentinel_console::logging::{self, Verbosity};

#[derive(Parser, Debug)]
#[command(name = "sentinel-console")]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (default: $SENTINEL_CONFIG, then the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON catalog to show instead of the built-in sample data
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// View to open after startup, e.g. `alerts` or `threat-intel`
    #[arg(long)]
    view: Option<String>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,

    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_subscriber(Verbosity::from_flags(args.verbose, args.quiet), args.no_color);

    let config = sentinel_console::config::load(args.config.as_deref())?;
    let catalog = args.catalog.clone().or_else(|| config.data.catalog.clone());

    let mut app = SentinelApp::with_config(config);
    if let Some(path) = catalog {
        app.load_catalog(path.clone())
            .with_context(|| format!("load catalog {}", path.display()))?;
    }
    if let Some(view) = &args.view {
        let entered = app.navigate_to_id(view);
        info!(requested = %view, %entered, "initial view");
    }

    sentinel_console::app::run(app).map_err(|err| {
        error!(%err, "window closed with error");
        anyhow::anyhow!("{err}")
    })
}
