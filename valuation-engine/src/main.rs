use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use reel_core::feed::RandomSeries;
use reel_core::model::{StaticCatalog, WatchlistStore};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use valuation_engine::io::{Args, Console, Flow};
use valuation_engine::models::{EngineConfig, Portfolio};
use valuation_engine::{Engine, Session};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config_file = args.common.get_config_file();
    let config = EngineConfig::load(args.preset, config_file.as_deref())?;

    let store = if args.demo {
        WatchlistStore::seeded_dashboard()
    } else {
        WatchlistStore::open_in(&args.common.get_data_dir())?
    };
    let generator = match args.seed {
        Some(seed) => RandomSeries::seeded(seed),
        None => RandomSeries::new(),
    };

    let session = Session::new(Engine::new(config), Portfolio::seeded());
    let mut console = Console::new(session, store, StaticCatalog::default(), generator);

    let mut stdout = std::io::stdout();
    console.banner(&mut stdout)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                if console.handle_line(&line, &mut stdout)? == Flow::Quit {
                    break;
                }
            }
            Some(alert) = console.next_alert(), if console.has_pending_alert() => {
                writeln!(stdout, "[{}] {}", alert.title, alert.description)?;
            }
        }
        stdout.flush()?;
    }

    console.shutdown();
    info!("Session closed");
    Ok(())
}
