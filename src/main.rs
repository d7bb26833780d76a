use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tweetsmith::app::App;
use tweetsmith::config_io::load_config;
use tweetsmith::view::theme::Theme;

/// Compose a post and watch a live preview of it in the terminal
#[derive(Parser, Debug)]
#[command(name = "tweetsmith", version, about)]
struct Args {
    /// Config file (defaults to <config dir>/tweetsmith/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Colour theme, overriding the config file
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Directory with badge glyphs and the default avatar
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Profile photo to load on startup
    #[arg(long, value_name = "PATH")]
    photo: Option<PathBuf>,

    /// Log file (defaults to tweetsmith.log in the temp directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Print the config file JSON Schema and exit
    #[arg(long)]
    print_config_schema: bool,
}

fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("tweetsmith.log"));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    // Logs must not go to the terminal the UI is drawing on
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_config_schema {
        println!("{}", serde_json::to_string_pretty(&tweetsmith::config::Config::json_schema())?);
        return Ok(());
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(assets) = args.assets {
        config.assets_dir = Some(assets);
    }

    if args.list_themes {
        for name in Theme::available_themes(config.themes_dir.as_deref()) {
            println!("{}", name);
        }
        return Ok(());
    }

    init_logging(args.log_file)?;
    tracing::info!("Starting tweetsmith with theme '{}'", config.theme);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let theme = Theme::from_name(&config.theme, config.themes_dir.as_deref());
    let mut app = App::new(&config, theme, runtime.handle().clone());
    if let Some(photo) = args.photo {
        app.choose_avatar(photo);
    }

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!("Exited with error: {:#}", e);
    }
    result
}
