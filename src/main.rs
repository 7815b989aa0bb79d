//! ExprBox - a desktop developer toolbox for expression generation
//!
//! Binary entry point: parses command-line arguments, initializes
//! logging and configuration, and starts the eframe event loop.

mod app;

use std::env;
use std::path::PathBuf;
use std::process;

use eframe::egui;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use exprbox::error::{Error, Result};
use exprbox::i18n::Language;
use exprbox::{Config, ConfigLoader};

use app::ExprBoxApp;

/// Parsed command-line arguments
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// UI language override
    language: Option<Language>,
    /// Enable debug logging
    debug: bool,
    /// Window width override
    width: Option<f32>,
    /// Window height override
    height: Option<f32>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    i += 1;
                    let value = args.get(i).ok_or("--config requires a path")?;
                    app_args.config_path = Some(PathBuf::from(value));
                }
                "--lang" | "-l" => {
                    i += 1;
                    let value = args.get(i).ok_or("--lang requires a value")?;
                    app_args.language = Some(value.parse().map_err(Error::Other)?);
                }
                "--width" => {
                    i += 1;
                    let value = args.get(i).ok_or("--width requires a value")?;
                    app_args.width =
                        Some(value.parse().map_err(|_| "invalid --width value")?);
                }
                "--height" => {
                    i += 1;
                    let value = args.get(i).ok_or("--height requires a value")?;
                    app_args.height =
                        Some(value.parse().map_err(|_| "invalid --height value")?);
                }
                "--debug" | "-d" => app_args.debug = true,
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("{} {}", exprbox::NAME, exprbox::VERSION);
                    process::exit(0);
                }
                other => {
                    return Err(Error::Other(format!("unknown argument: {}", other)));
                }
            }
            i += 1;
        }
        Ok(app_args)
    }
}

fn print_help() {
    println!("{} - {}", exprbox::NAME, exprbox::DESCRIPTION);
    println!();
    println!("Usage: exprbox [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <path>   Use a specific configuration file");
    println!("  -l, --lang <zh|en>    Override the UI language");
    println!("      --width <px>      Initial window width");
    println!("      --height <px>     Initial window height");
    println!("  -d, --debug           Verbose logging");
    println!("  -h, --help            Show this help");
    println!("  -V, --version         Show version");
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "exprbox=debug" } else { "exprbox=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(args: &AppArgs, loader: &mut ConfigLoader) -> Config {
    let loaded = match &args.config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        warn!("Falling back to default configuration: {}", e);
        Config::default()
    });
    if let Some(lang) = args.language {
        config.language = lang;
    }
    config
}

fn run() -> Result<()> {
    let args = AppArgs::parse()?;
    init_logging(args.debug);

    let mut loader = ConfigLoader::new();
    let config = load_config(&args, &mut loader);
    config.validate()?;
    info!("Starting {} v{}", exprbox::NAME, exprbox::VERSION);

    let width = args.width.unwrap_or(config.ui.window_width);
    let height = args.height.unwrap_or(config.ui.window_height);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ExprBox")
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "exprbox",
        native_options,
        Box::new(move |cc| Ok(Box::new(ExprBoxApp::new(cc, config, loader)))),
    )
    .map_err(|e| Error::Other(format!("eframe terminated: {}", e)))
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
