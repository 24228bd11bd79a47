#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use business_card_core::{config, AttributeSet};
use business_card_ui::{render_document, QrRenderer};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// State handed from the command line to the desktop app
#[derive(Debug, Clone, Default)]
pub struct LaunchState {
    /// Attributes the widget starts with
    pub attributes: AttributeSet,
    /// Source of the QR image
    pub qr_renderer: QrRenderer,
    /// Where the editor saves attributes
    pub config_path: Option<PathBuf>,
}

/// Global launch state, set from command line
static LAUNCH: OnceLock<LaunchState> = OnceLock::new();

/// Get the launch state (set from command line or empty)
pub fn launch_state() -> LaunchState {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// Business Card - attribute-driven flip card widget
#[derive(Parser, Debug)]
#[command(name = "business-card-desktop")]
#[command(about = "Business Card - attribute-driven flip card widget")]
struct Args {
    /// JSON attribute file (default: <config dir>/business-card/card.json, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set an attribute: name=value, or a bare name for show-qr/floating
    #[arg(short = 'a', long = "attr", value_name = "NAME[=VALUE]")]
    attrs: Vec<String>,

    /// Write the rendered card to an HTML file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Draw the QR code locally instead of using the remote QR service
    #[arg(long)]
    inline_qr: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file first, then each `--attr` in order.
fn collect_attributes(args: &Args) -> Result<(AttributeSet, Option<PathBuf>)> {
    let config_path = args
        .config
        .clone()
        .or_else(|| config::default_config_path().filter(|path| path.exists()));

    let mut attributes = match &config_path {
        Some(path) => config::load_attributes(path)
            .with_context(|| format!("Failed to load attributes from {}", path.display()))?,
        None => AttributeSet::new(),
    };

    for arg in &args.attrs {
        let (name, value) = config::parse_attribute_arg(arg)?;
        attributes.set(name, value);
    }

    Ok((attributes, config_path.or_else(config::default_config_path)))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let (attributes, config_path) = collect_attributes(&args)?;
    let qr_renderer = if args.inline_qr {
        QrRenderer::Inline
    } else {
        QrRenderer::Remote
    };

    if let Some(path) = &args.export {
        let html = render_document(&attributes, qr_renderer);
        std::fs::write(path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Exported card to {}", path.display());
        println!("Exported card to {}", path.display());
        return Ok(());
    }

    tracing::info!(
        attributes = attributes.len(),
        ?qr_renderer,
        "Starting business card preview"
    );

    let _ = LAUNCH.set(LaunchState {
        attributes,
        qr_renderer,
        config_path,
    });

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Business Card")
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 720.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
