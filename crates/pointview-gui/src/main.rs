mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pointview_core::config::ViewerConfig;
use pointview_core::demo::demo_dataset;

#[derive(Parser)]
#[command(name = "pointview-gui", about = "Interactive point cloud viewer")]
#[command(version)]
struct Args {
    /// Viewer config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory thumbnail paths are resolved against
    #[arg(long)]
    image_root: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<ViewerConfig> {
    let mut config = match args.config {
        Some(ref path) => ViewerConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    if let Some(ref root) = args.image_root {
        config.image_root = root.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let dataset = demo_dataset(&config.image_base)?;
    tracing::info!(
        points = dataset.len(),
        image_root = %config.image_root.display(),
        "Starting viewer"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Pointview"),
        ..Default::default()
    };

    eframe::run_native(
        "Pointview",
        options,
        Box::new(move |cc| Ok(Box::new(app::PointViewApp::new(&cc.egui_ctx, dataset, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Viewer exited with error: {e}"))
}
