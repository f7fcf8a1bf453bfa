// ABOUTME: Command line entry point for previewing dashboard layouts.
// ABOUTME: Loads a dashboard document, lays it out for a canvas size, and prints the result as JSON.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use dash_core::{Canvas, DashboardSet, LayoutConfig};
use dash_layout::compute_dashboard;

const USAGE: &str = "usage: dashgrid <dashboards.json> <name> <width> <height> [config.toml]";

#[derive(Debug)]
struct Args {
    document: PathBuf,
    name: String,
    canvas: Canvas,
    config: Option<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let (Some(document), Some(name), Some(width), Some(height)) =
            (args.next(), args.next(), args.next(), args.next())
        else {
            bail!(USAGE);
        };
        let width = width
            .parse()
            .with_context(|| format!("Invalid canvas width {:?}", width))?;
        let height = height
            .parse()
            .with_context(|| format!("Invalid canvas height {:?}", height))?;

        Ok(Self {
            document: PathBuf::from(document),
            name,
            canvas: Canvas::new(width, height),
            config: args.next().map(PathBuf::from),
        })
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<LayoutConfig> {
    match path {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(LayoutConfig::load_or_default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse(std::env::args().skip(1))?;
    let config = load_config(args.config.as_ref())?;
    tracing::info!(
        "Loaded config: grid_size={}, min_size={:?}",
        config.grid_size,
        config.dashlet_min_size
    );

    let document = DashboardSet::load(&args.document)
        .with_context(|| format!("Failed to read {}", args.document.display()))?;
    let dashboard = document.get(&args.name)?;

    let report = compute_dashboard(dashboard, args.canvas, &config)?;
    if report.overlap_cells > 0 {
        tracing::warn!(
            "Dashboard {} does not fit {}x{} px, {} cells overlap",
            args.name,
            args.canvas.width,
            args.canvas.height,
            report.overlap_cells
        );
    }

    println!("{}", serde_json::to_string_pretty(&report.dashlets)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_positional_args() {
        let parsed = args(&["board.json", "main", "1280", "720"]).unwrap();
        assert_eq!(parsed.document, PathBuf::from("board.json"));
        assert_eq!(parsed.name, "main");
        assert_eq!(parsed.canvas, Canvas::new(1280, 720));
        assert!(parsed.config.is_none());

        let parsed = args(&["board.json", "main", "1280", "720", "layout.toml"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("layout.toml")));
    }

    #[test]
    fn rejects_missing_or_bad_args() {
        assert!(args(&["board.json", "main"]).is_err());
        let err = args(&["board.json", "main", "wide", "720"]).unwrap_err();
        assert!(err.to_string().contains("Invalid canvas width"));
    }
}
