use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use pointview_core::demo::demo_dataset;
use pointview_core::scene::{build_scene, ScreenRect};
use pointview_core::view::{ViewState, ViewerEvent};

use crate::summary::print_scene_summary;

#[derive(Args)]
pub struct InspectArgs {
    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Move the point size slider to this value first
    #[arg(long)]
    pub point_size: Option<f32>,

    /// Pointer position as "X,Y" in screen pixels
    #[arg(long)]
    pub pointer: Option<String>,

    /// Hover the point with this index
    #[arg(long)]
    pub hover: Option<usize>,

    /// Viewport size as "WIDTHxHEIGHT"; defaults to the configured window size
    #[arg(long)]
    pub viewport: Option<String>,
}

pub fn run(args: &InspectArgs) -> Result<()> {
    let config = super::config::load(args.config.as_deref())?;
    let dataset = demo_dataset(&config.image_base)?;

    let events = build_events(args)?;
    let mut state = ViewState::new(&config);
    state
        .apply_all(events, &dataset, &config)
        .context("Event sequence rejected")?;

    let size = match args.viewport {
        Some(ref s) => parse_pair(s, 'x').context("Invalid --viewport")?,
        None => [config.window.width, config.window.height],
    };
    let viewport = ScreenRect::new([0.0, 0.0], size);
    let scene = build_scene(&dataset, &state, &config);

    print_scene_summary(&dataset, &state, &scene, &viewport);
    Ok(())
}

/// Events in the order the viewer would see them: slider, pointer, hover.
fn build_events(args: &InspectArgs) -> Result<Vec<ViewerEvent>> {
    let mut events = Vec::new();
    if let Some(v) = args.point_size {
        events.push(ViewerEvent::SliderChange(v));
    }
    if let Some(ref s) = args.pointer {
        let [x, y] = parse_pair(s, ',').context("Invalid --pointer")?;
        events.push(ViewerEvent::PointerMove { x, y });
    }
    if let Some(i) = args.hover {
        events.push(ViewerEvent::PointerEnter(i));
    }
    Ok(events)
}

fn parse_pair(s: &str, sep: char) -> Result<[f32; 2]> {
    let Some((a, b)) = s.split_once(sep) else {
        bail!("expected two numbers separated by '{sep}', got {s:?}");
    };
    Ok([a.trim().parse()?, b.trim().parse()?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pair_accepts_both_separators() {
        assert_eq!(parse_pair("12.5,-3", ',').unwrap(), [12.5, -3.0]);
        assert_eq!(parse_pair("800x600", 'x').unwrap(), [800.0, 600.0]);
        assert!(parse_pair("800", 'x').is_err());
        assert!(parse_pair("a,b", ',').is_err());
    }

    #[test]
    fn events_follow_slider_pointer_hover_order() {
        let args = InspectArgs {
            config: None,
            point_size: Some(2.0),
            pointer: Some("5,5".into()),
            hover: Some(1),
            viewport: None,
        };
        let events = build_events(&args).unwrap();
        assert_eq!(
            events,
            vec![
                ViewerEvent::SliderChange(2.0),
                ViewerEvent::PointerMove { x: 5.0, y: 5.0 },
                ViewerEvent::PointerEnter(1),
            ]
        );
    }
}
