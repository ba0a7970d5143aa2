use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use pointview_core::config::ViewerConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default ViewerConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = toml::to_string_pretty(&ViewerConfig::default())?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

/// Read a ViewerConfig from TOML, or fall back to defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<ViewerConfig> {
    match path {
        Some(path) => ViewerConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(ViewerConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_survives_toml() {
        let toml_str = toml::to_string_pretty(&ViewerConfig::default()).unwrap();
        let back: ViewerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, ViewerConfig::default());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ViewerConfig = toml::from_str(
            r##"
            image_root = "/data"

            [palette]
            primary = "#00ff00"
            secondary = "#ff0000"
            "##,
        )
        .unwrap();
        assert_eq!(config.image_root, PathBuf::from("/data"));
        assert_eq!(config.palette.primary.to_string(), "#00ff00");
        assert_eq!(config.thumbnail.width, 100.0);
    }

    #[test]
    fn load_rejects_invalid_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[point_size]\ndefault = 1.0\nmin = 3.0\nmax = 2.0\nstep = 0.1\n")
            .unwrap();

        let err = load(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));
    }

    #[test]
    fn load_without_path_uses_defaults() {
        assert_eq!(load(None).unwrap(), ViewerConfig::default());
    }

    #[test]
    fn run_saves_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.toml");

        run(&ConfigArgs {
            output: Some(path.clone()),
        })
        .unwrap();

        assert_eq!(load(Some(&path)).unwrap(), ViewerConfig::default());
    }
}
