//! Layered design settings for the CLI.
//!
//! Precedence, lowest to highest:
//! 1. Compiled defaults (`DesignSettings::default()`)
//! 2. TOML file passed with `--settings`
//! 3. Environment variables: `DECK_*` prefix, `__` between nested keys
//!    (`DECK_JOIST_SPACING=12`, `DECK_LOADS__LIVE_PSF=60`)
//! 4. The `--spacing` flag, applied by the caller

use std::path::Path;

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Map};
use deck_core::settings::DesignSettings;
use tracing::debug;

const ENV_PREFIX: &str = "DECK";

/// Environment source; `vars` replaces the process environment in tests.
fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

fn resolve(builder: ConfigBuilder<DefaultState>) -> Result<DesignSettings> {
    let settings: DesignSettings = builder
        .build()
        .context("failed to read design settings")?
        .try_deserialize()
        .context("invalid design settings")?;
    settings.validate()?;
    Ok(settings)
}

/// Load design settings from defaults, an optional TOML file and `DECK_*`
/// environment variables.
pub fn load_settings(path: Option<&Path>) -> Result<DesignSettings> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        debug!(path = %path.display(), "loading settings file");
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    resolve(builder.add_source(environment(None)))
        .with_context(|| match path {
            Some(path) => format!("settings file {}", path.display()),
            None => "settings from environment".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::span_tables::JoistSpacing;

    fn layered(toml: Option<&str>, vars: &[(&str, &str)]) -> Result<DesignSettings> {
        let mut builder = Config::builder();
        if let Some(toml) = toml {
            builder = builder.add_source(File::from_str(toml, FileFormat::Toml));
        }
        let vars: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        resolve(builder.add_source(environment(Some(vars))))
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = layered(None, &[]).unwrap();
        assert_eq!(settings, DesignSettings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = "joist_spacing = 12\ntarget_post_spacing_ft = 6\n\n[loads]\nlive_psf = 60.0\n";
        let settings = layered(Some(toml), &[]).unwrap();
        assert_eq!(settings.joist_spacing, JoistSpacing::Oc12);
        assert_eq!(settings.target_post_spacing_ft, 6.0);
        assert_eq!(settings.loads.live_psf, 60.0);
        assert_eq!(settings.loads.dead_psf, 15.0);
    }

    #[test]
    fn test_env_overrides_file() {
        let settings = layered(
            Some("joist_spacing = 12\n"),
            &[("DECK_JOIST_SPACING", "24"), ("DECK_LOADS__DEAD_PSF", "20")],
        )
        .unwrap();
        assert_eq!(settings.joist_spacing, JoistSpacing::Oc24);
        assert_eq!(settings.loads.dead_psf, 20.0);
    }

    #[test]
    fn test_unprefixed_env_ignored() {
        let settings = layered(None, &[("JOIST_SPACING", "12")]).unwrap();
        assert_eq!(settings.joist_spacing, JoistSpacing::Oc16);
    }

    #[test]
    fn test_invalid_spacing_rejected() {
        assert!(layered(Some("joist_spacing = 18\n"), &[]).is_err());
        assert!(layered(None, &[("DECK_TARGET_POST_SPACING_FT", "0")]).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_settings(Some(Path::new("/nonexistent/deck-settings.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("deck-settings.toml"));
    }
}
