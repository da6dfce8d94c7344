//! Build configuration: `deckhand.toml` loading and defaults.
//!
//! Every setting has a working default, so a bare `deckhand build` in a
//! repository with a `slides/` directory just works. A `deckhand.toml` at the
//! project root overrides defaults; CLI flags override both (the merge with
//! CLI values happens in `main`, this module only owns file loading).
//!
//! A *missing* config file is fine. A config file that exists but fails to
//! parse is a hard error — silently falling back to defaults would mask
//! typos in paths or the renderer command.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "deckhand.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Resolved build configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Content root holding the markdown deck sources.
    pub content_dir: PathBuf,
    /// Output root; one directory per deck plus the index page.
    pub output_dir: PathBuf,
    /// Directory for the fingerprint store.
    pub cache_dir: PathBuf,
    /// HTML template for the landing page.
    pub template: PathBuf,
    /// Base URL prefix the decks are served under.
    pub base: String,
    /// Renderer argv; deckhand appends the source file, `--base`, and `--out`.
    pub renderer: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: "slides".into(),
            output_dir: "dist".into(),
            cache_dir: ".deck-cache".into(),
            template: "index-template.html".into(),
            base: "/".into(),
            renderer: vec!["npx".into(), "slidev".into(), "build".into()],
        }
    }
}

impl Config {
    /// Load from an explicit path. The file must exist and parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `deckhand.toml` from the working directory if present, otherwise
    /// return defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILENAME);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// A stock `deckhand.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# deckhand configuration. Every key is optional; the values below are
# the built-in defaults.

# Content root holding the markdown deck sources.
content_dir = "slides"

# Output root. Each deck renders into <output_dir>/<url-path>/, and the
# landing page is written to <output_dir>/index.html.
output_dir = "dist"

# Where the fingerprint store (build-hashes.json) lives.
cache_dir = ".deck-cache"

# Landing page template. Must contain the two assignment placeholders
# `const baseUrl = '';` and `const slides = [];` for substitution.
template = "index-template.html"

# Base URL prefix the decks are served under (e.g. "/decks/" when hosted
# below a path). Overridden by `deckhand build --base`.
base = "/"

# Renderer command. deckhand appends: <source.md> --base <prefix> --out <dir>
renderer = ["npx", "slidev", "build"]
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_usable() {
        let cfg = Config::default();
        assert_eq!(cfg.content_dir, PathBuf::from("slides"));
        assert_eq!(cfg.base, "/");
        assert_eq!(cfg.renderer[0], "npx");
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        fs::write(&path, "base = \"/decks/\"\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.base, "/decks/");
        assert_eq!(cfg.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn renderer_override() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        fs::write(&path, "renderer = [\"slidev\", \"build\"]\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.renderer, vec!["slidev", "build"]);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        fs::write(&path, "base = [unterminated").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILENAME);
        fs::write(&path, "bse = \"/\"\n").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let cfg: Config = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
