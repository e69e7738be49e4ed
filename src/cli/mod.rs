pub mod query;
pub mod symbols;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tower_lsp::lsp_types::Position;

use shaderlab::config::CONFIG_FILE;
use shaderlab::{Config, Document};

/// A configuration and the file it came from, if any.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Report where the configuration came from. Call once logging is up.
    pub fn log_source(&self) {
        match &self.path {
            Some(path) => log::info!("loaded configuration from {}", path.display()),
            None => log::debug!("no {} found, using defaults", CONFIG_FILE),
        }
    }
}

/// Load `--config` when given, otherwise the nearest shaderlab.toml above
/// the working directory, otherwise the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::find(&cwd)
        }
    };
    let config = match &path {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading '{}'", path.display()))?
        }
        None => Config::default(),
    };
    Ok(LoadedConfig { config, path })
}

/// `RUST_LOG` wins; otherwise `--verbose`, then the config's `log_level`,
/// then `warn`. Output goes to stderr.
pub fn init_logging(verbose: bool, config_level: Option<&str>) {
    let default = if verbose {
        "debug"
    } else {
        config_level.unwrap_or("warn")
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .target(env_logger::Target::Stderr)
        .init();
}

pub fn cmd_lsp(config: Config) -> Result<()> {
    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(shaderlab::lsp::run_server(config));
    Ok(())
}

pub fn read_document(path: &Path) -> Result<Document> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("cannot read '{}'", path.display()))?;
    Ok(Document::new(text))
}

/// Convert a 1-based line and column to an LSP position.
pub fn to_position(line: u32, col: u32) -> Result<Position> {
    if line == 0 || col == 0 {
        bail!("line and column are 1-based, got {line}:{col}");
    }
    Ok(Position::new(line - 1, col - 1))
}
