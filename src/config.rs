use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::glsl::{SymbolRegistry, UniformDescriptor};
use crate::lsp::scan::DEFAULT_LOOKBACK_LINES;

pub const CONFIG_FILE: &str = "shaderlab.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid shaderlab.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("uniform '{0}' is declared more than once")]
    DuplicateUniform(String),
    #[error("uniform declaration has an empty name")]
    EmptyUniformName,
    #[error("signature_help.lookback_lines must be at least 1")]
    ZeroLookback,
}

/// Settings from `shaderlab.toml`. Every key is optional.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// File extensions treated as GLSL sources.
    pub extensions: Vec<String>,
    pub signature_help: SignatureHelpConfig,
    /// Uniforms the host sets in addition to `u_time`, `u_resolution`,
    /// and `u_mouse`.
    pub uniforms: Vec<UniformDescriptor>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SignatureHelpConfig {
    pub lookback_lines: u32,
}

impl Default for SignatureHelpConfig {
    fn default() -> Self {
        Self {
            lookback_lines: DEFAULT_LOOKBACK_LINES,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            extensions: ["glsl", "frag", "vert", "fs", "vs"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            signature_help: SignatureHelpConfig::default(),
            uniforms: Vec::new(),
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.signature_help.lookback_lines == 0 {
            return Err(ConfigError::ZeroLookback);
        }
        let mut seen = HashSet::new();
        for u in &self.uniforms {
            if u.name.trim().is_empty() {
                return Err(ConfigError::EmptyUniformName);
            }
            if !seen.insert(u.name.as_str()) {
                return Err(ConfigError::DuplicateUniform(u.name.clone()));
            }
        }
        Ok(())
    }

    /// Try to find a shaderlab.toml in the given directory or its ancestors.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.exists() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Load the nearest config above `start_dir`, or the defaults when
    /// there is none.
    pub fn discover(start_dir: &Path) -> Result<Config, ConfigError> {
        match Config::find(start_dir) {
            Some(path) => Config::load(&path),
            None => Ok(Config::default()),
        }
    }

    /// Whether `path` has one of the configured GLSL extensions.
    pub fn is_shader_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Symbol registry with this project's uniforms added.
    pub fn registry(&self) -> SymbolRegistry {
        SymbolRegistry::with_uniforms(self.uniforms.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.signature_help.lookback_lines, 20);
        assert!(config.uniforms.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"log_level = "debug"
extensions = ["frag"]

[signature_help]
lookback_lines = 40

[[uniforms]]
name = "u_texture"
type = "sampler2D"
description = "Lesson texture."

[[uniforms]]
name = "u_frame"
type = "int"
"#,
        )
        .unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.extensions, vec!["frag".to_string()]);
        assert_eq!(config.signature_help.lookback_lines, 40);
        assert_eq!(config.uniforms.len(), 2);
        assert_eq!(config.uniforms[0].ty, "sampler2D");
        assert_eq!(config.uniforms[1].description, "");
    }

    #[test]
    fn test_rejects_duplicate_uniform() {
        let err = Config::parse(
            r#"[[uniforms]]
name = "u_a"
type = "float"

[[uniforms]]
name = "u_a"
type = "vec2"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateUniform(ref n) if n == "u_a"));
    }

    #[test]
    fn test_rejects_zero_lookback() {
        let err = Config::parse("[signature_help]\nlookback_lines = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroLookback));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = Config::parse("lookback = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid shaderlab.toml"));
    }

    #[test]
    fn test_rejects_empty_uniform_name() {
        let err = Config::parse("[[uniforms]]\nname = \" \"\ntype = \"float\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyUniformName));
    }

    #[test]
    fn test_find_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("lessons").join("01");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "log_level = \"info\"\n").unwrap();

        let found = Config::find(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
        let config = Config::discover(&nested).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempfile::tempdir().unwrap();
        // Ancestors of a temp dir normally hold no shaderlab.toml.
        if Config::find(dir.path()).is_none() {
            assert_eq!(Config::discover(dir.path()).unwrap(), Config::default());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_registry_includes_project_uniforms() {
        let config = Config::parse(
            "[[uniforms]]\nname = \"u_texture\"\ntype = \"sampler2D\"\n",
        )
        .unwrap();
        let registry = config.registry();
        assert_eq!(registry.uniform("u_texture").unwrap().ty, "sampler2D");
        assert!(registry.uniform("u_time").is_some());
    }

    #[test]
    fn test_is_shader_file() {
        let config = Config::default();
        assert!(config.is_shader_file(Path::new("lesson/plasma.frag")));
        assert!(config.is_shader_file(Path::new("a.glsl")));
        assert!(!config.is_shader_file(Path::new("README.md")));
        assert!(!config.is_shader_file(Path::new("Makefile")));
    }
}
