//! CLI configuration.
//!
//! Reads `~/.modelgen/config.toml`. Every key is optional.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use modelgen_codegen_lib::{Artifact, TemplateNames};
use serde::{Deserialize, Serialize};

/// Where `generate --out` writes files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output directory when `--out` is given without a value.
    pub dir: PathBuf,
    pub schema_file: String,
    pub model_file: String,
    pub form_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated"),
            schema_file: "schema.js".to_string(),
            model_file: "model.ts".to_string(),
            form_file: "form.ts".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn file_name(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::Schema => &self.schema_file,
            Artifact::Model => &self.model_file,
            Artifact::Form => &self.form_file,
        }
    }
}

/// Config file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Identifier of the generated schema constant.
    pub schema_name: String,
    /// Identifier of the generated interface.
    pub model_name: String,
    /// Identifier of the generated form group.
    pub form_name: String,
    pub output: OutputConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        let names = TemplateNames::default();
        Self {
            schema_name: names.schema,
            model_name: names.model,
            form_name: names.form,
            output: OutputConfig::default(),
        }
    }
}

impl CliConfig {
    /// Default config file path: ~/.modelgen/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn template_names(&self) -> TemplateNames {
        TemplateNames {
            schema: self.schema_name.clone(),
            model: self.model_name.clone(),
            form: self.form_name.clone(),
        }
    }
}

/// Return the modelgen config directory (~/.modelgen).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".modelgen")
}
