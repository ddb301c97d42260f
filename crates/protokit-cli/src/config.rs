//! Plugin configuration from `--kit_opt` parameters.
//!
//! ```text
//! protoc --kit_out=gen --kit_opt=model_out={file}.json,pretty=false,log=debug ...
//! ```

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use protokit_schema::render::DEFAULT_MODEL_OUT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// Output name pattern for the model file (`{package}`, `{file}`,
    /// `{appName}`).
    pub model_out: String,
    pub pretty: bool,
    /// `tracing` filter directive, e.g. `protokit_schema=debug`.
    pub log: Option<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            model_out: DEFAULT_MODEL_OUT.to_string(),
            pretty: true,
            log: None,
        }
    }
}

impl PluginConfig {
    /// Unknown keys are left for templates (they stay in the model's
    /// parameter map).
    pub fn from_parameters(params: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = PluginConfig::default();

        if let Some(out) = params.get("model_out") {
            if out.trim().is_empty() {
                bail!("parameter model_out must not be empty");
            }
            config.model_out = out.clone();
        }

        if let Some(pretty) = params.get("pretty") {
            config.pretty = match pretty.as_str() {
                "" | "true" | "1" => true,
                "false" | "0" => false,
                other => bail!("parameter pretty must be true or false (got {other:?})"),
            };
        }

        config.log = params.get("log").filter(|s| !s.is_empty()).cloned();
        Ok(config)
    }
}
