//! Renderer seam.
//!
//! Renderers receive the finished model read-only and return the files to
//! emit; they never see a partially built model. Output naming is passed in
//! as configuration rather than looked up from global tables.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::model::ProtoModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    /// Path relative to the compiler's output directory.
    pub name: String,
    pub content: String,
}

pub trait Renderer {
    fn render(&self, model: &ProtoModel) -> Result<Vec<OutputFile>>;
}

pub const DEFAULT_MODEL_OUT: &str = "{package}.model.json";

const APP_NAME_PLACEHOLDER: &str = "{appName}";

/// Emits the model itself as JSON, for consumption by external templates.
#[derive(Debug, Clone)]
pub struct JsonModelRenderer {
    /// Output name pattern; `{package}`, `{file}` (target file stem) and
    /// `{appName}` (the `appName` parameter) are substituted.
    pub out_pattern: String,
    pub pretty: bool,
}

impl Default for JsonModelRenderer {
    fn default() -> Self {
        Self {
            out_pattern: DEFAULT_MODEL_OUT.to_string(),
            pretty: true,
        }
    }
}

impl JsonModelRenderer {
    /// Resolve the output file name. A pattern using `{appName}` requires a
    /// non-empty `appName` parameter.
    pub fn output_name(&self, model: &ProtoModel) -> Result<String> {
        let base = model
            .source_file
            .rsplit('/')
            .next()
            .unwrap_or(&model.source_file);
        let stem = base.strip_suffix(".proto").unwrap_or(base);
        let mut name = self
            .out_pattern
            .replace("{package}", &model.package)
            .replace("{file}", stem);

        if name.contains(APP_NAME_PLACEHOLDER) {
            let app_name = model
                .parameters
                .get("appName")
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    SchemaError::Render(format!(
                        "output pattern {:?} uses {APP_NAME_PLACEHOLDER} but the appName \
                         parameter is not set",
                        self.out_pattern
                    ))
                })?;
            name = name.replace(APP_NAME_PLACEHOLDER, app_name);
        }
        Ok(name)
    }
}

impl Renderer for JsonModelRenderer {
    fn render(&self, model: &ProtoModel) -> Result<Vec<OutputFile>> {
        let name = self.output_name(model)?;
        if name.trim().is_empty() {
            return Err(SchemaError::Render("empty output file name".to_string()));
        }

        let mut content = if self.pretty {
            serde_json::to_string_pretty(model)
        } else {
            serde_json::to_string(model)
        }
        .map_err(|e| SchemaError::Render(format!("failed to serialize model: {e}")))?;
        content.push('\n');

        tracing::debug!(file = %name, bytes = content.len(), "rendered model json");
        Ok(vec![OutputFile { name, content }])
    }
}
