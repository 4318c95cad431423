//! CityJSON serialization of a [`CityModel`].

mod document;

use std::fs;
use std::path::Path;

use crate::error::{ExportError, Result};
use crate::model::CityModel;
use crate::operations::query::IsValid;

pub use document::{CITYJSON_TYPE, CITYJSON_VERSION};

/// Writes a city model as a CityJSON document.
///
/// The model is validated first; a model with dangling indices or
/// non-finite numbers is never written.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportCityJson {
    pretty: Option<bool>,
}

impl ExportCityJson {
    /// Creates an exporter that follows the model's configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the configured indentation.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    /// Serializes `model` to CityJSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the model has a dangling index or a non-finite
    /// number, or cannot be serialized.
    pub fn to_json(&self, model: &CityModel) -> Result<String> {
        IsValid::new().execute(model)?;

        let document = document::Document::new(model);
        let pretty = self.pretty.unwrap_or(model.config().pretty_export());
        let text = if pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
        .map_err(ExportError::from)?;
        Ok(text)
    }

    /// Writes `model` to `path` in a single write.
    ///
    /// The write is not atomic; a failure may leave a truncated file.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is inconsistent or the file cannot be
    /// written.
    pub fn execute(&self, model: &CityModel, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_json(model)?;
        fs::write(path, text).map_err(ExportError::from)?;

        tracing::info!(
            path = %path.display(),
            objects = model.objects().len(),
            vertices = model.vertices().len(),
            "exported CityJSON document"
        );
        Ok(())
    }
}
