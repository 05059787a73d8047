//! Models declared in JSON or YAML documents.
//!
//! A manifest carries the same declarations a hand-written [`RestModel`]
//! returns:
//!
//! ```yaml
//! name: Users
//! base_uri: https://api.example.com/v1
//! headers:
//!   Authorization: Bearer token
//! routes:
//!   index:
//!     method: GET
//!     path: /users
//!   show:
//!     method: GET
//!     path: /users/:id
//!   create:
//!     method: POST
//!     path: /users
//!     body:
//!       role: member
//! ```
//!
//! Paths are not checked when the manifest is loaded; like any other model,
//! template problems surface when the operation is invoked.

use std::fs;
use std::path::Path;

use restmold_define::{HeaderSet, RouteMap};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::model::RestModel;

/// A [`RestModel`] whose declarations were loaded from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestModel {
    /// Identifies the model in error messages.
    pub name: String,
    #[serde(default)]
    pub base_uri: String,
    /// Header overrides merged over the JSON defaults, in document order.
    #[serde(default)]
    pub headers: HeaderSet,
    #[serde(default)]
    pub routes: RouteMap,
}

impl ManifestModel {
    /// Parses a JSON manifest.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is not a valid manifest.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a YAML manifest.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is not a valid manifest.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads a manifest, choosing the format from the file extension.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The extension is not `json`, `yaml` or `yml`
    /// - The file cannot be read
    /// - The contents fail to parse
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("json") => Self::from_json,
            Some("yaml" | "yml") => Self::from_yaml,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = parse(&source)?;

        debug!(path = %path.display(), name = %model.name, routes = model.routes.len(), "loaded manifest");
        Ok(model)
    }
}

impl RestModel for ManifestModel {
    fn headers(&self) -> HeaderSet {
        self.headers.clone()
    }

    fn routes(&self) -> RouteMap {
        self.routes.clone()
    }

    fn base_uri(&self) -> String {
        self.base_uri.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
