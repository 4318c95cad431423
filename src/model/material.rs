use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Position of a material in the model's appearance library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialIndex(pub usize);

/// Color used when a caller does not pick one.
pub const DEFAULT_COLOR: [f64; 3] = [0.5, 0.5, 0.5];

/// A named surface appearance.
///
/// Diffuse, emissive and specular colors are always the same triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,
    pub diffuse_color: [f64; 3],
    pub emissive_color: [f64; 3],
    pub specular_color: [f64; 3],
}

impl Material {
    /// Creates a material with all three colors set to `color`.
    #[must_use]
    pub fn uniform(name: impl Into<String>, color: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            diffuse_color: color,
            emissive_color: color,
            specular_color: color,
        }
    }
}

/// Library of named materials, each registered at most once.
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
    by_name: HashMap<String, MaterialIndex>,
}

impl MaterialRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `name`, registering it with `color` on first use.
    ///
    /// Color components are stored verbatim; values outside `[0, 1]` are not
    /// rejected. A later call with a different color keeps the first one.
    pub fn add(&mut self, name: &str, color: [f64; 3]) -> MaterialIndex {
        if let Some(&index) = self.by_name.get(name) {
            return index;
        }

        let index = MaterialIndex(self.materials.len());
        self.materials.push(Material::uniform(name, color));
        self.by_name.insert(name.to_owned(), index);

        tracing::debug!(material = name, index = index.0, "registered material");
        index
    }

    /// Looks up a material by name without registering anything.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<MaterialIndex> {
        self.by_name.get(name).copied()
    }

    /// Returns the material at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the end of the library.
    pub fn get(&self, index: MaterialIndex) -> Result<&Material, ModelError> {
        self.materials
            .get(index.0)
            .ok_or(ModelError::IndexOutOfBounds {
                collection: "material",
                index: index.0,
                len: self.materials.len(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    #[must_use]
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }
}
