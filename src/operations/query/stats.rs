use crate::model::{CityModel, CityObjectKind};

/// Entry counts of a city model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelStats {
    pub vertices: usize,
    pub templates: usize,
    pub template_vertices: usize,
    pub materials: usize,
    pub objects: usize,
    /// Objects that instantiate a template.
    pub instances: usize,
}

impl ModelStats {
    /// Counts the entries of `model`.
    #[must_use]
    pub fn of(model: &CityModel) -> Self {
        Self {
            vertices: model.vertices().len(),
            templates: model.templates().len(),
            template_vertices: model.templates().vertices().len(),
            materials: model.materials().len(),
            objects: model.objects().len(),
            instances: model
                .objects()
                .iter()
                .filter(|o| o.geometry.iter().any(|g| g.template_index().is_some()))
                .count(),
        }
    }

    /// Number of objects of `kind`.
    #[must_use]
    pub fn count_kind(model: &CityModel, kind: CityObjectKind) -> usize {
        model.objects().iter().filter(|o| o.kind == kind).count()
    }
}
