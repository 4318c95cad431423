use crate::error::ModelError;
use crate::model::{CityModel, Geometry, ObjectId};

/// Checks that every stored index addresses an existing entry and that every
/// stored number can be written as JSON.
///
/// Covers anchor and ring vertices, template and material references of
/// every object, and the local vertex references of every template. Vertex
/// coordinates, material colors and instance transforms must be finite.
#[derive(Debug, Default)]
pub struct IsValid;

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfBounds`] for the first dangling
    /// reference found and [`ModelError::NonFiniteValue`] for the first NaN or
    /// infinite number.
    pub fn execute(&self, model: &CityModel) -> Result<(), ModelError> {
        check_finite(model)?;

        let local_len = model.templates().vertices().len();
        for template in model.templates().templates() {
            for &index in template.boundaries.iter().flatten().flatten().flatten() {
                if index >= local_len {
                    return Err(ModelError::IndexOutOfBounds {
                        collection: "template vertex",
                        index,
                        len: local_len,
                    });
                }
            }
        }

        for object in model.objects() {
            for geometry in &object.geometry {
                for vertex in geometry.vertex_indices() {
                    model
                        .check_vertex(vertex)
                        .inspect_err(|e| report(&object.id, e))?;
                }
                if let Some(template) = geometry.template_index() {
                    model
                        .check_template(template)
                        .inspect_err(|e| report(&object.id, e))?;
                }
                for material in geometry.material_indices() {
                    model
                        .check_material(material)
                        .inspect_err(|e| report(&object.id, e))?;
                }
            }
        }
        Ok(())
    }
}

fn check_finite(model: &CityModel) -> Result<(), ModelError> {
    let non_finite =
        |collection: &'static str, index: usize| ModelError::NonFiniteValue { collection, index };

    for (index, vertex) in model.vertices().as_slice().iter().enumerate() {
        if !vertex.iter().all(|c| c.is_finite()) {
            return Err(non_finite("vertex", index));
        }
    }
    for (index, material) in model.materials().materials().iter().enumerate() {
        let colors = [
            material.diffuse_color,
            material.emissive_color,
            material.specular_color,
        ];
        if !colors.iter().flatten().all(|c| c.is_finite()) {
            return Err(non_finite("material", index));
        }
    }
    for (index, object) in model.objects().iter().enumerate() {
        for geometry in &object.geometry {
            if let Geometry::GeometryInstance {
                transformation_matrix,
                ..
            } = geometry
            {
                if !transformation_matrix.iter().all(|m| m.is_finite()) {
                    let error = non_finite("object transform", index);
                    report(&object.id, &error);
                    return Err(error);
                }
            }
        }
    }
    Ok(())
}

fn report(id: &ObjectId, error: &ModelError) {
    tracing::error!(object = %id, %error, "dangling reference in city object");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{CityObjectKind, TemplateIndex, VertexIndex};
    use crate::operations::creation::{AddCube, AddLandUse, LandUseType};

    #[test]
    fn built_model_is_valid() {
        let mut model = CityModel::new();
        AddCube::new(0, 0, 0).execute(&mut model).unwrap();
        AddLandUse::new(50, 50, LandUseType::Grass)
            .execute(&mut model)
            .unwrap();
        IsValid::new().execute(&model).unwrap();
    }

    #[test]
    fn empty_model_is_valid() {
        IsValid::new().execute(&CityModel::new()).unwrap();
    }

    #[test]
    fn dangling_vertex_is_reported() {
        let mut model = CityModel::new();
        let cube = model.cube_template();
        model.insert_object(
            CityObjectKind::GenericCityObject,
            vec![Geometry::GeometryInstance {
                template: cube,
                boundaries: [VertexIndex(7)],
                transformation_matrix: [0.0; 16],
            }],
        );
        let err = IsValid::new().execute(&model).unwrap_err();
        assert!(matches!(
            err,
            ModelError::IndexOutOfBounds { collection: "vertex", index: 7, len: 0 }
        ));
    }

    #[test]
    fn dangling_template_is_reported() {
        let mut model = CityModel::new();
        let v = model.add_vertex(0, 0, 0);
        model.insert_object(
            CityObjectKind::GenericCityObject,
            vec![Geometry::GeometryInstance {
                template: TemplateIndex(0),
                boundaries: [v],
                transformation_matrix: [0.0; 16],
            }],
        );
        let err = IsValid::new().execute(&model).unwrap_err();
        assert!(matches!(
            err,
            ModelError::IndexOutOfBounds { collection: "template", .. }
        ));
    }

    #[test]
    fn non_finite_vertex_is_reported() {
        let mut model = CityModel::new();
        model.add_vertex(0, 0, 0);
        model.add_vertex(f64::NAN, 0, 0);
        let err = IsValid::new().execute(&model).unwrap_err();
        assert!(matches!(
            err,
            ModelError::NonFiniteValue { collection: "vertex", index: 1 }
        ));
    }

    #[test]
    fn non_finite_color_and_transform_are_reported() {
        let mut model = CityModel::new();
        model.add_material("glow", Some([f64::INFINITY, 0.0, 0.0]));
        assert!(matches!(
            IsValid::new().execute(&model).unwrap_err(),
            ModelError::NonFiniteValue { collection: "material", index: 0 }
        ));

        let mut model = CityModel::new();
        AddCube::new(0, 0, 0)
            .with_scaling(f64::NAN, 1.0, 1.0)
            .execute(&mut model)
            .unwrap();
        assert!(matches!(
            IsValid::new().execute(&model).unwrap_err(),
            ModelError::NonFiniteValue { collection: "object transform", index: 0 }
        ));
    }
}
