#![allow(clippy::unwrap_used)]

mod common;

use lczcity::config::GeneratorConfig;
use lczcity::error::{CityError, ExportError};
use lczcity::model::ObjectId;
use lczcity::operations::creation::{AddCube, AddLandUse, LandUseType};
use lczcity::operations::generate::{LczGrid, PopulateGrid};
use lczcity::operations::pattern::{ClassCode, PlaceClassCode};
use lczcity::{CityModel, ExportCityJson};
use serde_json::Value;

fn build_mixed_model() -> (CityModel, Vec<ObjectId>) {
    let mut model = CityModel::new();
    let mut ids = Vec::new();
    for (i, code) in [51, 17, 55, 12, 61, 21, 58].into_iter().enumerate() {
        let x = 50.0 + 100.0 * f64::from(u32::try_from(i).unwrap());
        ids.extend(
            PlaceClassCode::new(ClassCode(code), x, 50.0)
                .execute(&mut model)
                .unwrap(),
        );
    }
    ids.push(AddCube::new(-10, -10, 0).execute(&mut model).unwrap());
    ids.push(
        AddLandUse::new(-50, -50, LandUseType::Building)
            .execute(&mut model)
            .unwrap(),
    );
    (model, ids)
}

#[test]
fn exported_ids_match_created_ids() {
    common::init_tracing();
    let (model, ids) = build_mixed_model();
    let doc: Value = serde_json::from_str(&ExportCityJson::new().to_json(&model).unwrap()).unwrap();

    let objects = doc["CityObjects"].as_object().unwrap();
    assert_eq!(objects.len(), ids.len());
    for (n, id) in ids.iter().enumerate() {
        assert_eq!(id.as_str(), format!("id_{n}"));
        assert!(objects.contains_key(id.as_str()));
    }
}

#[test]
fn every_exported_reference_is_in_bounds() {
    let (model, _) = build_mixed_model();
    let doc: Value = serde_json::from_str(&ExportCityJson::new().to_json(&model).unwrap()).unwrap();

    let vertex_count = doc["vertices"].as_array().unwrap().len() as u64;
    let template_count = doc["geometry-templates"]["templates"].as_array().unwrap().len() as u64;
    let template_vertex_count = doc["geometry-templates"]["vertices-templates"]
        .as_array()
        .unwrap()
        .len() as u64;
    let material_count = doc["appearance"]["materials"].as_array().unwrap().len() as u64;

    for object in doc["CityObjects"].as_object().unwrap().values() {
        for geometry in object["geometry"].as_array().unwrap() {
            let mut vertices = Vec::new();
            common::integers(&geometry["boundaries"], &mut vertices);
            assert!(vertices.iter().all(|&v| v < vertex_count));

            if let Some(template) = geometry["template"].as_u64() {
                assert!(template < template_count);
            }
            let mut materials = Vec::new();
            common::integers(&geometry["material"], &mut materials);
            assert!(materials.iter().all(|&m| m < material_count));
        }
    }

    let mut local = Vec::new();
    common::integers(&doc["geometry-templates"]["templates"], &mut local);
    // "lod" is a string, so every integer here is a boundary reference.
    assert!(local.iter().all(|&v| v < template_vertex_count));
}

#[test]
fn cube_template_and_materials_are_registered_once() {
    let (model, _) = build_mixed_model();
    assert_eq!(model.templates().len(), 1);
    let names: Vec<_> = model
        .materials()
        .materials()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["water", "grass", "building"]);
}

#[test]
fn grid_population_exports_to_file() {
    common::init_tracing();
    let grid = LczGrid::regular(&[vec![52, 56, 17], vec![14, 61, 53]], [50.0, 50.0], 100.0).unwrap();
    let mut model = CityModel::with_config(GeneratorConfig::default().with_pretty_export(true));
    let per_cell = PopulateGrid::new(&grid).execute(&mut model).unwrap();
    let created: usize = per_cell.iter().map(Vec::len).sum();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("grid.city.json");
    ExportCityJson::new().execute(&model, &path).unwrap();

    let doc = common::read_json(&path);
    assert_eq!(doc["CityObjects"].as_object().unwrap().len(), created);
    assert_eq!(doc["type"], "CityJSON");
}

#[test]
fn unwritable_path_is_an_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.city.json");
    let err = ExportCityJson::new()
        .execute(&CityModel::new(), &path)
        .unwrap_err();
    assert!(matches!(err, CityError::Export(ExportError::Io(_))));
    assert!(!path.exists());
}
