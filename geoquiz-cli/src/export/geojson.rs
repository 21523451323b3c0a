//! Export GeoJSON de la bonne réponse (géométrie, marqueur, clic)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use geo::{Coord, LineString};
use geojson::{Feature as GeoJsonFeature, FeatureCollection, Geometry, JsonObject, Value};

use geoquiz::geometry::ring::ring_polygon;
use geoquiz::{reveal_position, Feature, FeatureKind, Point};

/// Exporte la feature, son marqueur et le clic éventuel dans un fichier GeoJSON
pub fn export_reveal(feature: &Feature, click: Option<Point>, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    let collection = reveal_collection(feature, click);
    serde_json::to_writer(&mut writer, &collection)?;
    writer.flush()?;

    Ok(())
}

/// Construit la FeatureCollection : cible, marqueur de bonne réponse, clic
pub fn reveal_collection(feature: &Feature, click: Option<Point>) -> FeatureCollection {
    let mut features = vec![target_feature(feature)];

    if let Some(marker) = reveal_position(feature) {
        let mut properties = JsonObject::new();
        properties.insert("role".to_string(), "reveal".into());
        properties.insert(
            "popup".to_string(),
            format!("Position correcte: {}", feature.name).into(),
        );
        features.push(point_feature(marker, properties));
    }

    if let Some(click) = click {
        let mut properties = JsonObject::new();
        properties.insert("role".to_string(), "click".into());
        features.push(point_feature(click, properties));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Rue → LineString, lieu → Polygon (LineString si l'anneau est dégénéré)
fn target_feature(feature: &Feature) -> GeoJsonFeature {
    let line: LineString<f64> = feature.path.iter().map(|&p| Coord::from(p)).collect();
    let value = match feature.kind {
        FeatureKind::Landmark => match ring_polygon(&feature.path) {
            Some(polygon) => Value::from(&polygon),
            None => Value::from(&line),
        },
        FeatureKind::Street => Value::from(&line),
    };

    let mut properties = JsonObject::new();
    properties.insert("role".to_string(), "target".into());
    properties.insert("name".to_string(), feature.name.clone().into());
    properties.insert(
        "kind".to_string(),
        serde_json::to_value(feature.kind).unwrap_or_default(),
    );
    if let Some(city) = &feature.city_name {
        properties.insert("city".to_string(), city.clone().into());
    }

    GeoJsonFeature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn point_feature(p: Point, properties: JsonObject) -> GeoJsonFeature {
    GeoJsonFeature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![p.lon, p.lat]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
