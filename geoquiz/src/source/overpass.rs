//! Décodage des réponses Overpass (`[out:json]` + `out geom`)

use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::types::{Feature, FeatureKind, Point};
use crate::QuizError;

/// Clés de tag utilisées pour qualifier le nom par la commune
const CITY_TAGS: [&str; 2] = ["addr:city", "is_in:city"];

#[derive(Debug, Deserialize)]
struct Response {
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    #[serde(rename = "type")]
    element_type: String,
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    tags: HashMap<String, String>,
    #[serde(default)]
    geometry: Option<Vec<LatLon>>,
    #[serde(default)]
    members: Vec<Member>,
}

#[derive(Debug, Deserialize)]
struct Member {
    #[serde(default)]
    role: String,
    #[serde(default)]
    geometry: Option<Vec<LatLon>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct LatLon {
    lat: f64,
    lon: f64,
}

impl From<LatLon> for Point {
    fn from(c: LatLon) -> Self {
        Point::new(c.lat, c.lon)
    }
}

impl Element {
    /// Géométrie de l'élément ; pour une relation, les membres hors `inner` bout à bout
    fn path(&self) -> Vec<Point> {
        match &self.geometry {
            Some(geometry) => geometry.iter().map(|&c| c.into()).collect(),
            None => self
                .members
                .iter()
                .filter(|m| m.role != "inner")
                .filter_map(|m| m.geometry.as_ref())
                .flatten()
                .map(|&c| c.into())
                .collect(),
        }
    }

    fn kind(&self) -> FeatureKind {
        if self.element_type == "way" {
            FeatureKind::Street
        } else {
            FeatureKind::Landmark
        }
    }

    fn city(&self) -> Option<String> {
        CITY_TAGS
            .iter()
            .find_map(|key| self.tags.get(*key))
            .filter(|city| !city.is_empty())
            .cloned()
    }
}

/// Décode une réponse Overpass en features fusionnées par nom.
///
/// Les éléments sans nom ou sans géométrie sont ignorés. Un `way` devient une
/// rue, tout autre élément un lieu.
///
/// # Errors
///
/// `QuizError::Json` si le document n'est pas du JSON Overpass.
pub fn parse(json: &str) -> Result<Vec<Feature>, QuizError> {
    let response: Response = serde_json::from_str(json)?;
    let total = response.elements.len();

    let mut skipped = 0usize;
    let raw: Vec<Feature> = response
        .elements
        .into_iter()
        .filter_map(|element| {
            let Some(name) = element.tags.get("name").filter(|n| !n.is_empty()) else {
                skipped += 1;
                return None;
            };
            let path = element.path();
            if path.is_empty() {
                debug!(id = ?element.id, name = %name, "Élément sans géométrie ignoré");
                skipped += 1;
                return None;
            }
            let mut feature = Feature::new(name.clone(), element.kind(), path);
            feature.city_name = element.city();
            Some(feature)
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, total, "Éléments Overpass ignorés (sans nom ou géométrie)");
    }

    Ok(super::merge_by_name(raw))
}
