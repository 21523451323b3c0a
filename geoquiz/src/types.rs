//! Types de données pour le crate geoquiz

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;

/// Coordonnée géographique en degrés décimaux
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude en degrés
    pub lat: f64,

    /// Longitude en degrés
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

// `geo` travaille en (x, y) = (lon, lat)
impl From<Point> for geo::Point<f64> {
    fn from(p: Point) -> Self {
        geo::Point::new(p.lon, p.lat)
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(p: Point) -> Self {
        geo::Coord { x: p.lon, y: p.lat }
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(p: geo::Point<f64>) -> Self {
        Self { lat: p.y(), lon: p.x() }
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(c: geo::Coord<f64>) -> Self {
        Self { lat: c.y, lon: c.x }
    }
}

/// Nature de la cible à trouver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Rue : polyligne ouverte
    Street,
    /// Lieu : anneau de polygone fermé implicitement
    Landmark,
}

/// Une cible du quiz (rue ou lieu) avec sa géométrie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Nom affiché au joueur
    pub name: String,

    /// Rue ou lieu
    pub kind: FeatureKind,

    /// Sommets dans l'ordre d'insertion.
    ///
    /// Pour une rue issue de plusieurs ways OSM de même nom, les chemins sont
    /// concaténés : la continuité spatiale n'est pas garantie.
    pub path: Vec<Point>,

    /// Commune, pour distinguer deux features homonymes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

/// Identité d'une feature pour la déduplication : nom + commune éventuelle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureKey {
    pub name: String,
    pub city_name: Option<String>,
}

impl Feature {
    pub fn new(name: impl Into<String>, kind: FeatureKind, path: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            kind,
            path,
            city_name: None,
        }
    }

    pub fn street(name: impl Into<String>, path: Vec<Point>) -> Self {
        Self::new(name, FeatureKind::Street, path)
    }

    pub fn landmark(name: impl Into<String>, path: Vec<Point>) -> Self {
        Self::new(name, FeatureKind::Landmark, path)
    }

    pub fn with_city(mut self, city_name: impl Into<String>) -> Self {
        self.city_name = Some(city_name.into());
        self
    }

    pub fn key(&self) -> FeatureKey {
        FeatureKey {
            name: self.name.clone(),
            city_name: self.city_name.clone(),
        }
    }

    /// Nom qualifié par la commune si elle est connue ("Rue Nationale (Tours)")
    pub fn display_name(&self) -> String {
        match &self.city_name {
            Some(city) => format!("{} ({})", self.name, city),
            None => self.name.clone(),
        }
    }

    /// Emprise de la géométrie, `None` si le chemin est vide
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.path)
    }
}
