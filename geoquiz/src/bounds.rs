//! Emprises, centre de carte et position de la bonne réponse

use geo::{BoundingRect, Coord, LineString, Rect};
use serde::Serialize;

use crate::types::{Feature, FeatureKind, Point};

/// Emprise alignée sur les axes, en degrés
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Emprise d'un ensemble de points, `None` si vide
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let line: LineString<f64> = points.iter().map(|&p| Coord::from(p)).collect();
        line.bounding_rect().map(Self::from)
    }

    /// Plus petite emprise contenant les deux
    pub fn union(self, other: Self) -> Self {
        Self {
            min_lat: self.min_lat.min(other.min_lat),
            max_lat: self.max_lat.max(other.max_lat),
            min_lon: self.min_lon.min(other.min_lon),
            max_lon: self.max_lon.max(other.max_lon),
        }
    }

    pub fn center(&self) -> Point {
        Rect::from(*self).center().into()
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min_lat..=self.max_lat).contains(&p.lat)
            && (self.min_lon..=self.max_lon).contains(&p.lon)
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lon: rect.min().x,
            max_lon: rect.max().x,
        }
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(
            Coord {
                x: bbox.min_lon,
                y: bbox.min_lat,
            },
            Coord {
                x: bbox.max_lon,
                y: bbox.max_lat,
            },
        )
    }
}

/// Centre de l'emprise cumulée des features, pour initialiser la vue de carte.
///
/// Retourne `None` si aucune feature n'a de géométrie.
pub fn center_of(features: &[Feature]) -> Option<Point> {
    features
        .iter()
        .filter_map(Feature::bounds)
        .reduce(BoundingBox::union)
        .map(|bbox| bbox.center())
}

/// Position du marqueur de bonne réponse.
///
/// Lieu : centre de son emprise. Rue : sommet d'indice `len / 2` (pas le
/// milieu géométrique, les ways concaténés ne sont pas forcément continus).
pub fn reveal_position(feature: &Feature) -> Option<Point> {
    match feature.kind {
        FeatureKind::Landmark => feature.bounds().map(|bbox| bbox.center()),
        FeatureKind::Street => feature.path.get(feature.path.len() / 2).copied(),
    }
}
