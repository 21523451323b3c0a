//! Distances géodésiques (sphère moyenne) entre un clic et une géométrie

use geo::{Closest, Coord, HaversineClosestPoint, HaversineDistance, Line};

use crate::types::Point;

/// Distance orthodromique (haversine) en mètres
pub fn haversine(a: Point, b: Point) -> f64 {
    geo::Point::from(a).haversine_distance(&geo::Point::from(b))
}

/// Point du segment [a, b] le plus proche de `click`, sur le grand cercle.
///
/// Le pied de la perpendiculaire est borné aux extrémités du segment.
pub fn closest_point_on_segment(click: Point, a: Point, b: Point) -> Point {
    if a == b {
        return a;
    }
    let line = Line::new(Coord::from(a), Coord::from(b));
    match line.haversine_closest_point(&geo::Point::from(click)) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => p.into(),
        // Cas antipodaux : on retombe sur l'extrémité la plus proche
        Closest::Indeterminate => {
            if haversine(click, a) <= haversine(click, b) {
                a
            } else {
                b
            }
        }
    }
}

/// Distance en mètres du clic au segment [a, b]
pub fn distance_to_segment(click: Point, a: Point, b: Point) -> f64 {
    haversine(click, closest_point_on_segment(click, a, b))
}

/// Distance minimale du clic à une polyligne ouverte.
///
/// Un chemin d'un seul point se réduit à la distance à ce point ; un chemin
/// vide donne `None`.
pub fn distance_to_polyline(click: Point, path: &[Point]) -> Option<f64> {
    match path {
        [] => None,
        [only] => Some(haversine(click, *only)),
        _ => path
            .windows(2)
            .map(|w| distance_to_segment(click, w[0], w[1]))
            .reduce(f64::min),
    }
}

/// Distance minimale du clic à l'un des sommets
pub fn distance_to_nearest_vertex(click: Point, path: &[Point]) -> Option<f64> {
    path.iter().map(|&p| haversine(click, p)).reduce(f64::min)
}
