//! Appartenance d'un point à l'anneau d'un lieu

use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Area, Coord, LineString, Polygon};

use crate::types::Point;

/// Construit le polygone d'un anneau fermé implicitement.
///
/// Retourne `None` pour un anneau dégénéré : moins de 3 sommets distincts
/// ou aire nulle (sommets alignés).
pub fn ring_polygon(path: &[Point]) -> Option<Polygon<f64>> {
    let mut coords: Vec<Coord<f64>> = path.iter().map(|&p| Coord::from(p)).collect();
    coords.dedup();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    if coords.len() < 3 {
        return None;
    }

    // Polygon::new ferme l'anneau
    let polygon = Polygon::new(LineString::new(coords), vec![]);
    if polygon.unsigned_area() == 0.0 {
        return None;
    }
    Some(polygon)
}

/// Le clic est-il dans l'anneau ou sur son bord ?
///
/// Un anneau dégénéré ne contient jamais rien.
pub fn ring_contains(path: &[Point], click: Point) -> bool {
    ring_polygon(path).is_some_and(|polygon| polygon_contains(&polygon, click))
}

/// Appartenance au polygone, bord inclus
pub fn polygon_contains(polygon: &Polygon<f64>, click: Point) -> bool {
    polygon.coordinate_position(&Coord::from(click)) != CoordPos::Outside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(47.390, 0.680),
            Point::new(47.390, 0.690),
            Point::new(47.400, 0.690),
            Point::new(47.400, 0.680),
        ]
    }

    #[test]
    fn test_inside() {
        assert!(ring_contains(&square(), Point::new(47.395, 0.685)));
    }

    #[test]
    fn test_outside() {
        assert!(!ring_contains(&square(), Point::new(47.405, 0.685)));
        assert!(!ring_contains(&square(), Point::new(47.395, 0.695)));
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        // Sur une arête
        assert!(ring_contains(&square(), Point::new(47.390, 0.685)));
        // Sur un sommet
        assert!(ring_contains(&square(), Point::new(47.400, 0.690)));
        // Sur l'arête de fermeture implicite (dernier → premier)
        assert!(ring_contains(&square(), Point::new(47.395, 0.680)));
    }

    #[test]
    fn test_explicitly_closed_ring() {
        let mut ring = square();
        ring.push(ring[0]);
        assert!(ring_contains(&ring, Point::new(47.395, 0.685)));
    }

    #[test]
    fn test_degenerate_rings_never_contain() {
        let p = Point::new(47.39, 0.68);
        assert!(!ring_contains(&[], p));
        assert!(!ring_contains(&[p], p));
        assert!(!ring_contains(&[p, Point::new(47.40, 0.69)], p));
        // Triangle fermé explicitement = 2 sommets distincts
        assert!(!ring_contains(&[p, Point::new(47.40, 0.69), p], p));
        // Sommets alignés
        let line = [p, Point::new(47.395, 0.685), Point::new(47.40, 0.69)];
        assert!(ring_polygon(&line).is_none());
        assert!(!ring_contains(&line, Point::new(47.395, 0.685)));
    }

    #[test]
    fn test_concave_ring() {
        // U ouvert vers le nord
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 2.0),
            Point::new(1.0, 2.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 1.0),
            Point::new(3.0, 0.0),
        ];
        assert!(ring_contains(&ring, Point::new(0.5, 1.5)));
        assert!(!ring_contains(&ring, Point::new(2.0, 1.5)));
    }
}
