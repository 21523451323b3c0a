//! Confrontation d'un clic avec la géométrie d'une feature

pub mod distance;
pub mod ring;

use serde::Serialize;
use tracing::{trace, warn};

use crate::types::{Feature, FeatureKind, Point};
use crate::QuizError;

/// Tolérance en mètres pour accepter un clic sur une rue
pub const STREET_TOLERANCE_METERS: f64 = 50.0;

/// Résultat géométrique brut, avant calcul des points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryMatch {
    pub is_correct: bool,
    pub distance_meters: f64,
}

/// Évalue un clic contre une feature.
///
/// - Lieu : correct si le clic est dans l'anneau (bord inclus), distance 0 ;
///   sinon distance au sommet le plus proche.
/// - Rue : distance à la polyligne, correct sous [`STREET_TOLERANCE_METERS`].
///
/// # Errors
///
/// `QuizError::InvalidClick` si le clic n'a pas des coordonnées finies ;
/// `QuizError::InvalidGeometry` si le chemin est vide ou contient des
/// coordonnées non finies.
pub fn evaluate(click: Point, feature: &Feature) -> Result<GeometryMatch, QuizError> {
    if !click.lat.is_finite() || !click.lon.is_finite() {
        return Err(QuizError::InvalidClick {
            lat: click.lat,
            lon: click.lon,
        });
    }
    validate_path(feature)?;

    let result = match feature.kind {
        FeatureKind::Landmark => evaluate_landmark(click, feature),
        FeatureKind::Street => evaluate_street(click, feature),
    }?;

    trace!(
        feature = %feature.name,
        kind = ?feature.kind,
        is_correct = result.is_correct,
        distance_m = result.distance_meters,
        "Clic évalué"
    );
    Ok(result)
}

fn validate_path(feature: &Feature) -> Result<(), QuizError> {
    if feature.path.is_empty() {
        return Err(QuizError::invalid_geometry(&feature.name, "empty path"));
    }
    if let Some(p) = feature
        .path
        .iter()
        .find(|p| !p.lat.is_finite() || !p.lon.is_finite())
    {
        return Err(QuizError::invalid_geometry(
            &feature.name,
            format!("non-finite coordinate ({}, {})", p.lat, p.lon),
        ));
    }
    Ok(())
}

fn evaluate_landmark(click: Point, feature: &Feature) -> Result<GeometryMatch, QuizError> {
    let Some(polygon) = ring::ring_polygon(&feature.path) else {
        warn!(
            feature = %feature.name,
            points = feature.path.len(),
            "Anneau dégénéré, aucun clic ne peut être contenu"
        );
        return outside_landmark(click, feature);
    };

    if ring::polygon_contains(&polygon, click) {
        return Ok(GeometryMatch {
            is_correct: true,
            distance_meters: 0.0,
        });
    }
    outside_landmark(click, feature)
}

fn outside_landmark(click: Point, feature: &Feature) -> Result<GeometryMatch, QuizError> {
    let distance_meters = distance::distance_to_nearest_vertex(click, &feature.path)
        .ok_or_else(|| QuizError::invalid_geometry(&feature.name, "empty path"))?;
    Ok(GeometryMatch {
        is_correct: false,
        distance_meters,
    })
}

fn evaluate_street(click: Point, feature: &Feature) -> Result<GeometryMatch, QuizError> {
    let distance_meters = distance::distance_to_polyline(click, &feature.path)
        .ok_or_else(|| QuizError::invalid_geometry(&feature.name, "empty path"))?;
    Ok(GeometryMatch {
        is_correct: distance_meters <= STREET_TOLERANCE_METERS,
        distance_meters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rue() -> Feature {
        Feature::street(
            "Rue Nationale",
            vec![Point::new(47.390, 0.680), Point::new(47.395, 0.690)],
        )
    }

    fn place() -> Feature {
        Feature::landmark(
            "Place Jean Jaurès",
            vec![
                Point::new(47.390, 0.680),
                Point::new(47.390, 0.690),
                Point::new(47.400, 0.690),
                Point::new(47.400, 0.680),
            ],
        )
    }

    #[test]
    fn test_street_midpoint_is_correct() {
        let result = evaluate(Point::new(47.3925, 0.685), &rue()).unwrap();
        assert!(result.is_correct);
        assert!(result.distance_meters < 1.0, "d={}", result.distance_meters);
    }

    #[test]
    fn test_street_tolerance() {
        // ≈ 33 m au nord du départ de la rue
        let near = evaluate(Point::new(47.3903, 0.680), &rue()).unwrap();
        assert!(near.is_correct, "d={}", near.distance_meters);

        // ≈ 111 m au sud du départ
        let far = evaluate(Point::new(47.389, 0.680), &rue()).unwrap();
        assert!(!far.is_correct);
        assert!(far.distance_meters > STREET_TOLERANCE_METERS);
    }

    #[test]
    fn test_landmark_inside() {
        let result = evaluate(Point::new(47.395, 0.685), &place()).unwrap();
        assert_eq!(
            result,
            GeometryMatch {
                is_correct: true,
                distance_meters: 0.0
            }
        );
    }

    #[test]
    fn test_landmark_outside_uses_nearest_vertex() {
        let click = Point::new(47.401, 0.691);
        let result = evaluate(click, &place()).unwrap();
        assert!(!result.is_correct);
        let expected = distance::haversine(click, Point::new(47.400, 0.690));
        assert!((result.distance_meters - expected).abs() < 1e-9);
        assert!(result.distance_meters > 0.0);
    }

    #[test]
    fn test_degenerate_landmark_never_correct() {
        let feature = Feature::landmark("Statue", vec![Point::new(47.39, 0.68)]);
        let result = evaluate(Point::new(47.391, 0.68), &feature).unwrap();
        assert!(!result.is_correct);
        assert!((result.distance_meters - 111.2).abs() < 1.0);
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let feature = Feature::street("Impasse", vec![]);
        let err = evaluate(Point::new(47.39, 0.68), &feature).unwrap_err();
        assert!(matches!(err, QuizError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_non_finite_coordinate_is_invalid() {
        let feature = Feature::street("Rue", vec![Point::new(f64::NAN, 0.68)]);
        assert!(evaluate(Point::new(47.39, 0.68), &feature).is_err());
    }

    #[test]
    fn test_non_finite_click_is_rejected() {
        for click in [
            Point::new(f64::NAN, 0.685),
            Point::new(47.395, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NAN),
        ] {
            let err = evaluate(click, &rue()).unwrap_err();
            assert!(matches!(err, QuizError::InvalidClick { .. }), "{err}");
            let err = evaluate(click, &place()).unwrap_err();
            assert!(matches!(err, QuizError::InvalidClick { .. }), "{err}");
        }
    }

    #[test]
    fn test_evaluate_is_pure() {
        let click = Point::new(47.3931, 0.6852);
        let first = evaluate(click, &rue()).unwrap();
        let second = evaluate(click, &rue()).unwrap();
        assert_eq!(first, second);
    }
}
