//! Évaluation complète d'un tour : géométrie puis barème

use serde::Serialize;
use tracing::debug;

use crate::geometry;
use crate::scoring::ScoringPolicy;
use crate::types::{Feature, Point};
use crate::QuizError;

/// Résultat d'une réponse donnée dans le temps imparti
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub is_correct: bool,
    pub distance_meters: f64,
    pub points: u32,
}

/// Issue d'un tour
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Le joueur a cliqué
    Answered(EvaluationResult),
    /// Temps écoulé sans clic : incorrect, pas de distance, 0 point
    TimedOut,
}

impl TurnOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Answered(r) if r.is_correct)
    }

    pub fn points(&self) -> u32 {
        match self {
            Self::Answered(r) => r.points,
            Self::TimedOut => 0,
        }
    }

    /// Distance au clic, `None` en cas de temps écoulé
    pub fn distance_meters(&self) -> Option<f64> {
        match self {
            Self::Answered(r) => Some(r.distance_meters),
            Self::TimedOut => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut)
    }
}

/// Évalue un tour.
///
/// `click` vaut `None` quand le temps est écoulé : la géométrie n'est alors
/// pas consultée.
///
/// # Errors
///
/// Propage `QuizError::InvalidGeometry` : le tour doit être signalé, pas noté.
pub fn evaluate_turn(
    click: Option<Point>,
    feature: &Feature,
    policy: &ScoringPolicy,
) -> Result<TurnOutcome, QuizError> {
    let Some(click) = click else {
        debug!(feature = %feature.name, "Temps écoulé");
        return Ok(TurnOutcome::TimedOut);
    };

    let matched = geometry::evaluate(click, feature)?;
    let points = policy.compute(matched.distance_meters, matched.is_correct);

    debug!(
        feature = %feature.name,
        is_correct = matched.is_correct,
        distance_m = matched.distance_meters,
        points,
        "Tour évalué"
    );

    Ok(TurnOutcome::Answered(EvaluationResult {
        is_correct: matched.is_correct,
        distance_meters: matched.distance_meters,
        points,
    }))
}
