//! Conversion distance → points

use serde::{Deserialize, Serialize};

/// Points d'une bonne réponse avec le barème par paliers
pub const TIERED_MAX_POINTS: u32 = 10;

/// Paliers (distance max en mètres, points) du barème par paliers
const TIERS: [(f64, u32); 4] = [(50.0, 8), (100.0, 5), (150.0, 3), (200.0, 1)];

/// Barème choisi à la configuration de la partie
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// 10 si correct, puis 8/5/3/1/0 par tranches de 50 m
    #[default]
    Tiered,

    /// `max_points` si correct, sinon décroissance linéaire jusqu'à 0 à `cutoff_meters`
    LinearDecay {
        #[serde(default = "default_max_points")]
        max_points: u32,
        #[serde(default = "default_cutoff")]
        cutoff_meters: f64,
    },
}

fn default_max_points() -> u32 {
    100
}

fn default_cutoff() -> f64 {
    750.0
}

impl ScoringPolicy {
    /// Décroissance linéaire avec les constantes du jeu (100 points, 750 m)
    pub fn linear_decay() -> Self {
        Self::LinearDecay {
            max_points: default_max_points(),
            cutoff_meters: default_cutoff(),
        }
    }

    /// Score d'une bonne réponse
    pub fn max_points(&self) -> u32 {
        match self {
            Self::Tiered => TIERED_MAX_POINTS,
            Self::LinearDecay { max_points, .. } => *max_points,
        }
    }

    /// Points pour une réponse.
    ///
    /// Une réponse correcte vaut toujours le maximum, quelle que soit la distance.
    pub fn compute(&self, distance_meters: f64, is_correct: bool) -> u32 {
        if is_correct {
            return self.max_points();
        }

        match *self {
            Self::Tiered => TIERS
                .iter()
                .find(|(max_distance, _)| distance_meters <= *max_distance)
                .map(|&(_, points)| points)
                .unwrap_or(0),
            Self::LinearDecay {
                max_points,
                cutoff_meters,
            } => {
                // NaN et cutoff nul tombent aussi dans ce cas
                if !(distance_meters <= cutoff_meters) || cutoff_meters <= 0.0 {
                    return 0;
                }
                let ratio = 1.0 - distance_meters.max(0.0) / cutoff_meters;
                (f64::from(max_points) * ratio).round() as u32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiered() {
        let policy = ScoringPolicy::Tiered;
        assert_eq!(policy.compute(0.0, true), 10);
        assert_eq!(policy.compute(30.0, false), 8);
        assert_eq!(policy.compute(50.0, false), 8);
        assert_eq!(policy.compute(60.0, false), 5);
        assert_eq!(policy.compute(100.0, false), 5);
        assert_eq!(policy.compute(120.0, false), 3);
        assert_eq!(policy.compute(200.0, false), 1);
        assert_eq!(policy.compute(200.1, false), 0);
        assert_eq!(policy.compute(1000.0, false), 0);
    }

    #[test]
    fn test_linear_decay() {
        let policy = ScoringPolicy::linear_decay();
        assert_eq!(policy.compute(0.0, true), 100);
        assert_eq!(policy.compute(0.0, false), 100);
        assert_eq!(policy.compute(375.0, false), 50);
        assert_eq!(policy.compute(750.0, false), 0);
        assert_eq!(policy.compute(900.0, false), 0);
    }

    #[test]
    fn test_correct_ignores_distance() {
        assert_eq!(ScoringPolicy::Tiered.compute(5000.0, true), 10);
        assert_eq!(ScoringPolicy::linear_decay().compute(5000.0, true), 100);
    }

    #[test]
    fn test_linear_decay_monotonic() {
        let policy = ScoringPolicy::linear_decay();
        let mut previous = u32::MAX;
        for step in 0..=100 {
            let points = policy.compute(f64::from(step) * 10.0, false);
            assert!(points <= previous, "step={}", step);
            previous = points;
        }
    }

    #[test]
    fn test_nan_distance_scores_zero() {
        assert_eq!(ScoringPolicy::Tiered.compute(f64::NAN, false), 0);
        assert_eq!(ScoringPolicy::linear_decay().compute(f64::NAN, false), 0);
    }

    #[test]
    fn test_policy_from_json() {
        let tiered: ScoringPolicy = serde_json::from_str(r#"{"kind":"tiered"}"#).unwrap();
        assert_eq!(tiered, ScoringPolicy::Tiered);

        let linear: ScoringPolicy = serde_json::from_str(r#"{"kind":"linear_decay"}"#).unwrap();
        assert_eq!(linear, ScoringPolicy::linear_decay());

        let custom: ScoringPolicy =
            serde_json::from_str(r#"{"kind":"linear_decay","max_points":20,"cutoff_meters":400}"#)
                .unwrap();
        assert_eq!(custom.max_points(), 20);
        assert_eq!(custom.compute(200.0, false), 10);
    }
}
