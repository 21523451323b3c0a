//! Rapport de partie : résultats par tour et score cumulé

use std::path::Path;

use anyhow::{Context, Result};
use geoquiz::{reveal_position, Feature, FeatureKind, Point, QuizError, TurnOutcome};
use serde::Serialize;

/// Résultat d'un tour, prêt à afficher
#[derive(Debug, Clone, Serialize)]
pub struct TurnReport {
    /// Nom de la feature cherchée
    pub feature: String,
    pub kind: FeatureKind,
    pub outcome: TurnOutcome,
    /// Position du marqueur de bonne réponse
    pub reveal: Option<Point>,
    /// Message affiché au joueur
    pub message: String,
}

impl TurnReport {
    pub fn new(feature: &Feature, outcome: TurnOutcome) -> Self {
        Self {
            feature: feature.display_name(),
            kind: feature.kind,
            outcome,
            reveal: reveal_position(feature),
            message: turn_message(&outcome),
        }
    }
}

/// Message de fin de tour
pub fn turn_message(outcome: &TurnOutcome) -> String {
    match outcome {
        TurnOutcome::TimedOut => "Temps écoulé!".to_string(),
        TurnOutcome::Answered(r) if r.is_correct => "Correct! Bien joué!".to_string(),
        TurnOutcome::Answered(r) => format!(
            "Incorrect! La rue ou lieu se trouve à environ {} mètres d'ici.",
            r.distance_meters.round()
        ),
    }
}

/// Tour non noté (géométrie invalide)
#[derive(Debug, Clone, Serialize)]
pub struct SkippedTurn {
    pub feature: String,
    pub message: String,
}

/// Rapport complet d'une partie
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameReport {
    /// Score cumulé
    pub score: u32,
    /// Score maximal atteignable sur les tours notés
    pub max_score: u32,
    pub correct: usize,
    pub wrong: usize,
    pub timed_out: usize,
    pub turns: Vec<TurnReport>,
    pub skipped: Vec<SkippedTurn>,
}

impl GameReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre un tour noté
    pub fn record(&mut self, turn: TurnReport, max_points: u32) {
        self.score += turn.outcome.points();
        self.max_score += max_points;
        match turn.outcome {
            TurnOutcome::TimedOut => self.timed_out += 1,
            TurnOutcome::Answered(r) if r.is_correct => self.correct += 1,
            TurnOutcome::Answered(_) => self.wrong += 1,
        }
        self.turns.push(turn);
    }

    /// Enregistre un tour signalé sans être noté
    pub fn record_skipped(&mut self, feature: &Feature, error: &QuizError) {
        self.skipped.push(SkippedTurn {
            feature: feature.display_name(),
            message: error.to_string(),
        });
    }

    /// Nombre de tours joués (notés ou non)
    pub fn turns_played(&self) -> usize {
        self.turns.len() + self.skipped.len()
    }

    /// Message final
    pub fn summary(&self) -> String {
        format!("Votre score final est de {} points", self.score)
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("PARTIE - {} tours", self.turns_played());
        println!("{}", "=".repeat(60));

        for turn in &self.turns {
            println!(
                "  {} [{:?}] +{} : {}",
                turn.feature,
                turn.kind,
                turn.outcome.points(),
                turn.message
            );
        }

        if !self.skipped.is_empty() {
            println!("\n--- NON NOTÉS ({}) ---", self.skipped.len());
            for s in &self.skipped {
                println!("  {}: {}", s.feature, s.message);
            }
        }

        println!(
            "\n{} correct, {} incorrect, {} temps écoulé",
            self.correct, self.wrong, self.timed_out
        );
        println!("{} / {}", self.score, self.max_score);
        println!("{}", self.summary());
        println!("{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .context(format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoquiz::EvaluationResult;

    fn rue() -> Feature {
        Feature::street(
            "Rue Colbert",
            vec![Point::new(47.395, 0.688), Point::new(47.396, 0.690)],
        )
    }

    fn answered(is_correct: bool, distance_meters: f64, points: u32) -> TurnOutcome {
        TurnOutcome::Answered(EvaluationResult {
            is_correct,
            distance_meters,
            points,
        })
    }

    #[test]
    fn test_turn_messages() {
        assert_eq!(turn_message(&TurnOutcome::TimedOut), "Temps écoulé!");
        assert_eq!(
            turn_message(&answered(true, 0.0, 10)),
            "Correct! Bien joué!"
        );
        assert_eq!(
            turn_message(&answered(false, 123.4, 3)),
            "Incorrect! La rue ou lieu se trouve à environ 123 mètres d'ici."
        );
    }

    #[test]
    fn test_record_tally() {
        let mut report = GameReport::new();
        report.record(TurnReport::new(&rue(), answered(true, 0.0, 10)), 10);
        report.record(TurnReport::new(&rue(), answered(false, 80.0, 5)), 10);
        report.record(TurnReport::new(&rue(), TurnOutcome::TimedOut), 10);

        assert_eq!(report.score, 15);
        assert_eq!(report.max_score, 30);
        assert_eq!(report.correct, 1);
        assert_eq!(report.wrong, 1);
        assert_eq!(report.timed_out, 1);
        assert_eq!(report.summary(), "Votre score final est de 15 points");
    }

    #[test]
    fn test_record_skipped() {
        let mut report = GameReport::new();
        let feature = Feature::street("Impasse", vec![]);
        report.record_skipped(&feature, &QuizError::invalid_geometry("Impasse", "empty path"));

        assert_eq!(report.score, 0);
        assert_eq!(report.turns_played(), 1);
        assert!(report.skipped[0].message.contains("empty path"));
    }

    #[test]
    fn test_turn_report_reveal() {
        let turn = TurnReport::new(&rue(), TurnOutcome::TimedOut);
        assert_eq!(turn.reveal, Some(Point::new(47.396, 0.690)));
        let json = serde_json::to_string(&turn).unwrap();
        assert!(json.contains(r#""outcome":"timed_out""#));
    }
}
