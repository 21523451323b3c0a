//! Types d'erreurs pour le crate geoquiz

use thiserror::Error;

/// Erreurs pouvant survenir lors de l'évaluation ou du chargement des features
#[derive(Debug, Error)]
pub enum QuizError {
    /// Géométrie vide ou inutilisable pour l'évaluation d'un tour
    #[error("Invalid geometry for {feature}: {reason}")]
    InvalidGeometry { feature: String, reason: String },

    /// Clic hors du domaine des coordonnées (NaN ou infini)
    #[error("Invalid click coordinates: ({lat}, {lon})")]
    InvalidClick { lat: f64, lon: f64 },

    /// Données géographiques mal formées (réponse Overpass inattendue)
    #[error("Invalid geodata: {reason}")]
    InvalidData { reason: String },

    /// Erreur de décodage JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Erreur d'I/O lors de la lecture d'une source de features
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Crée une erreur de géométrie invalide
    pub fn invalid_geometry(feature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            feature: feature.into(),
            reason: reason.into(),
        }
    }

    /// Crée une erreur de données invalides
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }
}
