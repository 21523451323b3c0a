//! Fourniture des features d'une partie

pub mod overpass;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::types::Feature;
use crate::QuizError;

/// Fournisseur de features pour une zone (commune, quartier...)
pub trait FeatureSource {
    /// Charge toutes les features de la zone, déjà fusionnées par nom
    fn load_features(&self, area: &str) -> Result<Vec<Feature>, QuizError>;
}

/// Fusionne les features de même identité (nom + commune).
///
/// Les chemins sont concaténés dans l'ordre d'arrivée ; la feature fusionnée
/// garde la nature de sa première occurrence et la position de celle-ci dans
/// le résultat.
pub fn merge_by_name(features: impl IntoIterator<Item = Feature>) -> Vec<Feature> {
    let mut merged: Vec<Feature> = Vec::new();
    let mut index = HashMap::new();

    for feature in features {
        match index.get(&feature.key()) {
            Some(&i) => {
                let existing: &mut Feature = &mut merged[i];
                existing.path.extend(feature.path);
            }
            None => {
                index.insert(feature.key(), merged.len());
                merged.push(feature);
            }
        }
    }

    merged
}

/// Réponses Overpass enregistrées sur disque : `<dir>/<zone>.json`
#[derive(Debug, Clone)]
pub struct OverpassFile {
    dir: PathBuf,
}

impl OverpassFile {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Chemin du fichier d'une zone
    pub fn path_for(&self, area: &str) -> Result<PathBuf, QuizError> {
        let is_plain_name = !area.is_empty()
            && Path::new(area).file_name().and_then(|n| n.to_str()) == Some(area)
            && area != "..";
        if !is_plain_name {
            return Err(QuizError::invalid_data(format!("invalid area name: {area:?}")));
        }
        Ok(self.dir.join(format!("{area}.json")))
    }

    /// Charge directement un fichier Overpass
    pub fn load_file(path: &Path) -> Result<Vec<Feature>, QuizError> {
        let json = std::fs::read_to_string(path)?;
        let features = overpass::parse(&json)?;
        info!(path = %path.display(), features = features.len(), "Features chargées");
        Ok(features)
    }
}

impl FeatureSource for OverpassFile {
    fn load_features(&self, area: &str) -> Result<Vec<Feature>, QuizError> {
        Self::load_file(&self.path_for(area)?)
    }
}
