//! Configuration d'une partie

use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::{Context, Result};
use geoquiz::ScoringPolicy;

/// Variable d'environnement lue quand `--config` n'est pas fourni
pub const CONFIG_ENV: &str = "GEOQUIZ_CONFIG";

/// Preset utilisé par défaut
pub const DEFAULT_PRESET: &str = "classic";

/// Configuration principale
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Nombre de tours d'une partie
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,

    /// Temps de réponse par tour, en secondes.
    ///
    /// Le décompte appartient à l'interface de jeu : le moteur ne reçoit
    /// qu'un clic absent à l'expiration. `sample` l'affiche avec la file.
    #[serde(default = "default_max_time")]
    pub max_time_secs: u64,

    /// Barème
    #[serde(default)]
    pub scoring: ScoringPolicy,
}

fn default_max_turns() -> usize {
    3
}

fn default_max_time() -> u64 {
    45
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
            max_time_secs: default_max_time(),
            scoring: ScoringPolicy::default(),
        }
    }
}

impl Config {
    /// Charge une configuration depuis un fichier
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Charge une configuration depuis un preset embarqué
    pub fn from_preset(preset: &str) -> Result<Self> {
        match preset {
            "classic" => Self::load_embedded(include_str!("presets/classic.json")),
            "linear" => Self::load_embedded(include_str!("presets/linear.json")),
            _ => anyhow::bail!("Unknown preset: {}. Use: classic, linear", preset),
        }
    }

    fn load_embedded(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded config")
    }

    /// Résout un nom de preset ou un chemin de fichier.
    ///
    /// Sans argument, on lit `GEOQUIZ_CONFIG`, puis le preset `classic`.
    pub fn resolve(spec: Option<&str>) -> Result<Self> {
        let spec = match spec {
            Some(spec) => spec.to_string(),
            None => std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_PRESET.to_string()),
        };
        match spec.as_str() {
            "classic" | "linear" => Self::from_preset(&spec),
            _ => Self::load(Path::new(&spec)),
        }
    }
}
