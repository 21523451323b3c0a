//! # geoquiz-cli
//!
//! Quiz de géographie en ligne de commande : évaluation des clics sur les
//! rues et lieux d'une commune, à partir d'une réponse Overpass enregistrée.
//!
//! ## Usage CLI
//!
//! ```bash
//! # Un tour : clic sur la carte
//! geoquiz evaluate --data tours.json --feature "Rue Nationale" --lat 47.3925 --lon 0.685
//!
//! # Un tour sans clic (temps écoulé)
//! geoquiz evaluate --data tours.json --feature "Rue Nationale"
//!
//! # Une partie complète, barème linéaire
//! geoquiz --config linear batch --data tours.json --clicks clicks.json
//! ```

pub mod config;
pub mod export;
pub mod report;

pub use config::Config;
pub use report::{GameReport, TurnReport};
