//! Définition et implémentation des commandes CLI
//!
//! - `evaluate`: un tour (clic ou temps écoulé) → rapport JSON
//! - `batch`: une liste de clics évalués en parallèle → rapport de partie
//! - `sample`: tirage de la file des tours
//! - `center`: centre de carte des features
//! - `reveal`: export GeoJSON de la bonne réponse

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use rand::{rngs::StdRng, SeedableRng as _};
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{info, warn};

use geoquiz::{center_of, evaluate_turn, sample_features, Feature, OverpassFile, Point};
use geoquiz_cli::export::geojson::export_reveal;
use geoquiz_cli::report::{GameReport, TurnReport};
use geoquiz_cli::Config;

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one turn (omit --lat/--lon for a timeout)
    Evaluate {
        /// Overpass JSON response (`out geom`)
        #[arg(short, long)]
        data: PathBuf,

        /// Name of the street or landmark to find
        #[arg(short, long)]
        feature: String,

        /// City name, to pick between homonymous features
        #[arg(long)]
        city: Option<String>,

        /// Click latitude (degrees)
        #[arg(
            long,
            requires = "lon",
            allow_hyphen_values = true,
            value_parser = parse_coordinate
        )]
        lat: Option<f64>,

        /// Click longitude (degrees)
        #[arg(
            long,
            requires = "lat",
            allow_hyphen_values = true,
            value_parser = parse_coordinate
        )]
        lon: Option<f64>,
    },

    /// Evaluate a list of clicks in parallel and print the game report
    Batch {
        /// Overpass JSON response (`out geom`)
        #[arg(short, long)]
        data: PathBuf,

        /// JSON list of {"feature", "city"?, "click"?: {"lat", "lon"}}
        #[arg(short, long)]
        clicks: PathBuf,

        /// Also write the report to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw the turn queue (random features without replacement)
    Sample {
        /// Overpass JSON response (`out geom`)
        #[arg(short, long)]
        data: PathBuf,

        /// Number of turns (défaut : max_turns de la configuration)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the map center of all features
    Center {
        /// Overpass JSON response (`out geom`)
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Export the target, the reveal marker and the click as GeoJSON
    Reveal {
        /// Overpass JSON response (`out geom`)
        #[arg(short, long)]
        data: PathBuf,

        /// Name of the street or landmark
        #[arg(short, long)]
        feature: String,

        /// City name, to pick between homonymous features
        #[arg(long)]
        city: Option<String>,

        /// Output GeoJSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Click latitude (degrees)
        #[arg(
            long,
            requires = "lon",
            allow_hyphen_values = true,
            value_parser = parse_coordinate
        )]
        lat: Option<f64>,

        /// Click longitude (degrees)
        #[arg(
            long,
            requires = "lat",
            allow_hyphen_values = true,
            value_parser = parse_coordinate
        )]
        lon: Option<f64>,
    },
}

/// Une ligne du fichier de clics de `batch`
#[derive(Debug, Deserialize)]
pub struct ClickEntry {
    pub feature: String,
    #[serde(default)]
    pub city: Option<String>,
    /// Absent = temps écoulé
    #[serde(default)]
    pub click: Option<Point>,
}

/// Exécute la commande evaluate
pub fn cmd_evaluate(
    config: &Config,
    data: &Path,
    name: &str,
    city: Option<&str>,
    click: Option<Point>,
) -> Result<()> {
    let features = load_features(data)?;
    let feature = find_feature(&features, name, city)?;

    let outcome = evaluate_turn(click, feature, &config.scoring)
        .context(format!("Tour non noté pour {}", feature.display_name()))?;
    let turn = TurnReport::new(feature, outcome);

    println!("{}", serde_json::to_string_pretty(&turn)?);
    Ok(())
}

/// Exécute la commande batch
pub fn cmd_batch(
    config: &Config,
    data: &Path,
    clicks_path: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let features = load_features(data)?;
    let entries = load_clicks(clicks_path)?;

    if entries.len() > config.max_turns {
        warn!(
            clicks = entries.len(),
            max_turns = config.max_turns,
            "Plus de clics que de tours configurés"
        );
    }

    let report = run_batch(config, &features, &entries)?;
    report.display();

    if let Some(path) = output {
        report.save_to_file(path)?;
        info!(path = %path.display(), "Rapport sauvegardé");
    }
    Ok(())
}

/// Évalue les clics en parallèle puis cumule les résultats dans l'ordre du fichier
pub fn run_batch(config: &Config, features: &[Feature], entries: &[ClickEntry]) -> Result<GameReport> {
    let targets: Vec<&Feature> = entries
        .iter()
        .map(|e| find_feature(features, &e.feature, e.city.as_deref()))
        .collect::<Result<_>>()?;

    let outcomes: Vec<_> = entries
        .par_iter()
        .zip(targets.par_iter())
        .map(|(entry, feature)| evaluate_turn(entry.click, feature, &config.scoring))
        .collect();

    let mut report = GameReport::new();
    for (feature, outcome) in targets.iter().zip(outcomes) {
        match outcome {
            Ok(outcome) => report.record(
                TurnReport::new(feature, outcome),
                config.scoring.max_points(),
            ),
            Err(e) => {
                warn!(feature = %feature.name, error = %e, "Tour non noté");
                report.record_skipped(feature, &e);
            }
        }
    }
    Ok(report)
}

/// Exécute la commande sample
pub fn cmd_sample(config: &Config, data: &Path, count: Option<usize>, seed: Option<u64>) -> Result<()> {
    let features = load_features(data)?;
    let count = count.unwrap_or(config.max_turns);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let queue = sample_features(&features, count, &mut rng);
    if queue.len() < count {
        warn!(
            requested = count,
            available = features.len(),
            "Pas assez de features pour le nombre de tours demandé"
        );
    }

    println!("{} tours, {} s par tour", queue.len(), config.max_time_secs);
    for (i, feature) in queue.iter().enumerate() {
        println!("{}. {} [{:?}]", i + 1, feature.display_name(), feature.kind);
    }
    Ok(())
}

/// Exécute la commande center
pub fn cmd_center(data: &Path) -> Result<()> {
    let features = load_features(data)?;
    match center_of(&features) {
        Some(center) => println!("{}", serde_json::to_string(&center)?),
        None => bail!("Aucune feature dans {}", data.display()),
    }
    Ok(())
}

/// Exécute la commande reveal
pub fn cmd_reveal(
    data: &Path,
    name: &str,
    city: Option<&str>,
    output: &Path,
    click: Option<Point>,
) -> Result<()> {
    let features = load_features(data)?;
    let feature = find_feature(&features, name, city)?;
    export_reveal(feature, click, output)?;
    info!(feature = %feature.display_name(), output = %output.display(), "GeoJSON exporté");
    Ok(())
}

fn load_features(data: &Path) -> Result<Vec<Feature>> {
    OverpassFile::load_file(data).context(format!("Failed to load features: {}", data.display()))
}

fn load_clicks(path: &Path) -> Result<Vec<ClickEntry>> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read clicks file: {}", path.display()))?;
    serde_json::from_str(&content).context("Failed to parse clicks JSON")
}

/// Lit une coordonnée en degrés, en refusant NaN et les infinis
fn parse_coordinate(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{s}: {e}"))?;
    if !value.is_finite() {
        return Err(format!("{s}: coordonnée non finie"));
    }
    Ok(value)
}

/// Retrouve une feature par nom, la commune départageant les homonymes
pub fn find_feature<'a>(features: &'a [Feature], name: &str, city: Option<&str>) -> Result<&'a Feature> {
    let candidates: Vec<&Feature> = features
        .iter()
        .filter(|f| f.name == name)
        .filter(|f| city.is_none() || f.city_name.as_deref() == city)
        .collect();

    match candidates.as_slice() {
        [] => bail!("Feature introuvable: {}", name),
        [feature] => Ok(*feature),
        many => {
            let cities: Vec<&str> = many
                .iter()
                .map(|f| f.city_name.as_deref().unwrap_or("?"))
                .collect();
            bail!(
                "Feature ambiguë: {} ({}), préciser --city",
                name,
                cities.join(", ")
            )
        }
    }
}
