//! Point d'entrée CLI pour geoquiz

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

use geoquiz::Point;
use geoquiz_cli::Config;

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;

/// Quiz de géographie : trouver une rue ou un lieu sur la carte
#[derive(Parser)]
#[command(name = "geoquiz")]
#[command(author, version)]
#[command(about = "Évaluer les réponses d'un quiz de géographie (rues et lieux)")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Preset (classic/linear) ou chemin d'une configuration JSON (défaut : env GEOQUIZ_CONFIG / classic)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    let config = Config::resolve(cli.config.as_deref())?;
    debug!(?config, "Configuration chargée");

    match cli.command {
        Commands::Evaluate {
            data,
            feature,
            city,
            lat,
            lon,
        } => {
            cli::cmd_evaluate(&config, &data, &feature, city.as_deref(), click(lat, lon))?;
        }
        Commands::Batch {
            data,
            clicks,
            output,
        } => {
            cli::cmd_batch(&config, &data, &clicks, output.as_deref())?;
        }
        Commands::Sample { data, count, seed } => {
            cli::cmd_sample(&config, &data, count, seed)?;
        }
        Commands::Center { data } => {
            cli::cmd_center(&data)?;
        }
        Commands::Reveal {
            data,
            feature,
            city,
            output,
            lat,
            lon,
        } => {
            cli::cmd_reveal(&data, &feature, city.as_deref(), &output, click(lat, lon))?;
        }
    }

    Ok(())
}

/// Pas de coordonnées = temps écoulé
fn click(lat: Option<f64>, lon: Option<f64>) -> Option<Point> {
    Some(Point::new(lat?, lon?))
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
