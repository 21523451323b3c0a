//! # geoquiz
//!
//! Moteur d'évaluation des réponses d'un quiz de géographie : le joueur doit
//! cliquer sur la carte l'emplacement d'une rue ou d'un lieu.
//!
//! ## Features
//!
//! - Distance clic → rue (projection sur la polyligne, haversine)
//! - Appartenance clic → lieu (anneau fermé, bord inclus)
//! - Barèmes interchangeables (paliers ou décroissance linéaire)
//! - Décodage des réponses Overpass avec fusion des ways homonymes
//! - Tirage sans remise des features d'une partie
//!
//! ## Usage
//!
//! ```rust
//! use geoquiz::{evaluate_turn, Feature, Point, ScoringPolicy};
//!
//! let rue = Feature::street(
//!     "Rue Nationale",
//!     vec![Point::new(47.390, 0.680), Point::new(47.395, 0.690)],
//! );
//! let outcome = evaluate_turn(Some(Point::new(47.3925, 0.685)), &rue, &ScoringPolicy::Tiered)?;
//! assert!(outcome.is_correct());
//! assert_eq!(outcome.points(), 10);
//! # Ok::<(), geoquiz::QuizError>(())
//! ```

pub mod bounds;
pub mod error;
pub mod evaluator;
pub mod geometry;
pub mod sampling;
pub mod scoring;
pub mod source;
pub mod types;

pub use bounds::{center_of, reveal_position, BoundingBox};
pub use error::QuizError;
pub use evaluator::{evaluate_turn, EvaluationResult, TurnOutcome};
pub use geometry::{evaluate, GeometryMatch, STREET_TOLERANCE_METERS};
pub use sampling::sample_features;
pub use scoring::ScoringPolicy;
pub use source::{FeatureSource, OverpassFile};
pub use types::{Feature, FeatureKind, Point};
