//! Export des résultats

pub mod geojson;
