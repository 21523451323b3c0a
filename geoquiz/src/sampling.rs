//! Tirage des features d'une partie

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Feature;

/// Tire `count` indices distincts parmi `0..len`.
///
/// Retourne `min(count, len)` indices, dans l'ordre du tirage.
pub fn sample_indices<R: Rng + ?Sized>(len: usize, count: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let (chosen, _) = indices.partial_shuffle(rng, count.min(len));
    chosen.to_vec()
}

/// File des tours : tirage uniforme sans remise
pub fn sample_features<R: Rng + ?Sized>(
    features: &[Feature],
    count: usize,
    rng: &mut R,
) -> Vec<Feature> {
    sample_indices(features.len(), count, rng)
        .into_iter()
        .map(|i| features[i].clone())
        .collect()
}
