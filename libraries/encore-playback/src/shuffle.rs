//! Shuffle algorithm for queue randomization
//!
//! Uniform Fisher-Yates permutation, O(n), via `rand`'s `SliceRandom`.

use encore_core::Track;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Shuffle tracks in place using the thread-local RNG
///
/// Each track has equal probability of appearing at any position.
pub fn shuffle_tracks(tracks: &mut [Track]) {
    let mut rng = thread_rng();
    shuffle_tracks_with(tracks, &mut rng);
}

/// Shuffle tracks in place with a caller-supplied RNG
pub fn shuffle_tracks_with<R: Rng + ?Sized>(tracks: &mut [Track], rng: &mut R) {
    tracks.shuffle(rng);
}
