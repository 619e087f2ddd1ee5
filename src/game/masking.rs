use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::RngCore;

pub const PLACEHOLDER: char = '_';

/// Display form of the secret: a correct-position letter from the guess is
/// shown even outside the revealed set, then revealed positions, then the
/// placeholder. Output length always equals the secret's length.
pub fn mask(secret: &str, guess: &str, revealed_positions: &HashSet<usize>) -> String {
    let guess_chars: Vec<char> = guess.chars().collect();
    secret
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if guess_chars.get(i) == Some(&ch) {
                ch
            } else if revealed_positions.contains(&i) {
                ch
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

/// Uniform pick among the not-yet-revealed positions; `None` when every
/// position is already revealed.
pub fn pick_unrevealed(
    secret: &str,
    revealed_positions: &HashSet<usize>,
    rng: &mut dyn RngCore,
) -> Option<usize> {
    let candidates: Vec<usize> = (0..secret.chars().count())
        .filter(|i| !revealed_positions.contains(i))
        .collect();
    candidates.choose(rng).copied()
}
