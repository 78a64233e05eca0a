//! Scrambled word puzzles.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// An answer and a shuffled rendering of its letters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPuzzle {
    /// Uppercase answer.
    pub answer: String,
    /// Same letters, shuffled. May coincide with `answer`.
    pub scrambled: String,
}

impl WordPuzzle {
    /// Shuffle the letters of `answer`.
    ///
    /// The shuffle is a uniform permutation and is not re-rolled when it
    /// happens to reproduce the answer.
    pub fn scramble(answer: &str, rng: &mut GameRng) -> Self {
        let mut letters: Vec<char> = answer.chars().collect();
        rng.shuffle(&mut letters);
        Self {
            answer: answer.to_string(),
            scrambled: letters.into_iter().collect(),
        }
    }

    /// Points for solving: half the length rounded up, at least one.
    #[must_use]
    pub fn points(&self) -> u32 {
        let len = self.answer.chars().count() as u32;
        len.div_ceil(2).max(1)
    }

    /// Case-insensitive check of a guess.
    #[must_use]
    pub fn is_solved_by(&self, guess: &str) -> bool {
        guess.to_uppercase() == self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_scramble_is_permutation() {
        let mut rng = GameRng::new(9);
        for word in ["CHALLENGE", "FUN", "PUZZLE"] {
            let puzzle = WordPuzzle::scramble(word, &mut rng);
            assert_eq!(puzzle.answer, word);
            assert_eq!(sorted(&puzzle.scrambled), sorted(word));
        }
    }

    #[test]
    fn test_points() {
        let points = |w: &str| WordPuzzle { answer: w.into(), scrambled: w.into() }.points();
        assert_eq!(points("GAME"), 2);
        assert_eq!(points("CODING"), 3);
        assert_eq!(points("CHALLENGE"), 5);
        assert_eq!(points("FUN"), 2);
        assert_eq!(points("A"), 1);
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let puzzle = WordPuzzle { answer: "MATCH".into(), scrambled: "TCHAM".into() };
        assert!(puzzle.is_solved_by("match"));
        assert!(puzzle.is_solved_by("MaTcH"));
        assert!(!puzzle.is_solved_by("TCHAM"));
        assert!(!puzzle.is_solved_by(" match"));
    }
}
