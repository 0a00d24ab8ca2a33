//! Flavor text shown next to a verdict. Picked at random, keyed only by
//! whether the verdict was favorable.

use rand::{Rng, seq::SliceRandom};

const FAVORABLE: &[&str] = &[
    "The grass misses you.",
    "Your screen will still be here when you get back.",
    "Vitamin D is free today.",
    "Go outside. The graphics are incredible.",
    "Touch grass now, refactor later.",
];

const UNFAVORABLE: &[&str] = &[
    "The grass will wait.",
    "Indoor plants count, probably.",
    "Perfect excuse to finish that side project.",
    "Stay in, the grass isn't going anywhere.",
    "Today the grass touches itself.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commentary {
    favorable: Vec<String>,
    unfavorable: Vec<String>,
}

impl Default for Commentary {
    fn default() -> Self {
        Self {
            favorable: FAVORABLE.iter().map(|s| s.to_string()).collect(),
            unfavorable: UNFAVORABLE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Commentary {
    pub fn pick<R: Rng + ?Sized>(&self, favorable: bool, rng: &mut R) -> &str {
        let pool = if favorable { &self.favorable } else { &self.unfavorable };
        // Both pools are non-empty by construction.
        pool.choose(rng).map(String::as_str).unwrap_or_default()
    }
}
