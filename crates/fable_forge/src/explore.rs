//! Featured story seeds.

use fable_core::{Genre, Tone};

/// A curated seed the `explore` command surfaces.
#[derive(Debug, Clone, Copy)]
pub struct FeaturedSeed {
    /// Display title
    pub title: &'static str,
    /// Genre the seed was written for
    pub genre: Genre,
    /// Tone that suits the seed
    pub tone: Tone,
    /// The prompt itself
    pub seed: &'static str,
}

const FEATURED: [FeaturedSeed; 3] = [
    FeaturedSeed {
        title: "The Obsidian Citadel",
        genre: Genre::HighFantasy,
        tone: Tone::Epic,
        seed: "A fortress carved from a single piece of dark glass, floating in a sea of stars \
               where the residents speak only in music.",
    },
    FeaturedSeed {
        title: "Neon Drifters",
        genre: Genre::Cyberpunk,
        tone: Tone::Dark,
        seed: "In a rain-slicked metropolis where memories are traded like currency, a detective \
               finds a file containing their own childhood, which shouldn't exist.",
    },
    FeaturedSeed {
        title: "The Last Lighthouse",
        genre: Genre::Fable,
        tone: Tone::Hopeful,
        seed: "At the edge of a dying universe, a lone guardian tends to a beacon that keeps the \
               last remaining world from drifting into the void.",
    },
];

/// The curated featured seeds, in display order.
pub fn featured_seeds() -> &'static [FeaturedSeed] {
    &FEATURED
}

/// The standing daily seed.
pub fn daily_seed() -> FeaturedSeed {
    FeaturedSeed {
        title: "Daily Spark",
        genre: Genre::Steampunk,
        tone: Tone::Whimsical,
        seed: "In a world where shadows have their own memories, a young clockmaker discovers a \
               gear that turns backward in time...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_seeds_are_three_distinct_genres() {
        let seeds = featured_seeds();
        assert_eq!(seeds.len(), 3);
        assert_ne!(seeds[0].genre, seeds[1].genre);
        assert_ne!(seeds[1].genre, seeds[2].genre);
    }

    #[test]
    fn daily_seed_has_a_prompt() {
        assert!(!daily_seed().seed.is_empty());
    }
}
