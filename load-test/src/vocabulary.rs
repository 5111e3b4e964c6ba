//! Fixed sample values the simulated users draw from.

use rand::{seq::SliceRandom, Rng};

pub const LANGUAGES: &[&str] = &[
    "typescript",
    "javascript",
    "rust",
    "python",
    "html",
    "css",
    "go",
    "java",
];

pub const PROJECTS: &[&str] = &[
    "DevMeter",
    "Locust-Stress-Test",
    "Personal-Blog",
    "Backend-API",
    "Frontend-UI",
];

pub const FILES: &[&str] = &[
    "index.ts",
    "utils.py",
    "main.rs",
    "App.tsx",
    "styles.css",
    "schema.prisma",
];

/// ranges accepted by the leaderboard endpoint
pub const LEADERBOARD_RANGES: &[&str] = &["7d", "30d", "all"];

/// Draws one entry of `set` uniformly at random.
///
/// # Panics
/// If `set` is empty. Every set of this module has at least one entry.
pub fn choose<'a, R: Rng + ?Sized>(rng: &mut R, set: &'a [&'a str]) -> &'a str {
    *set.choose(rng).expect("vocabulary sets are never empty")
}
