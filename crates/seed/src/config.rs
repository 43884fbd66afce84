use std::str::FromStr;

use anyhow::{Context, Result};

/// Row targets and switches for one seeding run, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub users: u32,
    pub companies: u32,
    pub genres: u32,
    pub games: u32,
    pub progress: u32,
    pub reviews: u32,
    /// Truncate every table before inserting.
    pub clear: bool,
    /// Fixed RNG seed. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 1000,
            companies: 800,
            genres: 35,
            games: 8000,
            progress: 10_000,
            reviews: 8000,
            clear: true,
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default |
    /// |------------------|---------|
    /// | `SEED_USERS`     | `1000`  |
    /// | `SEED_COMPANIES` | `800`   |
    /// | `SEED_GENRES`    | `35`    |
    /// | `SEED_GAMES`     | `8000`  |
    /// | `SEED_PROGRESS`  | `10000` |
    /// | `SEED_REVIEWS`   | `8000`  |
    /// | `SEED_CLEAR`     | `true`  |
    /// | `SEED_RNG`       | unset   |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            users: parse_or(&lookup, "SEED_USERS", defaults.users)?,
            companies: parse_or(&lookup, "SEED_COMPANIES", defaults.companies)?,
            genres: parse_or(&lookup, "SEED_GENRES", defaults.genres)?,
            games: parse_or(&lookup, "SEED_GAMES", defaults.games)?,
            progress: parse_or(&lookup, "SEED_PROGRESS", defaults.progress)?,
            reviews: parse_or(&lookup, "SEED_REVIEWS", defaults.reviews)?,
            clear: parse_or(&lookup, "SEED_CLEAR", defaults.clear)?,
            rng_seed: lookup("SEED_RNG")
                .map(|raw| raw.trim().parse::<u64>())
                .transpose()
                .context("SEED_RNG must be a valid u64")?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
