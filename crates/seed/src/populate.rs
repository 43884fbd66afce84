//! Table population steps.
//!
//! Each step inserts with `ON CONFLICT DO NOTHING`, so a random value that
//! collides with an existing unique key is skipped and simply not counted.
//! Steps run inside one transaction per table.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, TimeDelta, Utc};
use gameportal_core::progress::{KNOWN_STATUSES, STATUS_PLANNED};
use gameportal_core::types::DbId;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use sqlx::PgPool;

use crate::config::SeedConfig;
use crate::fake;

/// Attempts between two progress log lines.
const PROGRESS_EVERY: u32 = 1000;

/// Probability that a seeded review is approved.
const APPROVAL_RATE: f64 = 0.9;

/// Maximum genres linked to one game.
const MAX_GENRES_PER_GAME: usize = 5;

/// Rows actually written per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub companies: u64,
    pub genres: u64,
    pub games: u64,
    pub genre_links: u64,
    pub progress: u64,
    pub reviews: u64,
}

/// Run every population step in dependency order.
pub async fn run(pool: &PgPool, config: &SeedConfig) -> Result<SeedSummary> {
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let today = Utc::now().date_naive();

    if config.clear {
        clear_tables(pool).await?;
    }

    let summary = SeedSummary {
        users: populate_users(pool, &mut rng, config.users).await?,
        companies: populate_companies(pool, &mut rng, config.companies, today).await?,
        genres: populate_genres(pool, &mut rng, config.genres).await?,
        games: populate_games(pool, &mut rng, config.games, today).await?,
        genre_links: populate_genre_links(pool, &mut rng).await?,
        progress: populate_progress(pool, &mut rng, config.progress).await?,
        reviews: populate_reviews(pool, &mut rng, config.reviews).await?,
    };

    tracing::info!(?summary, "Seeding finished");
    Ok(summary)
}

/// Empty every portal table and reset identity sequences.
pub async fn clear_tables(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "TRUNCATE reviews, user_game_progress, game_genres, games, genres, companies, users
         RESTART IDENTITY CASCADE",
    )
    .execute(pool)
    .await
    .context("failed to clear tables")?;
    tracing::info!("Cleared all tables");
    Ok(())
}

fn log_progress(table: &str, attempted: u32, inserted: u64) {
    if attempted % PROGRESS_EVERY == 0 {
        tracing::debug!(table, attempted, inserted, "Seeding in progress");
    }
}

// ---------------------------------------------------------------------------
// Independent tables
// ---------------------------------------------------------------------------

/// Insert up to `target` users, trying at most twice as many candidates.
pub async fn populate_users(pool: &PgPool, rng: &mut StdRng, target: u32) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for attempt in 1..=target.saturating_mul(2) {
        if inserted >= u64::from(target) {
            break;
        }
        let username = fake::username(rng);
        let email = fake::email(rng, &username);
        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, bio)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT DO NOTHING",
        )
        .bind(&username)
        .bind(&email)
        .bind(fake::password_hash(rng))
        .bind(fake::bio(rng))
        .execute(&mut *tx)
        .await
        .context("failed to insert user")?;
        inserted += result.rows_affected();
        log_progress("users", attempt, inserted);
    }

    tx.commit().await?;
    tracing::info!(table = "users", requested = target, inserted, "Seeded table");
    Ok(inserted)
}

/// Insert `target` company candidates; name collisions are skipped.
pub async fn populate_companies(
    pool: &PgPool,
    rng: &mut StdRng,
    target: u32,
    today: NaiveDate,
) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for attempt in 1..=target {
        let name = fake::company_name(rng);
        let result = sqlx::query(
            "INSERT INTO companies (name, founded_year, country, website)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(&name)
        .bind(fake::founded_year(rng, today.year()))
        .bind(fake::country(rng))
        .bind(fake::website(&name))
        .execute(&mut *tx)
        .await
        .context("failed to insert company")?;
        inserted += result.rows_affected();
        log_progress("companies", attempt, inserted);
    }

    tx.commit().await?;
    tracing::info!(table = "companies", requested = target, inserted, "Seeded table");
    Ok(inserted)
}

pub async fn populate_genres(pool: &PgPool, rng: &mut StdRng, target: u32) -> Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for name in fake::genre_names(rng, target as usize) {
        let description = fake::sentence(rng, 10);
        let result = sqlx::query(
            "INSERT INTO genres (name, description)
             VALUES ($1, $2)
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(&name)
        .bind(&description)
        .execute(&mut *tx)
        .await
        .context("failed to insert genre")?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    tracing::info!(table = "genres", requested = target, inserted, "Seeded table");
    Ok(inserted)
}

// ---------------------------------------------------------------------------
// Dependent tables
// ---------------------------------------------------------------------------

async fn all_ids(pool: &PgPool, query: &str) -> Result<Vec<DbId>> {
    sqlx::query_scalar::<_, DbId>(query)
        .fetch_all(pool)
        .await
        .with_context(|| format!("failed to load ids: {query}"))
}

/// Insert up to `target` games owned by random companies, trying at most
/// twice as many candidate titles.
pub async fn populate_games(
    pool: &PgPool,
    rng: &mut StdRng,
    target: u32,
    today: NaiveDate,
) -> Result<u64> {
    let companies = all_ids(pool, "SELECT company_id FROM companies ORDER BY company_id").await?;
    if companies.is_empty() {
        anyhow::bail!("no companies in the database; seed companies before games");
    }

    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for attempt in 1..=target.saturating_mul(2) {
        if inserted >= u64::from(target) {
            break;
        }
        let Some(&company_id) = companies.choose(rng) else {
            break;
        };
        let result = sqlx::query(
            "INSERT INTO games (title, description, release_date, company_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (title) DO NOTHING",
        )
        .bind(fake::game_title(rng))
        .bind(fake::game_description(rng))
        .bind(fake::release_date(rng, today))
        .bind(company_id)
        .execute(&mut *tx)
        .await
        .context("failed to insert game")?;
        inserted += result.rows_affected();
        log_progress("games", attempt, inserted);
    }

    tx.commit().await?;
    tracing::info!(table = "games", requested = target, inserted, "Seeded table");
    Ok(inserted)
}

/// Link every game to between one and five distinct genres.
pub async fn populate_genre_links(pool: &PgPool, rng: &mut StdRng) -> Result<u64> {
    let games = all_ids(pool, "SELECT game_id FROM games ORDER BY game_id").await?;
    let genres = all_ids(pool, "SELECT genre_id FROM genres ORDER BY genre_id").await?;
    if games.is_empty() || genres.is_empty() {
        tracing::warn!("No games or genres, skipping genre links");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for &game_id in &games {
        let count = rng.random_range(1..=MAX_GENRES_PER_GAME.min(genres.len()));
        let chosen: Vec<DbId> = genres.choose_multiple(rng, count).copied().collect();
        for genre_id in chosen {
            let result = sqlx::query(
                "INSERT INTO game_genres (game_id, genre_id)
                 VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(game_id)
            .bind(genre_id)
            .execute(&mut *tx)
            .await
            .context("failed to insert genre link")?;
            inserted += result.rows_affected();
        }
    }

    tx.commit().await?;
    tracing::info!(table = "game_genres", games = games.len(), inserted, "Seeded table");
    Ok(inserted)
}

/// Insert `target` progress candidates for random (user, game) pairs.
///
/// Anything but a planned game gets a `last_played` within the past year.
pub async fn populate_progress(pool: &PgPool, rng: &mut StdRng, target: u32) -> Result<u64> {
    let users = all_ids(pool, "SELECT user_id FROM users ORDER BY user_id").await?;
    let games = all_ids(pool, "SELECT game_id FROM games ORDER BY game_id").await?;
    if users.is_empty() || games.is_empty() {
        tracing::warn!("No users or games, skipping progress");
        return Ok(0);
    }

    let now = Utc::now();
    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for attempt in 1..=target {
        let (Some(&user_id), Some(&game_id), Some(&status)) = (
            users.choose(rng),
            games.choose(rng),
            KNOWN_STATUSES.choose(rng),
        ) else {
            break;
        };
        let hours: i32 = rng.random_range(0..=500);
        let last_played = (status != STATUS_PLANNED)
            .then(|| now - TimeDelta::minutes(rng.random_range(0..=525_600)));

        let result = sqlx::query(
            "INSERT INTO user_game_progress (user_id, game_id, status, hours_played, last_played)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (user_id, game_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(game_id)
        .bind(status)
        .bind(hours)
        .bind(last_played)
        .execute(&mut *tx)
        .await
        .context("failed to insert progress")?;
        inserted += result.rows_affected();
        log_progress("user_game_progress", attempt, inserted);
    }

    tx.commit().await?;
    tracing::info!(table = "user_game_progress", requested = target, inserted, "Seeded table");
    Ok(inserted)
}

/// Insert `target` review candidates; 90% are approved.
pub async fn populate_reviews(pool: &PgPool, rng: &mut StdRng, target: u32) -> Result<u64> {
    let users = all_ids(pool, "SELECT user_id FROM users ORDER BY user_id").await?;
    let games = all_ids(pool, "SELECT game_id FROM games ORDER BY game_id").await?;
    if users.is_empty() || games.is_empty() {
        tracing::warn!("No users or games, skipping reviews");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for attempt in 1..=target {
        let (Some(&user_id), Some(&game_id)) = (users.choose(rng), games.choose(rng)) else {
            break;
        };
        let rating: i32 = rng.random_range(1..=10);
        let approved = rng.random_bool(APPROVAL_RATE);

        let result = sqlx::query(
            "INSERT INTO reviews (user_id, game_id, rating, review_text, is_approved)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (user_id, game_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(game_id)
        .bind(rating)
        .bind(fake::paragraph(rng, 5))
        .bind(approved)
        .execute(&mut *tx)
        .await
        .context("failed to insert review")?;
        inserted += result.rows_affected();
        log_progress("reviews", attempt, inserted);
    }

    tx.commit().await?;
    tracing::info!(table = "reviews", requested = target, inserted, "Seeded table");
    Ok(inserted)
}
