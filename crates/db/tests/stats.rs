//! Integration tests for the reporting gateway.

use chrono::{TimeZone, Utc};
use gameportal_db::models::company::CreateCompany;
use gameportal_db::models::game::CreateGame;
use gameportal_db::models::genre::CreateGenre;
use gameportal_db::models::progress::CreateProgress;
use gameportal_db::models::user::CreateUser;
use gameportal_db::repositories::{
    CompanyRepo, GameRepo, GenreRepo, ProgressRepo, StatsRepo, UserRepo,
};
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "hash".to_string(),
            bio: None,
        },
    )
    .await
    .unwrap()
    .user_id
}

async fn seed_game(pool: &PgPool, title: &str) -> i64 {
    let company_id = match CompanyRepo::find_by_name(pool, "Stats Co").await.unwrap() {
        Some(c) => c.company_id,
        None => {
            CompanyRepo::create(
                pool,
                &CreateCompany {
                    name: "Stats Co".to_string(),
                    founded_year: None,
                    country: None,
                    website: None,
                },
            )
            .await
            .unwrap()
            .company_id
        }
    };
    GameRepo::create(
        pool,
        &CreateGame {
            title: title.to_string(),
            description: "d".to_string(),
            release_date: None,
            company_id,
        },
    )
    .await
    .unwrap()
    .game_id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_null_aggregates_for_empty_data(pool: PgPool) {
    let user_id = seed_user(&pool, "nobody").await;
    let game_id = seed_game(&pool, "Silent").await;

    assert_eq!(StatsRepo::game_rating(&pool, game_id).await.unwrap(), None);
    assert_eq!(StatsRepo::game_rating(&pool, 999_999).await.unwrap(), None);
    assert_eq!(StatsRepo::user_total_hours(&pool, user_id).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_top_players_limited_to_ten(pool: PgPool) {
    let game_id = seed_game(&pool, "Arena").await;
    let genre = GenreRepo::create(
        &pool,
        &CreateGenre {
            name: "Shooter".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    GenreRepo::attach_to_game(&pool, game_id, genre.genre_id)
        .await
        .unwrap();

    for i in 0..12 {
        let user_id = seed_user(&pool, &format!("p{i}")).await;
        ProgressRepo::create(
            &pool,
            user_id,
            &CreateProgress {
                game_id,
                status: "Playing".to_string(),
                hours_played: Some(i),
                last_played: None,
            },
        )
        .await
        .unwrap();
    }

    let top = StatsRepo::top_players_by_genre(&pool, "SHOOTER").await.unwrap();
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].username, "p11");
    assert_eq!(top[0].total_hours, 11);
    assert!(top.windows(2).all(|w| w[0].total_hours >= w[1].total_hours));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_activity_groups_by_day(pool: PgPool) {
    let user_id = seed_user(&pool, "active").await;
    let g1 = seed_game(&pool, "Morning").await;
    let g2 = seed_game(&pool, "Evening").await;
    let day = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

    for (game_id, hours) in [(g1, 3), (g2, 4)] {
        ProgressRepo::create(
            &pool,
            user_id,
            &CreateProgress {
                game_id,
                status: "Playing".to_string(),
                hours_played: Some(hours),
                last_played: Some(day),
            },
        )
        .await
        .unwrap();
    }

    let start = day.date_naive();
    let entries = StatsRepo::user_activity(&pool, start, start).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_id, user_id);
    assert_eq!(entries[0].activity_date, start);
    assert_eq!(entries[0].hours_played, 7);
    assert_eq!(entries[0].reviews_written, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_stats_view_includes_idle_users(pool: PgPool) {
    seed_user(&pool, "idle").await;

    let rows = StatsRepo::user_stats(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_games, 0);
    assert_eq!(rows[0].completed_games, 0);
    assert_eq!(rows[0].total_hours, 0);
}
