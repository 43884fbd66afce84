//! Repository for the `companies` table.

use gameportal_core::patch;
use gameportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{Company, CreateCompany, UpdateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "company_id, name, founded_year, country, website, created_at";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, founded_year, country, website)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(input.founded_year)
            .bind(&input.country)
            .bind(&input.website)
            .fetch_one(pool)
            .await
    }

    /// Find a company by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE company_id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a company by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE name = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List companies in primary-key order. `limit: None` returns every row.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Company>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM companies ORDER BY company_id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Company>(&query)
            .bind(limit)
            .bind(offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }

    /// Return the subset of `ids` that do not resolve to a company.
    pub async fn missing_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT t.id FROM UNNEST($1::BIGINT[]) AS t(id)
             WHERE NOT EXISTS (SELECT 1 FROM companies c WHERE c.company_id = t.id)
             ORDER BY t.id",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    /// Number of games owned by the company.
    pub async fn count_games(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM games WHERE company_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Update a company. Only provided fields in `input` are applied;
    /// nullable columns are cleared by an explicit `null`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let (year_provided, year) = patch::split(&input.founded_year);
        let (country_provided, country) = patch::split(&input.country);
        let (website_provided, website) = patch::split(&input.website);
        let query = format!(
            "UPDATE companies SET
                name = COALESCE($2, name),
                founded_year = CASE WHEN $3 THEN $4 ELSE founded_year END,
                country = CASE WHEN $5 THEN $6 ELSE country END,
                website = CASE WHEN $7 THEN $8 ELSE website END
             WHERE company_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(year_provided)
            .bind(year.copied())
            .bind(country_provided)
            .bind(country)
            .bind(website_provided)
            .bind(website)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company. Fails with a foreign-key violation while games
    /// still reference it.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE company_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
