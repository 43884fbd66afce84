//! Handlers for the `/companies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gameportal_core::error::CoreError;
use gameportal_core::types::DbId;
use gameportal_db::models::company::{Company, CreateCompany, UpdateCompany};
use gameportal_db::models::game::Game;
use gameportal_db::repositories::{CompanyRepo, GameRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_company_exists;
use crate::query::{ApiQuery, PaginationParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /companies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    if CompanyRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Company name already exists".to_string(),
        )));
    }

    let company = CompanyRepo::create(&state.pool, &input).await?;
    tracing::info!(company_id = company.company_id, name = %company.name, "Company created");
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /companies
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PaginationParams>,
) -> AppResult<Json<Vec<Company>>> {
    let companies = CompanyRepo::list(&state.pool, page.limit(), page.offset()).await?;
    tracing::debug!(count = companies.len(), "Listed companies");
    Ok(Json(companies))
}

/// GET /companies/{company_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<Json<Company>> {
    ensure_company_exists(&state.pool, company_id)
        .await
        .map(Json)
}

/// PUT /companies/{company_id}
pub async fn update(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::update(&state.pool, company_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id: company_id,
        }))?;
    tracing::info!(company_id, "Company updated");
    Ok(Json(company))
}

/// DELETE /companies/{company_id}
///
/// Refused with 409 while any game still references the company.
pub async fn delete(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_company_exists(&state.pool, company_id).await?;

    let games = CompanyRepo::count_games(&state.pool, company_id).await?;
    if games > 0 {
        return Err(AppError::Core(CoreError::Restricted(format!(
            "Company {company_id} still owns {games} game(s)"
        ))));
    }

    CompanyRepo::delete(&state.pool, company_id).await?;
    tracing::info!(company_id, "Company deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

/// GET /companies/{company_id}/games
pub async fn list_games(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<Json<Vec<Game>>> {
    ensure_company_exists(&state.pool, company_id).await?;
    let games = GameRepo::list_by_company(&state.pool, company_id).await?;
    tracing::debug!(company_id, count = games.len(), "Listed company games");
    Ok(Json(games))
}
