use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::AppState;
use crate::models::{CompanyImage, CompanyPageView, CompanyWithLogo, PaginationView};
use crate::pagination::{PageWindow, DEFAULT_WINDOW_SIZE};

#[derive(Debug, Deserialize)]
pub struct CompanyQueryParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// `GET /api/v1/companies?page={n}&size={m}` - composed company page view.
pub async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<CompanyQueryParams>,
) -> Result<Json<CompanyPageView>, StatusCode> {
    let page = params.page.unwrap_or(1);
    if page == 0 {
        return Err(StatusCode::BAD_REQUEST);
    }
    let size = params.size.unwrap_or(state.config.backend.page_size);

    render_page(&state, page, size).await
}

/// `GET /page/{n}` - the navigation surface's page links resolve here.
pub async fn page_view(
    State(state): State<AppState>,
    Path(page): Path<u32>,
) -> Result<Json<CompanyPageView>, StatusCode> {
    if page == 0 {
        return Err(StatusCode::BAD_REQUEST);
    }

    render_page(&state, page, state.config.backend.page_size).await
}

/// `GET /api/v1/company-images/{id}` - thin proxy of the single logo lookup.
///
/// Unlike the batched cache path, a failure here is surfaced to the caller
/// as a generic server error.
pub async fn get_company_image(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CompanyImage>, (StatusCode, Json<serde_json::Value>)> {
    match state.directory.fetch_company_image(id).await {
        Ok(image) => Ok(Json(image)),
        Err(e) => {
            error!("Error fetching image for company {}: {}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            ))
        }
    }
}

/// Fetch one listing page and compose it with resolved logos and the
/// pagination window.
async fn render_page(
    state: &AppState,
    page: u32,
    size: u32,
) -> Result<Json<CompanyPageView>, StatusCode> {
    let listing = match state.directory.fetch_companies(page, size).await {
        Ok(listing) => listing,
        Err(e) => {
            error!("Failed to fetch company listing: {}", e);
            return Err(StatusCode::BAD_GATEWAY);
        }
    };

    // Logo resolution never errors. A batch superseded mid-flight returns
    // None; this render then shows placeholders rather than stale URLs.
    let logos = state.logo_cache.resolve(&listing.items).await;

    let companies = listing
        .items
        .iter()
        .map(|company| CompanyWithLogo {
            company: company.clone(),
            logo_url: logos
                .as_ref()
                .map(|resolved| resolved.display_url(company).to_string())
                .unwrap_or_else(|| state.config.assets.fallback_logo.clone()),
        })
        .collect();

    let window = PageWindow::compute(page, listing.pages, DEFAULT_WINDOW_SIZE);

    Ok(Json(CompanyPageView {
        companies,
        total: listing.total,
        page: listing.page,
        size: listing.size,
        pagination: PaginationView::from_window(&window),
    }))
}
