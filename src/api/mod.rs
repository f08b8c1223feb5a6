use std::path::Path as FsPath;

use axum::extract::{Form, Path, Query};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::pages::{PageKind, RenderedPage, about, catalog, details, home, legal};
use crate::rating::{RatingDisplay, RatingWidget, StatusKind, SubmitRatingRequest};
use crate::services::CatalogFilter;
use crate::services::catalog::parse_course_id;
use crate::state::AppState;

#[derive(Deserialize)]
struct DetailsQuery {
    id: Option<String>,
}

#[derive(Deserialize)]
struct RatingForm {
    #[serde(default)]
    value: String,
}

/// Rating card state returned by the JSON rating endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingWidgetResponse {
    pub course_id: u32,
    pub loaded: bool,
    pub average: f64,
    pub count: u64,
    pub big_number: String,
    pub count_text: String,
    pub input_enabled: bool,
    pub status: Option<StatusKind>,
    pub message: Option<String>,
}

impl From<&RatingWidget> for RatingWidgetResponse {
    fn from(widget: &RatingWidget) -> Self {
        let (loaded, average, count) = match widget.display {
            RatingDisplay::Loaded { average, count } => (true, average, count),
            RatingDisplay::Loading => (false, 0.0, 0),
        };
        Self {
            course_id: widget.course_id,
            loaded,
            average,
            count,
            big_number: widget.big_number_text(),
            count_text: widget.count_text(),
            input_enabled: widget.input_enabled,
            status: widget.status.as_ref().map(|(kind, _)| *kind),
            message: widget.status.as_ref().map(|(_, message)| message.clone()),
        }
    }
}

pub fn router(state: AppState, assets_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/index.html", get(home_page))
        .route("/course/", get(catalog_page))
        .route("/course/course-details/", get(course_details).post(rate_course))
        .route("/course/course-details/{id}/", get(course_details_by_path))
        .route("/about.html", get(about_page))
        .route("/legal/privacy.html", get(privacy_page))
        .route("/legal/terms.html", get(terms_page))
        .route("/api/ratings/{id}", get(get_ratings).post(submit_rating))
        .route("/health", get(health))
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn page_response(page: RenderedPage) -> Response {
    let status = if page.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Html(page.html())).into_response()
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn home_page(State(state): State<AppState>) -> Html<String> {
    Html(home::render(&state.page_context()).render())
}

async fn catalog_page(State(state): State<AppState>, Query(filter): Query<CatalogFilter>) -> Html<String> {
    Html(catalog::render(&state.page_context(), &filter).render())
}

async fn about_page(State(state): State<AppState>) -> Html<String> {
    Html(about::render(&state.page_context()).render())
}

async fn privacy_page(State(state): State<AppState>) -> Html<String> {
    Html(legal::render(&state.page_context(), PageKind::Privacy).render())
}

async fn terms_page(State(state): State<AppState>) -> Html<String> {
    Html(legal::render(&state.page_context(), PageKind::Terms).render())
}

async fn course_details(State(state): State<AppState>, Query(query): Query<DetailsQuery>) -> Response {
    let ctx = state.page_context();
    let page = details::render(&ctx, query.id.as_deref(), state.ratings.as_ref(), None).await;
    page_response(page)
}

/// Directory-style details URL, as linked from exported pages.
async fn course_details_by_path(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let ctx = state.page_context();
    let page = details::render(&ctx, Some(&id), state.ratings.as_ref(), None).await;
    page_response(page)
}

/// Form fallback for the rating card: forwards the chosen star and
/// renders the page in its post-submission state.
async fn rate_course(
    State(state): State<AppState>,
    Query(query): Query<DetailsQuery>,
    Form(form): Form<RatingForm>,
) -> Response {
    // Unparseable values fall through to the widget's range check.
    let value = form.value.trim().parse::<u8>().unwrap_or(0);
    let ctx = state.page_context();
    let page = details::render(&ctx, query.id.as_deref(), state.ratings.as_ref(), Some(value)).await;
    page_response(page)
}

fn known_course(state: &AppState, raw: &str) -> Result<u32, AppError> {
    parse_course_id(Some(raw))
        .and_then(|id| state.catalog.find(id))
        .map(|course| course.id)
        .ok_or(AppError::NotFound)
}

async fn get_ratings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RatingWidgetResponse>, AppError> {
    let id = known_course(&state, &id)?;
    if !state.ratings.is_available() {
        return Err(AppError::Unavailable);
    }

    let mut widget = RatingWidget::new(id);
    widget.refresh(state.ratings.as_ref()).await;
    Ok(Json(RatingWidgetResponse::from(&widget)))
}

async fn submit_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SubmitRatingRequest>,
) -> Result<Json<RatingWidgetResponse>, AppError> {
    let id = known_course(&state, &id)?;
    if !(1..=5).contains(&req.rating) {
        return Err(AppError::BadRequest("rating must be between 1 and 5".to_string()));
    }
    if !state.ratings.is_available() {
        return Err(AppError::Unavailable);
    }

    let mut widget = RatingWidget::new(id);
    widget.submit(state.ratings.as_ref(), req.rating).await;
    Ok(Json(RatingWidgetResponse::from(&widget)))
}
