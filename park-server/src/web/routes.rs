//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::auth::{AuthError, Claims};
use crate::catalog::CatalogError;
use crate::domain::{Ride, RideId, ValidationError};
use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/rides", get(list_rides).post(add_ride))
        .route("/api/rides/:id", get(get_ride))
        .route("/api/add_ride", post(add_ride))
        .route("/api/generate_plan", post(generate_plan))
        .route("/api/login", post(login))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Index page with the planning form.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let template = IndexTemplate::new(state.planner.config().max_budget_mins);
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html).into_response())
}

/// Health check endpoint.
///
/// 503 while the catalog is unavailable.
async fn health(State(state): State<AppState>) -> Response {
    let catalog = state.catalog.health().await;
    let status = if catalog.reachable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: if catalog.reachable {
            "healthy"
        } else {
            "unavailable"
        },
        rides_count: catalog.rides,
        catalog_reachable: catalog.reachable,
        catalog_revision: catalog.revision,
        cached_plans: state.planner.entry_count(),
    };
    (status, Json(body)).into_response()
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Verify the bearer token and require the admin role.
fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<Claims, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingCredentials)?;

    Ok(state.signer.require_admin(token, Utc::now())?)
}

/// List every ride in the catalog.
async fn list_rides(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let snapshot = state.catalog.snapshot().await?;

    if accepts_html(&headers) {
        let template = RideListTemplate {
            rides: snapshot.rides().map(|r| RideView::from_ride(r)).collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let rides: Vec<&Ride> = snapshot.rides().map(|r| r.as_ref()).collect();
        Ok(Json(rides).into_response())
    }
}

/// Look up one ride by id.
async fn get_ride(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = RideId::parse(&id)?;
    let snapshot = state.catalog.snapshot().await?;

    match snapshot.get(&id) {
        Some(ride) => Ok(Json(ride.as_ref()).into_response()),
        None => Err(AppError::NotFound {
            message: format!("No ride with id {id}"),
        }),
    }
}

/// Add a ride to the catalog (admin only).
async fn add_ride(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let claims = require_admin(&state, &headers)?;
    let req: AddRideRequest = parse_body(&body)?;
    let ride = req.into_ride()?;

    let snapshot = state.catalog.add_ride(ride.clone()).await?;
    info!(
        id = %ride.id,
        staff_id = %claims.staff_id,
        revision = snapshot.revision(),
        "ride added"
    );

    let response = AddRideResponse {
        message: format!("Ride '{}' added successfully by {}!", ride.name, claims.staff_id),
        ride,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Generate the best ride plan for a visitor.
async fn generate_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: GeneratePlanRequest = parse_body(&body)?;
    let profile = req.to_profile(state.planner.config().max_budget_mins)?;

    let snapshot = state.catalog.snapshot().await?;
    let plan = state.planner.plan(&snapshot, &profile).await?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = PlanResultsTemplate {
            plan: PlanView::from_plan(&plan),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlanResponse::from_plan(&plan)).into_response())
    }
}

/// Staff login.
async fn login(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let req: LoginRequest = parse_body(&body)?;
    if req.staff_id.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest {
            message: "Staff ID and password are required.".to_string(),
        });
    }

    let role = state.staff.authenticate(&req.staff_id, &req.password)?;
    let (token, claims) = state.signer.issue(&req.staff_id, role, Utc::now());
    info!(staff_id = %claims.staff_id, role = %claims.role, "staff login");

    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        token,
        expires_at: claims
            .expires_at()
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default(),
        staff_id: claims.staff_id,
        role: claims.role,
    })
    .into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    Forbidden { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::DuplicateId(_) => AppError::Conflict {
                message: e.to_string(),
            },
            CatalogError::Invalid(v) => v.into(),
            CatalogError::Unavailable => AppError::Unavailable {
                message: "No rides available: the ride catalog is unavailable. Please try again later."
                    .to_string(),
            },
            CatalogError::Storage { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Invalid(v) => v.into(),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Forbidden => AppError::Forbidden {
                message: e.to_string(),
            },
            AuthError::MissingCredentials
            | AuthError::Malformed
            | AuthError::BadSignature
            | AuthError::Expired
            | AuthError::InvalidLogin => AppError::Unauthorized {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
            AppError::Forbidden { message } => (StatusCode::FORBIDDEN, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
