// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};

use maru_api::{
    ApiError, AuthenticationService, DashboardStats, ListQuery, LoginRequest, LoginResponse,
    Pagination, ReservationCreated, SEARCH_DEFAULT_LIMIT, SearchResults, SettingsUpdateRequest,
    StatisticsData, SubmissionCreated, compute_dashboard_stats, compute_statistics,
    current_month_bounds, get_reservation, get_settings, get_settlement, get_site_visit,
    list_reservations, list_settlements, list_site_visits, normalize_search_term,
    submit_reservation, submit_settlement, submit_site_visit, update_reservation_status,
    update_settings, update_settlement_refund_status, update_site_visit_status,
    window_start_string,
};
use maru_domain::{
    ReservationSubmission, SettlementSubmission, SiteVisitSubmission, StatsPeriod,
};
use maru_persistence::{
    AdminSettingsRecord, ReservationRecord, ReservationStatRow, ReservationSummary, ScheduleEntry,
    SettlementRecord, SettlementStatRow, SettlementSummary, SiteVisitRecord, SiteVisitStatRow,
    SiteVisitSummary, Store,
};

use crate::session::SessionAdmin;

/// Maru Server - HTTP backend for the Maru venue-rental business.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Creates an admin account and exits.
    CreateAdmin {
        /// The login name.
        #[arg(long)]
        login: String,
        /// The display name.
        #[arg(long)]
        display_name: String,
        /// The plain-text password (stored bcrypt-hashed).
        #[arg(long)]
        password: String,
    },
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The persistence store.
    pub store: Arc<Mutex<Store>>,
}

/// The response envelope every endpoint uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ApiResponse<T> {
    /// Success indicator.
    success: bool,
    /// The payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    /// User-facing error messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
    /// Pagination metadata for list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<Pagination>,
    /// A confirmation message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<T> ApiResponse<T> {
    const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: None,
            pagination: None,
            message: None,
        }
    }

    const fn paginated(data: T, pagination: Pagination) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: None,
            pagination: Some(pagination),
            message: None,
        }
    }

    fn with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            errors: None,
            pagination: None,
            message: Some(message),
        }
    }

    fn message_only(message: &str) -> Self {
        Self {
            success: true,
            data: None,
            errors: None,
            pagination: None,
            message: Some(message.to_string()),
        }
    }
}

/// HTTP error wrapper that renders the response envelope.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The user-facing error messages.
    errors: Vec<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ApiResponse<serde_json::Value>> = Json(ApiResponse {
            success: false,
            data: None,
            errors: Some(self.errors),
            pagination: None,
            message: None,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ValidationFailed { errors } => Self {
                status: StatusCode::BAD_REQUEST,
                errors,
            },
            ApiError::AuthenticationFailed { message } => Self {
                status: StatusCode::UNAUTHORIZED,
                errors: vec![message],
            },
            ApiError::NotFound { message } => Self {
                status: StatusCode::NOT_FOUND,
                errors: vec![message],
            },
            ApiError::InvalidInput { message } => Self {
                status: StatusCode::BAD_REQUEST,
                errors: vec![message],
            },
            ApiError::Storage { message } => {
                error!(error = %message, "Storage error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    errors: vec![String::from("데이터베이스 오류가 발생했습니다.")],
                }
            }
            ApiError::Internal { message } => {
                error!(error = %message, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    errors: vec![String::from("서버 오류가 발생했습니다.")],
                }
            }
        }
    }
}

/// Request body for status updates on reservations and site visits.
#[derive(Debug, Clone, Deserialize)]
struct StatusUpdateBody {
    /// The new status value.
    status: Option<String>,
}

/// Request body for refund-status updates on settlements.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefundStatusUpdateBody {
    /// The new refund-status value.
    refund_status: Option<String>,
}

/// Query parameters for the cross-entity search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchQuery {
    /// The free-text search term.
    query: Option<String>,
    /// Per-kind row bound.
    limit: Option<i64>,
}

/// Query parameters for the statistics endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct StatisticsQuery {
    /// The period selector (weekly, monthly, yearly).
    period: Option<String>,
}

/// Handler for GET `/api/health`.
async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "success": true, "message": "ok" }))
}

/// Handler for POST `/api/reservations`.
async fn handle_submit_reservation(
    AxumState(state): AxumState<AppState>,
    Json(submission): Json<ReservationSubmission>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationCreated>>), HttpError> {
    let mut store = state.store.lock().await;
    let outcome = submit_reservation(&mut store, &submission)?;
    drop(store);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(outcome.record, outcome.message)),
    ))
}

/// Handler for POST `/api/site-visits`.
async fn handle_submit_site_visit(
    AxumState(state): AxumState<AppState>,
    Json(submission): Json<SiteVisitSubmission>,
) -> Result<(StatusCode, Json<ApiResponse<SubmissionCreated>>), HttpError> {
    let mut store = state.store.lock().await;
    let outcome = submit_site_visit(&mut store, &submission)?;
    drop(store);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(outcome.record, outcome.message)),
    ))
}

/// Handler for POST `/api/settlements`.
async fn handle_submit_settlement(
    AxumState(state): AxumState<AppState>,
    Json(submission): Json<SettlementSubmission>,
) -> Result<(StatusCode, Json<ApiResponse<SubmissionCreated>>), HttpError> {
    let mut store = state.store.lock().await;
    let outcome = submit_settlement(&mut store, &submission)?;
    drop(store);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(outcome.record, outcome.message)),
    ))
}

/// Handler for POST `/api/admin/login`.
async fn handle_admin_login(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, HttpError> {
    let mut store = state.store.lock().await;
    let (token, identity) =
        AuthenticationService::login(&mut store, &request.login_name, &request.password)?;
    drop(store);

    info!(login_name = %identity.login_name, "Admin logged in");

    Ok(Json(ApiResponse::success(LoginResponse {
        token,
        display_name: identity.display_name,
    })))
}

/// Handler for POST `/api/admin/logout`.
async fn handle_admin_logout(
    AxumState(state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<serde_json::Value>>, HttpError> {
    let token: Option<&str> = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let Some(token) = token else {
        return Err(HttpError {
            status: StatusCode::UNAUTHORIZED,
            errors: vec![String::from("인증이 필요합니다.")],
        });
    };

    let mut store = state.store.lock().await;
    AuthenticationService::logout(&mut store, token)?;
    drop(store);

    Ok(Json(ApiResponse::message_only("로그아웃되었습니다.")))
}

/// Handler for GET `/api/admin/reservations`.
async fn handle_admin_list_reservations(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<ReservationRecord>>>, HttpError> {
    let mut store = state.store.lock().await;
    let (records, pagination) = list_reservations(&mut store, &query)?;
    drop(store);

    Ok(Json(ApiResponse::paginated(records, pagination)))
}

/// Handler for GET `/api/admin/reservations/{id}`.
async fn handle_admin_get_reservation(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReservationRecord>>, HttpError> {
    let mut store = state.store.lock().await;
    let record = get_reservation(&mut store, id)?;
    drop(store);

    Ok(Json(ApiResponse::success(record)))
}

/// Handler for PATCH `/api/admin/reservations/{id}`.
async fn handle_admin_update_reservation(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Path(id): Path<i64>,
    Json(body): Json<StatusUpdateBody>,
) -> Result<Json<ApiResponse<ReservationRecord>>, HttpError> {
    let status: String = body.status.unwrap_or_default();

    let mut store = state.store.lock().await;
    let record = update_reservation_status(&mut store, id, &status)?;
    drop(store);

    Ok(Json(ApiResponse::success(record)))
}

/// Handler for GET `/api/admin/site-visits`.
async fn handle_admin_list_site_visits(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<SiteVisitRecord>>>, HttpError> {
    let mut store = state.store.lock().await;
    let (records, pagination) = list_site_visits(&mut store, &query)?;
    drop(store);

    Ok(Json(ApiResponse::paginated(records, pagination)))
}

/// Handler for GET `/api/admin/site-visits/{id}`.
async fn handle_admin_get_site_visit(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<SiteVisitRecord>>, HttpError> {
    let mut store = state.store.lock().await;
    let record = get_site_visit(&mut store, id)?;
    drop(store);

    Ok(Json(ApiResponse::success(record)))
}

/// Handler for PATCH `/api/admin/site-visits/{id}`.
async fn handle_admin_update_site_visit(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Path(id): Path<i64>,
    Json(body): Json<StatusUpdateBody>,
) -> Result<Json<ApiResponse<SiteVisitRecord>>, HttpError> {
    let status: String = body.status.unwrap_or_default();

    let mut store = state.store.lock().await;
    let record = update_site_visit_status(&mut store, id, &status)?;
    drop(store);

    Ok(Json(ApiResponse::success(record)))
}

/// Handler for GET `/api/admin/settlements`.
async fn handle_admin_list_settlements(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<SettlementRecord>>>, HttpError> {
    let mut store = state.store.lock().await;
    let (records, pagination) = list_settlements(&mut store, &query)?;
    drop(store);

    Ok(Json(ApiResponse::paginated(records, pagination)))
}

/// Handler for GET `/api/admin/settlements/{id}`.
async fn handle_admin_get_settlement(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<SettlementRecord>>, HttpError> {
    let mut store = state.store.lock().await;
    let record = get_settlement(&mut store, id)?;
    drop(store);

    Ok(Json(ApiResponse::success(record)))
}

/// Handler for PATCH `/api/admin/settlements/{id}`.
async fn handle_admin_update_settlement(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Path(id): Path<i64>,
    Json(body): Json<RefundStatusUpdateBody>,
) -> Result<Json<ApiResponse<SettlementRecord>>, HttpError> {
    let refund_status: String = body.refund_status.unwrap_or_default();

    let mut store = state.store.lock().await;
    let record = update_settlement_refund_status(&mut store, id, &refund_status)?;
    drop(store);

    Ok(Json(ApiResponse::success(record)))
}

async fn search_reservations_task(
    state: &AppState,
    term: String,
    limit: i64,
) -> Result<Vec<ReservationSummary>, HttpError> {
    let mut store = state.store.lock().await;
    Ok(store
        .search_reservations(&term, limit)
        .map_err(ApiError::from)?)
}

async fn search_site_visits_task(
    state: &AppState,
    term: String,
    limit: i64,
) -> Result<Vec<SiteVisitSummary>, HttpError> {
    let mut store = state.store.lock().await;
    Ok(store
        .search_site_visits(&term, limit)
        .map_err(ApiError::from)?)
}

async fn search_settlements_task(
    state: &AppState,
    term: String,
    limit: i64,
) -> Result<Vec<SettlementSummary>, HttpError> {
    let mut store = state.store.lock().await;
    Ok(store
        .search_settlements(&term, limit)
        .map_err(ApiError::from)?)
}

/// Handler for GET `/api/admin/search`.
///
/// Terms under two characters short-circuit to empty result sets
/// without touching storage; otherwise the three kind queries are
/// issued concurrently and joined.
async fn handle_admin_search(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResults>>, HttpError> {
    let Some(term) = query.query.as_deref().and_then(normalize_search_term) else {
        return Ok(Json(ApiResponse::success(SearchResults::default())));
    };
    let limit: i64 = query.limit.unwrap_or(SEARCH_DEFAULT_LIMIT).max(1);

    let (reservations, site_visits, settlements) = futures::join!(
        search_reservations_task(&state, term.clone(), limit),
        search_site_visits_task(&state, term.clone(), limit),
        search_settlements_task(&state, term, limit),
    );

    Ok(Json(ApiResponse::success(SearchResults {
        reservations: reservations?,
        site_visits: site_visits?,
        settlements: settlements?,
    })))
}

async fn reservation_stats_task(
    state: &AppState,
    since: Option<String>,
) -> Result<Vec<ReservationStatRow>, HttpError> {
    let mut store = state.store.lock().await;
    Ok(store
        .reservation_stats(since.as_deref())
        .map_err(ApiError::from)?)
}

async fn site_visit_stats_task(
    state: &AppState,
    since: Option<String>,
) -> Result<Vec<SiteVisitStatRow>, HttpError> {
    let mut store = state.store.lock().await;
    Ok(store
        .site_visit_stats(since.as_deref())
        .map_err(ApiError::from)?)
}

async fn settlement_stats_task(
    state: &AppState,
    since: Option<String>,
) -> Result<Vec<SettlementStatRow>, HttpError> {
    let mut store = state.store.lock().await;
    Ok(store
        .settlement_stats(since.as_deref())
        .map_err(ApiError::from)?)
}

/// Handler for GET `/api/admin/stats`.
///
/// Three concurrent full-table projection fetches, reduced in memory.
async fn handle_admin_stats(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
) -> Result<Json<ApiResponse<DashboardStats>>, HttpError> {
    let (reservations, site_visits, settlements) = futures::join!(
        reservation_stats_task(&state, None),
        site_visit_stats_task(&state, None),
        settlement_stats_task(&state, None),
    );

    let stats: DashboardStats = compute_dashboard_stats(
        OffsetDateTime::now_utc(),
        &reservations?,
        &site_visits?,
        &settlements?,
    );

    Ok(Json(ApiResponse::success(stats)))
}

/// Handler for GET `/api/admin/statistics`.
///
/// Three concurrent window-bounded projection fetches, reduced in
/// memory; the storage cost stays at three queries regardless of the
/// period length.
async fn handle_admin_statistics(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<ApiResponse<StatisticsData>>, HttpError> {
    let period: StatsPeriod = StatsPeriod::from_query(query.period.as_deref());
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let window_start: String = window_start_string(period, now)?;

    let (reservations, site_visits, settlements) = futures::join!(
        reservation_stats_task(&state, Some(window_start.clone())),
        site_visit_stats_task(&state, Some(window_start.clone())),
        settlement_stats_task(&state, Some(window_start)),
    );

    let data: StatisticsData =
        compute_statistics(period, now, &reservations?, &site_visits?, &settlements?)?;

    Ok(Json(ApiResponse::success(data)))
}

/// Handler for GET `/api/admin/schedule/monthly`.
async fn handle_admin_monthly_schedule(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(_admin): SessionAdmin,
) -> Result<Json<ApiResponse<Vec<ScheduleEntry>>>, HttpError> {
    let (first_day, last_day) = current_month_bounds(OffsetDateTime::now_utc())?;

    let mut store = state.store.lock().await;
    let entries: Vec<ScheduleEntry> = store
        .monthly_schedule(&first_day, &last_day)
        .map_err(ApiError::from)?;
    drop(store);

    Ok(Json(ApiResponse::success(entries)))
}

/// Handler for GET `/api/admin/settings`.
async fn handle_admin_get_settings(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
) -> Result<Json<ApiResponse<AdminSettingsRecord>>, HttpError> {
    let mut store = state.store.lock().await;
    let settings = get_settings(&mut store, admin.admin_id)?;
    drop(store);

    Ok(Json(ApiResponse::success(settings)))
}

/// Handler for PUT `/api/admin/settings`.
async fn handle_admin_put_settings(
    AxumState(state): AxumState<AppState>,
    SessionAdmin(admin): SessionAdmin,
    Json(request): Json<SettingsUpdateRequest>,
) -> Result<Json<ApiResponse<AdminSettingsRecord>>, HttpError> {
    let mut store = state.store.lock().await;
    let settings = update_settings(&mut store, admin.admin_id, &request)?;
    drop(store);

    Ok(Json(ApiResponse::success(settings)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handle_health))
        .route("/api/reservations", post(handle_submit_reservation))
        .route("/api/site-visits", post(handle_submit_site_visit))
        .route("/api/settlements", post(handle_submit_settlement))
        .route("/api/admin/login", post(handle_admin_login))
        .route("/api/admin/logout", post(handle_admin_logout))
        .route(
            "/api/admin/reservations",
            get(handle_admin_list_reservations),
        )
        .route(
            "/api/admin/reservations/{id}",
            get(handle_admin_get_reservation).patch(handle_admin_update_reservation),
        )
        .route("/api/admin/site-visits", get(handle_admin_list_site_visits))
        .route(
            "/api/admin/site-visits/{id}",
            get(handle_admin_get_site_visit).patch(handle_admin_update_site_visit),
        )
        .route("/api/admin/settlements", get(handle_admin_list_settlements))
        .route(
            "/api/admin/settlements/{id}",
            get(handle_admin_get_settlement).patch(handle_admin_update_settlement),
        )
        .route("/api/admin/search", get(handle_admin_search))
        .route("/api/admin/stats", get(handle_admin_stats))
        .route("/api/admin/statistics", get(handle_admin_statistics))
        .route(
            "/api/admin/schedule/monthly",
            get(handle_admin_monthly_schedule),
        )
        .route(
            "/api/admin/settings",
            get(handle_admin_get_settings).put(handle_admin_put_settings),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Maru server");

    let mut store: Store = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Store::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Store::new_in_memory()?
    };

    if let Some(Command::CreateAdmin {
        login,
        display_name,
        password,
    }) = args.command
    {
        let admin_id: i64 = store.create_admin(&login, &display_name, &password)?;
        info!(admin_id, login, "Admin account created");
        return Ok(());
    }

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
