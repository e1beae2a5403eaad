// Copyright (C) 2026 Fred Clausen
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

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use gatepass_api::{
    AccessGate, AdminOrderInfo, AdminTicketInfo, AgentInfo, AgentStats, ApiError, AppConfig,
    CheckinRequest, CheckinResponse, CommissionInfo, CreateAgentRequest, CreateOrderRequest,
    CreateOrderResponse, DeleteAgentResponse, MarkFailedResponse, MarkPaidResponse,
    OrderStatusResponse, RegisterAttendeeRequest, RegisterAttendeeResponse, SavePaymentRequest,
    SavePaymentResponse, SaveVerificationCodeRequest, SaveVerificationCodeResponse,
    TicketResponse, UpdateAgentRequest,
};
use gatepass_persistence::{Persistence, PersistenceError};

mod gates;

use gates::{AdminGate, StaffGate};

/// Gatepass Server - HTTP server for the Gatepass ticketing system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over --database.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence adapter is wrapped in a Mutex for safe concurrent
/// access; the configuration and gates are immutable after startup.
#[derive(Clone)]
struct AppState {
    /// The persistence adapter for the ticketing store.
    persistence: Arc<Mutex<Persistence>>,
    /// Event configuration read from the environment at startup.
    config: Arc<AppConfig>,
    /// The shared-password access gates.
    gate: Arc<AccessGate>,
}

/// Query parameters for the buyer's order lookup.
#[derive(Debug, Deserialize)]
struct FindOrderQuery {
    /// The reconciliation reference code to look up.
    reference_code: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::CodeSpaceExhausted { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error at the HTTP boundary");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

// ============================================================================
// Buyer handlers
// ============================================================================

/// Handler for POST `/orders` endpoint.
///
/// Creates a new order and returns the payment instructions payload.
async fn handle_create_order(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, HttpError> {
    info!(
        referral_code = ?req.referral_code,
        "Handling create_order request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateOrderResponse =
        gatepass_api::create_order(&mut persistence, &app_state.config, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/orders/find` endpoint.
///
/// Looks up an order by its reconciliation reference code.
async fn handle_find_order(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<FindOrderQuery>,
) -> Result<Json<OrderStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: OrderStatusResponse =
        gatepass_api::find_order_by_reference(&mut persistence, &query.reference_code)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/orders/{order_token}` endpoint.
///
/// Returns the status poll payload for an order.
async fn handle_get_order_status(
    AxumState(app_state): AxumState<AppState>,
    Path(order_token): Path<String>,
) -> Result<Json<OrderStatusResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: OrderStatusResponse =
        gatepass_api::get_order_status(&mut persistence, &order_token)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/orders/{order_token}/payment` endpoint.
///
/// Saves the buyer's payment method and wallet phone number.
async fn handle_save_payment(
    AxumState(app_state): AxumState<AppState>,
    Path(order_token): Path<String>,
    Json(req): Json<SavePaymentRequest>,
) -> Result<Json<SavePaymentResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: SavePaymentResponse =
        gatepass_api::save_payment_details(&mut persistence, &order_token, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/orders/{order_token}/verification-code` endpoint.
///
/// Saves the buyer-entered transfer confirmation code.
async fn handle_save_verification_code(
    AxumState(app_state): AxumState<AppState>,
    Path(order_token): Path<String>,
    Json(req): Json<SaveVerificationCodeRequest>,
) -> Result<Json<SaveVerificationCodeResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: SaveVerificationCodeResponse =
        gatepass_api::save_verification_code(&mut persistence, &order_token, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/orders/{order_token}/attendee` endpoint.
///
/// Registers the attendee for a paid order and issues the ticket.
async fn handle_register_attendee(
    AxumState(app_state): AxumState<AppState>,
    Path(order_token): Path<String>,
    Json(req): Json<RegisterAttendeeRequest>,
) -> Result<Json<RegisterAttendeeResponse>, HttpError> {
    info!("Handling register_attendee request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterAttendeeResponse =
        gatepass_api::register_attendee(&mut persistence, &order_token, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/tickets/{ticket_token}` endpoint.
///
/// Returns the ticket page payload.
async fn handle_get_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(ticket_token): Path<String>,
) -> Result<Json<TicketResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: TicketResponse =
        gatepass_api::get_ticket(&mut persistence, &app_state.config, &ticket_token)?;
    drop(persistence);

    Ok(Json(response))
}

// ============================================================================
// Admin handlers
// ============================================================================

/// Handler for GET `/admin/agents` endpoint.
async fn handle_list_agents(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<AgentInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<AgentInfo> =
        gatepass_api::list_agents(&mut persistence, &app_state.config)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/agents` endpoint.
async fn handle_create_agent(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateAgentRequest>,
) -> Result<Json<AgentInfo>, HttpError> {
    info!(name = %req.name, "Handling create_agent request");

    let mut persistence = app_state.persistence.lock().await;
    let response: AgentInfo =
        gatepass_api::create_agent(&mut persistence, &app_state.config, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/admin/agents/{agent_id}` endpoint.
async fn handle_update_agent(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
    Path(agent_id): Path<i64>,
    Json(req): Json<UpdateAgentRequest>,
) -> Result<Json<AgentInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: AgentInfo =
        gatepass_api::update_agent(&mut persistence, &app_state.config, agent_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/admin/agents/{agent_id}` endpoint.
async fn handle_delete_agent(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
    Path(agent_id): Path<i64>,
) -> Result<Json<DeleteAgentResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteAgentResponse = gatepass_api::delete_agent(&mut persistence, agent_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/admin/orders` endpoint.
async fn handle_list_orders(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<AdminOrderInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<AdminOrderInfo> = gatepass_api::list_orders_admin(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/admin/tickets` endpoint.
async fn handle_list_tickets(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<AdminTicketInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<AdminTicketInfo> = gatepass_api::list_tickets_admin(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/admin/commissions` endpoint.
async fn handle_list_commissions(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<CommissionInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<CommissionInfo> = gatepass_api::list_commissions_admin(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/admin/stats` endpoint.
///
/// Returns per-agent visits, orders, revenue, and conversion figures.
async fn handle_agent_stats(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<AgentStats>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<AgentStats> = gatepass_api::agent_stats(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/orders/{order_token}/mark-paid` endpoint.
///
/// Marks an order paid after the admin verified the wallet transfer.
async fn handle_mark_paid(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
    Path(order_token): Path<String>,
) -> Result<Json<MarkPaidResponse>, HttpError> {
    info!("Handling mark_paid request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MarkPaidResponse = gatepass_api::mark_order_paid(&mut persistence, &order_token)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/admin/orders/{order_token}/mark-failed` endpoint.
async fn handle_mark_failed(
    _: AdminGate,
    AxumState(app_state): AxumState<AppState>,
    Path(order_token): Path<String>,
) -> Result<Json<MarkFailedResponse>, HttpError> {
    info!("Handling mark_failed request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MarkFailedResponse =
        gatepass_api::mark_order_failed(&mut persistence, &order_token)?;
    drop(persistence);

    Ok(Json(response))
}

// ============================================================================
// Check-in handler
// ============================================================================

/// Handler for POST `/checkin` endpoint.
///
/// Consumes a ticket at the door.
async fn handle_checkin(
    _: StaffGate,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CheckinRequest>,
) -> Result<Json<CheckinResponse>, HttpError> {
    info!("Handling checkin request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CheckinResponse = gatepass_api::check_in(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/orders", post(handle_create_order))
        .route("/orders/find", get(handle_find_order))
        .route("/orders/{order_token}", get(handle_get_order_status))
        .route("/orders/{order_token}/payment", post(handle_save_payment))
        .route(
            "/orders/{order_token}/verification-code",
            post(handle_save_verification_code),
        )
        .route(
            "/orders/{order_token}/attendee",
            post(handle_register_attendee),
        )
        .route("/tickets/{ticket_token}", get(handle_get_ticket))
        .route("/admin/agents", get(handle_list_agents))
        .route("/admin/agents", post(handle_create_agent))
        .route("/admin/agents/{agent_id}", put(handle_update_agent))
        .route("/admin/agents/{agent_id}", delete(handle_delete_agent))
        .route("/admin/orders", get(handle_list_orders))
        .route("/admin/tickets", get(handle_list_tickets))
        .route("/admin/commissions", get(handle_list_commissions))
        .route("/admin/stats", get(handle_agent_stats))
        .route(
            "/admin/orders/{order_token}/mark-paid",
            post(handle_mark_paid),
        )
        .route(
            "/admin/orders/{order_token}/mark-failed",
            post(handle_mark_failed),
        )
        .route("/checkin", post(handle_checkin))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Gatepass Server");

    // Read event configuration; a missing variable is fatal
    let config: AppConfig = AppConfig::from_env()?;
    let gate: AccessGate = AccessGate::new(&config.admin_password, &config.staff_password)?;

    // Initialize persistence based on CLI arguments
    let persistence: Persistence = if let Some(mysql_url) = &args.mysql_url {
        info!("Using MySQL database");
        Persistence::new_with_mysql(mysql_url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        config: Arc::new(config),
        gate: Arc::new(gate),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
