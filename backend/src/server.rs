//! # Server Setup
//!
//! Application state, route registration, and HTTP server startup.

use axum::{
    extract::FromRef,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    database::Database,
    handlers,
    middleware::require_admin,
    services::{chatbot::ChatbotClient, stripe::StripeClient},
};

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
    pub stripe: Arc<StripeClient>,
    pub chatbot: Arc<ChatbotClient>,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<StripeClient> {
    fn from_ref(state: &AppState) -> Self {
        state.stripe.clone()
    }
}

impl FromRef<AppState> for Arc<ChatbotClient> {
    fn from_ref(state: &AppState) -> Self {
        state.chatbot.clone()
    }
}

/// Initialize and start the HTTP server: tracing, configuration, database
/// connection and index creation, router, bind.
pub async fn start_server() -> anyhow::Result<()> {
    init_tracing();

    info!("STUDYHUB BACKEND STARTING");

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!("Connecting to MongoDB...");
    let db = Database::connect(&config.mongodb_uri, &config.database_name).await?;
    db.ensure_indexes().await?;
    info!("Database ready: {}", config.database_name);

    let state = AppState {
        stripe: Arc::new(StripeClient::new(config.stripe_secret_key.clone())),
        chatbot: Arc::new(ChatbotClient::new(config.openrouter_api_key.clone())),
        db,
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("SERVER READY: http://{}", addr);
    log_route_table();

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyhub_backend=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Credentialed CORS: the auth cookie must survive cross-origin calls
    // from the configured front-end origins.
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    let admin = Router::new()
        .route("/admin/users", get(handlers::admin::list_users))
        .route("/admin/users/search", get(handlers::admin::search_users))
        .route(
            "/admin/users/:user_id/role",
            patch(handlers::admin::update_user_role),
        )
        .route("/admin/sessions", get(handlers::admin::list_sessions))
        .route(
            "/admin/sessions/:session_id/approve",
            patch(handlers::admin::approve_session),
        )
        .route(
            "/admin/sessions/:session_id/reject",
            patch(handlers::admin::reject_session),
        )
        .route(
            "/admin/sessions/:session_id",
            delete(handlers::admin::delete_session),
        )
        .route("/admin/materials", get(handlers::admin::list_materials))
        .route(
            "/admin/materials/:material_id",
            delete(handlers::admin::delete_material),
        )
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/", get(|| async { "StudyHub server is running" }))
        .route("/health", get(|| async { "OK" }))
        // Public session browsing (dual-identifier lookup)
        .route("/data", get(handlers::sessions::list_sessions))
        .route("/data/:id", get(handlers::sessions::get_session))
        // Users & auth
        .route("/users", post(handlers::users::register_user))
        .route("/users/:uid", get(handlers::users::get_user))
        .route("/users/:uid/role", get(handlers::users::get_user_role))
        .route("/auth/login", post(handlers::auth::login))
        .route("/jwt", post(handlers::auth::issue_token))
        .route("/logout", post(handlers::auth::logout))
        // Payments
        .route(
            "/create-payment-intent",
            post(handlers::payments::create_payment_intent),
        )
        // Bookings
        .route("/api/book-session", post(handlers::bookings::book_session))
        .route(
            "/api/booked-sessions/:email",
            get(handlers::bookings::booked_session_ids),
        )
        .route(
            "/api/student/booked-sessions/:email",
            get(handlers::bookings::student_booked_sessions),
        )
        // Reviews
        .route("/api/reviews", post(handlers::reviews::create_review))
        .route(
            "/api/reviews/:session_id",
            get(handlers::reviews::session_reviews),
        )
        // Notes
        .route("/api/notes", post(handlers::notes::create_note))
        .route(
            "/api/notes/:id",
            get(handlers::notes::notes_by_email)
                .put(handlers::notes::update_note)
                .delete(handlers::notes::delete_note),
        )
        // Study materials
        .route(
            "/api/materials/:session_id",
            get(handlers::materials::session_materials),
        )
        // Tutor dashboard
        .route("/api/tutor/sessions", post(handlers::tutor::create_session))
        .route("/api/tutor/sessions/:id", get(handlers::tutor::tutor_sessions))
        .route(
            "/api/tutor/sessions/:id/resubmit",
            put(handlers::tutor::resubmit_session),
        )
        .route(
            "/api/tutor/approved-sessions/:email",
            get(handlers::tutor::approved_sessions),
        )
        .route(
            "/api/tutor/materials",
            post(handlers::materials::upload_material),
        )
        .route(
            "/api/tutor/materials/all",
            get(handlers::materials::all_materials),
        )
        .route(
            "/api/tutor/materials/:id",
            get(handlers::materials::tutor_materials)
                .put(handlers::materials::update_material)
                .delete(handlers::materials::delete_material),
        )
        // Chatbot
        .route("/api/chatbot", post(handlers::chat::chatbot_reply))
        .merge(admin)
        .fallback(|| async {
            info!("[404] Unmatched route");
            (StatusCode::NOT_FOUND, "Route not found")
        })
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Log the route surface at startup.
fn log_route_table() {
    info!("SESSIONS:");
    info!("   • GET    /data, /data/:id");
    info!("   • POST   /api/tutor/sessions");
    info!("   • GET    /api/tutor/sessions/:email");
    info!("   • PUT    /api/tutor/sessions/:id/resubmit");
    info!("USERS & AUTH:");
    info!("   • POST   /users, /auth/login, /jwt, /logout");
    info!("   • GET    /users/:uid, /users/:uid/role");
    info!("BOOKINGS:");
    info!("   • POST   /api/book-session");
    info!("   • GET    /api/booked-sessions/:email");
    info!("   • GET    /api/student/booked-sessions/:email");
    info!("CONTENT:");
    info!("   • POST   /api/reviews, /api/notes, /api/tutor/materials");
    info!("   • GET    /api/reviews/:sessionId, /api/notes/:email, /api/materials/:sessionId");
    info!("ADMIN (token with admin role required):");
    info!("   • GET    /admin/users, /admin/sessions, /admin/materials");
    info!("   • PATCH  /admin/users/:id/role, /admin/sessions/:id/approve, /admin/sessions/:id/reject");
    info!("BILLING & CHAT:");
    info!("   • POST   /create-payment-intent, /api/chatbot");
    info!("HEALTH:");
    info!("   • GET    /health");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::encode_jwt;
    use axum::body::Body;
    use axum::http::Request;
    use shared::{ChatResponse, ErrorResponse};
    use tower::ServiceExt;

    const JWT_SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

    fn test_config() -> Config {
        Config {
            mongodb_uri: "mongodb://127.0.0.1:27017".to_string(),
            database_name: "StudyHubTest".to_string(),
            jwt_secret: JWT_SECRET.to_string(),
            stripe_secret_key: "sk_test_x".to_string(),
            openrouter_api_key: "sk-or-x".to_string(),
            port: 0,
            allowed_origins: vec!["http://localhost:5173".to_string()],
            production: false,
        }
    }

    /// The mongodb client connects lazily, so building state never touches
    /// the network; only routes that skip the database are exercised here.
    async fn test_app() -> Router {
        let config = test_config();
        let db = Database::connect(&config.mongodb_uri, &config.database_name)
            .await
            .expect("client setup");

        create_router(AppState {
            stripe: Arc::new(StripeClient::new(config.stripe_secret_key.clone())),
            // Port 9 is not listening; every chat completion fails fast.
            chatbot: Arc::new(ChatbotClient::with_base_url(
                "test-key".to_string(),
                "http://127.0.0.1:9",
            )),
            db,
            config,
        })
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no/such/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_surface_requires_token() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_surface_rejects_non_admin_role() {
        let app = test_app().await;
        let token = encode_jwt("uid-1", "t@x.com", "tutor", JWT_SECRET).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin/users")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "Admin role required");
    }

    #[tokio::test]
    async fn test_chatbot_degrades_to_apology() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chatbot")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message":"When is my next session?"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        // Failure of the model endpoint must not surface as an error status.
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let chat: ChatResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(chat.reply, crate::services::chatbot::FALLBACK_REPLY);
    }
}
