//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{middleware, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    AuthServiceImpl, ChirpServiceImpl, UserServiceImpl, WebhookServiceImpl,
};
use crate::config::Settings;
use crate::domain::{ChirpRepository, RefreshTokenRepository, UserRepository};
use crate::infrastructure::database;
use crate::infrastructure::metrics::Metrics;
use crate::infrastructure::repositories::{
    PgChirpRepository, PgRefreshTokenRepository, PgUserRepository,
};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging, track_requests};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub chirps: Arc<dyn ChirpRepository>,
    pub refresh_tokens: Arc<dyn RefreshTokenRepository>,
    pub metrics: Arc<Metrics>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Assemble state from explicit repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        chirps: Arc<dyn ChirpRepository>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        settings: Settings,
    ) -> Result<Self> {
        let metrics = Metrics::new().context("Failed to register metrics")?;

        Ok(Self {
            users,
            chirps,
            refresh_tokens,
            metrics: Arc::new(metrics),
            settings: Arc::new(settings),
        })
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn with_pool(db: PgPool, settings: Settings) -> Result<Self> {
        Self::new(
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgChirpRepository::new(db.clone())),
            Arc::new(PgRefreshTokenRepository::new(db)),
            settings,
        )
    }

    pub fn auth_service(&self) -> AuthServiceImpl {
        AuthServiceImpl::new(
            self.users.clone(),
            self.refresh_tokens.clone(),
            self.settings.jwt.clone(),
        )
    }

    pub fn user_service(&self) -> UserServiceImpl {
        UserServiceImpl::new(self.users.clone())
    }

    pub fn chirp_service(&self) -> ChirpServiceImpl {
        ChirpServiceImpl::new(self.chirps.clone())
    }

    pub fn webhook_service(&self) -> WebhookServiceImpl {
        WebhookServiceImpl::new(self.users.clone())
    }
}

/// Full router with the HTTP middleware stack applied.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state.clone())
        .layer(middleware::from_fn_with_state(state, track_requests))
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to database")?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations applied");
        }

        let addr = settings.server_addr();
        let state = AppState::with_pool(db, settings)?;
        let router = build_router(state);

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
