//! HTTP server core implementation

use crate::config::ServerConfig;
use crate::monitoring::MonitoringSession;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{MonitorError, Result};
use actix_web::error::InternalError;
use actix_web::{
    App, HttpServer as ActixHttpServer, ResponseError,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server over a session
    pub fn new(config: &ServerConfig, session: MonitoringSession) -> Self {
        Self {
            config: config.clone(),
            state: AppState::new(session),
        }
    }

    /// Create the Actix-web application
    pub(crate) fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let query_config = web::QueryConfig::default().error_handler(|err, _req| {
            let response = MonitorError::validation(err.to_string()).error_response();
            InternalError::from_response(err, response).into()
        });

        App::new()
            .app_data(state)
            .app_data(query_config)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "agentos-monitor")))
            .configure(routes::status::configure_routes)
    }

    /// Start the HTTP server and run until it is shut down
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| MonitorError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
