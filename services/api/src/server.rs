use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_classification_routes;
use axum::http::{header, HeaderValue, Method};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use risk_auditor::config::{AppConfig, ConfigError};
use risk_auditor::error::AppError;
use risk_auditor::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let mut app = with_classification_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);
    if let Some(cors) = cors_layer(&config.server.allowed_origins)? {
        app = app.layer(cors);
    }

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        cors_origins = config.server.allowed_origins.len(),
        "risk classification service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<Option<CorsLayer>, ConfigError> {
    if origins.is_empty() {
        return Ok(None);
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin {
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    ))
}
