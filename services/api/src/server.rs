use crate::cli::ServeArgs;
use crate::infra::{build_store, AppState, LogNotifier};
use crate::routes::api_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nexus_crm::config::AppConfig;
use nexus_crm::error::AppError;
use nexus_crm::telemetry;
use nexus_crm::workflows::content::GeminiClient;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if args.empty {
        config.seed_fixtures = false;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = build_store(config.seed_fixtures);
    let generator = Arc::new(GeminiClient::from_config(&config.content));
    let app = api_router(
        store,
        Arc::new(LogNotifier),
        generator,
        config.content.api_key.clone(),
    )
    .layer(Extension(app_state))
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded = config.seed_fixtures,
        content_key = config.content.api_key.is_some(),
        "nexus crm api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
