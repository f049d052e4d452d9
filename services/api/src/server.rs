use crate::cli::ServeArgs;
use crate::infra::{
    default_scoring_policy, sample_programs, AppState, InMemoryProfileStore,
    InMemoryProgramCatalog,
};
use crate::routes::service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use grants_assist::config::AppConfig;
use grants_assist::eligibility::EligibilityService;
use grants_assist::error::AppError;
use grants_assist::telemetry;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let profiles = Arc::new(InMemoryProfileStore::default());
    let catalog = Arc::new(InMemoryProgramCatalog::default());
    if config.catalog.seed_sample_programs {
        catalog.extend(sample_programs(Local::now().date_naive()));
        info!(count = catalog.count(), "seeded sample program catalog");
    }

    let service = Arc::new(EligibilityService::new(
        profiles,
        catalog.clone(),
        default_scoring_policy(),
    ));

    let app = service_routes(service, catalog)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "grant eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
