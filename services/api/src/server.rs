use crate::cli::ServeArgs;
use crate::infra::{financing_service, AppState};
use crate::routes::with_financing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use dealer_finance::config::AppConfig;
use dealer_finance::error::AppError;
use dealer_finance::telemetry;
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

    let service = financing_service(&config.financing)?;
    let reference_year = service.matcher().reference_year();

    let app = with_financing_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        reference_year,
        quote_term_months = config.financing.quote_term_months,
        "dealer finance service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
