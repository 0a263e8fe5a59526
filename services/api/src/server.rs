use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use disclosure_check::config::AppConfig;
use disclosure_check::error::AppError;
use disclosure_check::telemetry;
use disclosure_check::wizard::auth::StubAuthGateway;
use disclosure_check::wizard::shared_session;

use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::{with_wizard_routes, SharedAuthGateway};

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

    let auth: SharedAuthGateway = Arc::new(StubAuthGateway::default());
    let session = shared_session();

    let app = with_wizard_routes(session)
        .layer(Extension(app_state))
        .layer(Extension(auth))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "disclosure check service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
