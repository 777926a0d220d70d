use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_eligibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use seva_setu::config::AppConfig;
use seva_setu::eligibility::{
    EligibilityService, GeminiAdvisor, GeminiClient, GeminiFeed, QuestionCatalog, SchemeCatalog,
};
use seva_setu::error::AppError;
use seva_setu::telemetry;
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

    let gemini = GeminiClient::new(
        config.enrichment.gemini_api_key.clone(),
        config.enrichment.gemini_model.clone(),
    );
    if !gemini.has_credential() {
        info!("no Gemini credential configured; refresh and advice run in offline mode");
    }

    let service = Arc::new(EligibilityService::new(
        SchemeCatalog::standard()?,
        QuestionCatalog::standard(),
        Arc::new(GeminiFeed::new(gemini.clone())),
        Arc::new(GeminiAdvisor::new(gemini)),
    )?);

    let app = with_eligibility_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "scheme eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
