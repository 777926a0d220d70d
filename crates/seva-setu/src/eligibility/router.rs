use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::advice::AdviceSource;
use super::domain::{CitizenProfile, EligibilityResult, Language, Scheme};
use super::questions::Question;
use super::refresh::UpdateFeed;
use super::service::EligibilityService;

/// Router builder exposing the eligibility endpoints.
pub fn eligibility_router<F, A>(service: Arc<EligibilityService<F, A>>) -> Router
where
    F: UpdateFeed + 'static,
    A: AdviceSource + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler::<F, A>))
        .route("/api/v1/schemes", get(schemes_handler::<F, A>))
        .route("/api/v1/schemes/refresh", post(refresh_handler::<F, A>))
        .route("/api/v1/eligibility", post(evaluate_handler::<F, A>))
        .route("/api/v1/advice", post(advice_handler::<F, A>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse {
    pub(crate) questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SchemesResponse {
    pub(crate) schemes: Vec<Scheme>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdviceRequest {
    pub(crate) document: String,
    #[serde(default)]
    pub(crate) profile: CitizenProfile,
    pub(crate) language: Language,
}

pub(crate) async fn questions_handler<F, A>(
    State(service): State<Arc<EligibilityService<F, A>>>,
) -> axum::Json<QuestionsResponse>
where
    F: UpdateFeed + 'static,
    A: AdviceSource + 'static,
{
    axum::Json(QuestionsResponse {
        questions: service.questions().questions().to_vec(),
    })
}

pub(crate) async fn schemes_handler<F, A>(
    State(service): State<Arc<EligibilityService<F, A>>>,
) -> axum::Json<SchemesResponse>
where
    F: UpdateFeed + 'static,
    A: AdviceSource + 'static,
{
    axum::Json(SchemesResponse {
        schemes: service.schemes().as_ref().clone(),
    })
}

pub(crate) async fn evaluate_handler<F, A>(
    State(service): State<Arc<EligibilityService<F, A>>>,
    axum::Json(profile): axum::Json<CitizenProfile>,
) -> axum::Json<Vec<EligibilityResult>>
where
    F: UpdateFeed + 'static,
    A: AdviceSource + 'static,
{
    axum::Json(service.check(&profile))
}

pub(crate) async fn refresh_handler<F, A>(
    State(service): State<Arc<EligibilityService<F, A>>>,
) -> axum::Json<serde_json::Value>
where
    F: UpdateFeed + 'static,
    A: AdviceSource + 'static,
{
    let outcome = service.refresh().await;
    axum::Json(json!({ "updated": outcome.updated }))
}

pub(crate) async fn advice_handler<F, A>(
    State(service): State<Arc<EligibilityService<F, A>>>,
    axum::Json(request): axum::Json<AdviceRequest>,
) -> axum::Json<serde_json::Value>
where
    F: UpdateFeed + 'static,
    A: AdviceSource + 'static,
{
    let advice = service
        .advice(&request.document, &request.profile, request.language)
        .await;
    axum::Json(json!({ "advice": advice }))
}
