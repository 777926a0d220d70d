use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::eligibility::advice::{AdviceSource, OfflineAdvisor};
use crate::eligibility::catalog::SchemeCatalog;
use crate::eligibility::domain::{
    ApplicationMode, CategoryValue, CitizenProfile, Document, Gender, HouseType, Language,
    Occupation, Operator, ProfileField, RationCard, Requirement, RequirementValue, Residence,
    Scheme, SchemeId, Text,
};
use crate::eligibility::gemini::FeedError;
use crate::eligibility::questions::QuestionCatalog;
use crate::eligibility::refresh::{DraftText, FeedPayload, OfflineFeed, SchemeUpdate, UpdateFeed};
use crate::eligibility::router::eligibility_router;
use crate::eligibility::service::EligibilityService;

pub(super) fn text(en: &str, hi: &str) -> Text {
    Text::new(en, hi)
}

pub(super) fn requirement(
    field: ProfileField,
    operator: Operator,
    value: RequirementValue,
    description_en: &str,
) -> Requirement {
    Requirement {
        field,
        operator,
        value,
        description: text(description_en, &format!("{description_en} (hi)")),
    }
}

pub(super) fn scheme(id: &str, requirements: Vec<Requirement>) -> Scheme {
    Scheme {
        id: SchemeId::new(id),
        name: text("Test Scheme", "परीक्षण योजना"),
        benefit_short: text("Test benefit", "परीक्षण लाभ"),
        description: text("A scheme used in tests.", "परीक्षण में प्रयुक्त योजना।"),
        requirements,
        documents: vec![Document {
            name: text("Aadhaar Card", "आधार कार्ड"),
            description: text("Identity Proof", "पहचान प्रमाण"),
        }],
        application_mode: ApplicationMode::Both,
        application_url: None,
        application_instructions: text("Apply at the local office.", "स्थानीय कार्यालय में आवेदन करें।"),
        last_updated: None,
        source_urls: Vec::new(),
    }
}

pub(super) fn pm_kisan_requirements() -> Vec<Requirement> {
    vec![
        requirement(
            ProfileField::Occupation,
            Operator::Eq,
            RequirementValue::Category(CategoryValue::Occupation(Occupation::Farmer)),
            "Must be a Farmer",
        ),
        requirement(
            ProfileField::LandOwner,
            Operator::Eq,
            RequirementValue::Flag(true),
            "Must own land",
        ),
        requirement(
            ProfileField::AnnualIncome,
            Operator::Lt,
            RequirementValue::Number(250_000),
            "Income below tax limit",
        ),
    ]
}

pub(super) fn farmer_profile() -> CitizenProfile {
    CitizenProfile {
        age: 35,
        gender: Some(Gender::Male),
        residence: Some(Residence::Rural),
        caste: Some(crate::eligibility::domain::Caste::Obc),
        occupation: Some(Occupation::Farmer),
        land_owner: Some(true),
        house_type: Some(HouseType::Kutcha),
        ration_card: Some(RationCard::Bpl),
        annual_income: 90_000,
        disability: Some(false),
    }
}

pub(super) fn elderly_profile() -> CitizenProfile {
    CitizenProfile {
        age: 65,
        gender: Some(Gender::Female),
        residence: Some(Residence::Rural),
        caste: None,
        occupation: Some(Occupation::Unemployed),
        land_owner: Some(false),
        house_type: Some(HouseType::Kutcha),
        ration_card: Some(RationCard::Bpl),
        annual_income: 45_000,
        disability: None,
    }
}

pub(super) fn complete_update(id: &str) -> SchemeUpdate {
    SchemeUpdate {
        id: id.to_string(),
        benefit_short: DraftText {
            en: Some("Updated benefit".to_string()),
            hi: Some("अद्यतन लाभ".to_string()),
        },
        description: DraftText {
            en: Some("Updated description.".to_string()),
            hi: Some("अद्यतन विवरण।".to_string()),
        },
        application_url: Some("https://updated.gov.in/".to_string()),
    }
}

/// Feed that always hands back a canned payload.
#[derive(Clone)]
pub(super) struct StaticFeed {
    pub(super) payload: FeedPayload,
}

#[async_trait]
impl UpdateFeed for StaticFeed {
    async fn fetch(&self, _schemes: &[Scheme]) -> Result<FeedPayload, FeedError> {
        Ok(self.payload.clone())
    }
}

/// Feed that always fails at the transport layer.
pub(super) struct FailingFeed;

#[async_trait]
impl UpdateFeed for FailingFeed {
    async fn fetch(&self, _schemes: &[Scheme]) -> Result<FeedPayload, FeedError> {
        Err(FeedError::Transport("connection refused".to_string()))
    }
}

/// Advisor echoing the document name back.
pub(super) struct EchoAdvisor;

#[async_trait]
impl AdviceSource for EchoAdvisor {
    async fn document_advice(
        &self,
        document: &str,
        _profile: &CitizenProfile,
        _language: Language,
    ) -> Result<String, FeedError> {
        Ok(format!("Visit the tehsil office for your {document}."))
    }
}

/// Advisor that always fails mid-request.
pub(super) struct FailingAdvisor;

#[async_trait]
impl AdviceSource for FailingAdvisor {
    async fn document_advice(
        &self,
        _document: &str,
        _profile: &CitizenProfile,
        _language: Language,
    ) -> Result<String, FeedError> {
        Err(FeedError::Transport("timed out".to_string()))
    }
}

/// Advisor that replies with whitespace only.
pub(super) struct BlankAdvisor;

#[async_trait]
impl AdviceSource for BlankAdvisor {
    async fn document_advice(
        &self,
        _document: &str,
        _profile: &CitizenProfile,
        _language: Language,
    ) -> Result<String, FeedError> {
        Ok("   ".to_string())
    }
}

pub(super) fn build_service() -> Arc<EligibilityService<OfflineFeed, OfflineAdvisor>> {
    build_service_with(OfflineFeed, OfflineAdvisor)
}

pub(super) fn build_service_with<F, A>(feed: F, advice: A) -> Arc<EligibilityService<F, A>>
where
    F: UpdateFeed + 'static,
    A: AdviceSource + 'static,
{
    let catalog = SchemeCatalog::standard().expect("built-in catalog is valid");
    let questions = QuestionCatalog::standard();
    Arc::new(
        EligibilityService::new(catalog, questions, Arc::new(feed), Arc::new(advice))
            .expect("questions cover the built-in catalog"),
    )
}

pub(super) fn router_with_service<F, A>(service: Arc<EligibilityService<F, A>>) -> axum::Router
where
    F: UpdateFeed + 'static,
    A: AdviceSource + 'static,
{
    eligibility_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
