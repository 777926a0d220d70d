//! Welfare scheme eligibility: profile and scheme model, the deterministic
//! rule-evaluation engine, bilingual catalogs, and the optional enrichment
//! collaborators (live catalog refresh, document advice).

pub mod advice;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod gemini;
pub mod questions;
pub mod refresh;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use advice::{
    apology, offline_guidance, AdviceSource, DocumentAdvisor, GeminiAdvisor, OfflineAdvisor,
};
pub use catalog::{builtin_schemes, CatalogConfig, CatalogError, SchemeCatalog, SchemeStore};
pub use domain::{
    AnswerError, ApplicationMode, Caste, CategoryKind, CategoryValue, CitizenProfile, Document,
    EligibilityResult, FieldKind, FieldValue, Gender, HouseType, Language, Occupation, Operator,
    ProfileField, RationCard, Requirement, RequirementValue, Residence, Scheme, SchemeId, Text,
};
pub use engine::{evaluate, evaluate_scheme};
pub use gemini::{FeedError, GeminiClient};
pub use questions::{InputKind, OptionIcon, Question, QuestionCatalog, QuestionCatalogError};
pub use refresh::{
    merge_updates, CatalogRefresher, DraftText, FeedPayload, GeminiFeed, OfflineFeed,
    RefreshOutcome, SchemeUpdate, UpdateFeed, MAX_SOURCE_URLS,
};
pub use router::eligibility_router;
pub use service::EligibilityService;
