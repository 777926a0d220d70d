use std::sync::Arc;

use super::advice::{AdviceSource, DocumentAdvisor};
use super::catalog::{SchemeCatalog, SchemeStore};
use super::domain::{CitizenProfile, EligibilityResult, Language, Scheme};
use super::engine;
use super::questions::{QuestionCatalog, QuestionCatalogError};
use super::refresh::{CatalogRefresher, RefreshOutcome, UpdateFeed};

/// Facade composing the validated catalogs, the shared store, and the two
/// enrichment collaborators. Eligibility checks stay synchronous and pure;
/// only `refresh` and `advice` ever touch the network.
pub struct EligibilityService<F, A> {
    store: Arc<SchemeStore>,
    questions: Arc<QuestionCatalog>,
    refresher: CatalogRefresher<F>,
    advisor: DocumentAdvisor<A>,
}

impl<F, A> EligibilityService<F, A>
where
    F: UpdateFeed + 'static,
    A: AdviceSource + 'static,
{
    pub fn new(
        catalog: SchemeCatalog,
        questions: QuestionCatalog,
        feed: Arc<F>,
        advice: Arc<A>,
    ) -> Result<Self, QuestionCatalogError> {
        questions.validate_against(catalog.schemes())?;

        let store = Arc::new(SchemeStore::new(catalog));
        Ok(Self {
            store: Arc::clone(&store),
            questions: Arc::new(questions),
            refresher: CatalogRefresher::new(store, feed),
            advisor: DocumentAdvisor::new(advice),
        })
    }

    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    /// Current catalog snapshot. A concurrent refresh never changes a
    /// snapshot already handed out.
    pub fn schemes(&self) -> Arc<Vec<Scheme>> {
        self.store.snapshot()
    }

    /// Evaluate the profile against the current snapshot, one verdict per
    /// scheme in catalog order.
    pub fn check(&self, profile: &CitizenProfile) -> Vec<EligibilityResult> {
        let snapshot = self.store.snapshot();
        engine::evaluate(profile, &snapshot)
    }

    /// Trigger one best-effort catalog refresh.
    pub async fn refresh(&self) -> RefreshOutcome {
        self.refresher.refresh().await
    }

    /// Ask for document guidance; always produces a readable answer.
    pub async fn advice(
        &self,
        document: &str,
        profile: &CitizenProfile,
        language: Language,
    ) -> String {
        self.advisor.advise(document, profile, language).await
    }
}
