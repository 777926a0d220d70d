//! Best-effort live refresh of scheme descriptions.
//!
//! The feed may replace bilingual copy and application URLs, never identity
//! or requirement lists. Every failure path keeps the previous catalog.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::SchemeStore;
use super::domain::Scheme;
use super::gemini::{FeedError, GeminiClient};

/// Provenance cap: at most this many grounding URLs are attached per update.
pub const MAX_SOURCE_URLS: usize = 3;

/// Possibly-partial bilingual text as delivered by the feed. Only a pair
/// complete in both languages is ever accepted into the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftText {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub hi: Option<String>,
}

impl DraftText {
    fn complete(&self) -> Option<super::domain::Text> {
        match (&self.en, &self.hi) {
            (Some(en), Some(hi)) if !en.trim().is_empty() && !hi.trim().is_empty() => {
                Some(super::domain::Text::new(en.clone(), hi.clone()))
            }
            _ => None,
        }
    }
}

/// One per-scheme update proposed by the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeUpdate {
    pub id: String,
    #[serde(default)]
    pub benefit_short: DraftText,
    #[serde(default)]
    pub description: DraftText,
    #[serde(default)]
    pub application_url: Option<String>,
}

/// Everything a feed round-trip produced.
#[derive(Debug, Clone, Default)]
pub struct FeedPayload {
    pub updates: Vec<SchemeUpdate>,
    pub source_urls: Vec<String>,
}

/// Source of scheme updates. Implementations must not panic; they report
/// failures through `FeedError` and the refresher absorbs them.
#[async_trait]
pub trait UpdateFeed: Send + Sync {
    async fn fetch(&self, schemes: &[Scheme]) -> Result<FeedPayload, FeedError>;
}

/// Feed used when live updates are not configured.
#[derive(Debug, Default, Clone)]
pub struct OfflineFeed;

#[async_trait]
impl UpdateFeed for OfflineFeed {
    async fn fetch(&self, _schemes: &[Scheme]) -> Result<FeedPayload, FeedError> {
        Err(FeedError::MissingCredential)
    }
}

/// Merge accepted updates over the current catalog.
///
/// An update is accepted only when both the benefit summary and description
/// are fully populated in both languages; anything less leaves that scheme's
/// record untouched. Identity and requirements are never modified, so the
/// merged catalog needs no revalidation. Returns the merged list and whether
/// any scheme actually changed.
pub fn merge_updates(
    current: &[Scheme],
    payload: &FeedPayload,
    now: DateTime<Utc>,
) -> (Vec<Scheme>, bool) {
    let mut accepted_any = false;

    let merged = current
        .iter()
        .map(|scheme| {
            let Some(update) = payload
                .updates
                .iter()
                .find(|update| update.id == scheme.id.0)
            else {
                return scheme.clone();
            };

            let (Some(benefit_short), Some(description)) =
                (update.benefit_short.complete(), update.description.complete())
            else {
                return scheme.clone();
            };

            accepted_any = true;
            let mut next = scheme.clone();
            next.benefit_short = benefit_short;
            next.description = description;
            if let Some(url) = update
                .application_url
                .clone()
                .filter(|url| !url.trim().is_empty())
            {
                next.application_url = Some(url);
            }
            next.last_updated = Some(now);
            next.source_urls = payload
                .source_urls
                .iter()
                .take(MAX_SOURCE_URLS)
                .cloned()
                .collect();
            next
        })
        .collect();

    (merged, accepted_any)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    pub updated: bool,
}

/// Drives the feed and writes accepted updates into the store.
pub struct CatalogRefresher<F> {
    store: Arc<SchemeStore>,
    feed: Arc<F>,
}

impl<F: UpdateFeed> CatalogRefresher<F> {
    pub fn new(store: Arc<SchemeStore>, feed: Arc<F>) -> Self {
        Self { store, feed }
    }

    /// One refresh attempt. Never errors: a failed or empty feed leaves the
    /// catalog exactly as it was and reports `updated: false`.
    pub async fn refresh(&self) -> RefreshOutcome {
        let snapshot = self.store.snapshot();

        let payload = match self.feed.fetch(&snapshot).await {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "scheme feed unavailable, keeping static catalog");
                return RefreshOutcome { updated: false };
            }
        };

        let (merged, updated) = merge_updates(&snapshot, &payload, Utc::now());
        if updated {
            self.store.replace(merged);
        }

        RefreshOutcome { updated }
    }
}

/// Live feed over Gemini with Google-Search grounding, asking for the latest
/// benefit summaries and official application URLs for the known schemes.
pub struct GeminiFeed {
    client: GeminiClient,
}

impl GeminiFeed {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn prompt(schemes: &[Scheme]) -> String {
        let scheme_names = schemes
            .iter()
            .map(|scheme| format!("{} ({})", scheme.id.0, scheme.name.en))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "You are a government data verification system.\n\
             Target Schemes: {scheme_names}.\n\n\
             Task:\n\
             1. Search for the absolute latest benefit amounts, subsidy limits, and key changes for these schemes in India.\n\
             2. Search for the OFFICIAL application website URL (gov.in or nic.in) if online application is available.\n\
             3. Extract the current benefit summary and a short 1-sentence description, each in English and Hindi.\n\
             4. Return a JSON array of objects with fields: id, benefitShort {{en, hi}}, description {{en, hi}}, applicationUrl."
        )
    }
}

#[async_trait]
impl UpdateFeed for GeminiFeed {
    async fn fetch(&self, schemes: &[Scheme]) -> Result<FeedPayload, FeedError> {
        let generated = self
            .client
            .generate(&Self::prompt(schemes), true, true)
            .await?;

        let body = strip_code_fences(&generated.text);
        let updates: Vec<SchemeUpdate> = serde_json::from_str(body)
            .map_err(|err| FeedError::Malformed(err.to_string()))?;

        Ok(FeedPayload {
            updates,
            source_urls: generated.source_urls,
        })
    }
}

/// Models occasionally wrap JSON replies in Markdown fences despite the
/// requested MIME type.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
