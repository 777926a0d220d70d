//! Document advice collaborator: optional, fallible, and always answered.
//!
//! Whatever happens on the wire, the citizen sees a human-readable sentence
//! in their language; eligibility results are never affected.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::domain::{CitizenProfile, Language};
use super::gemini::{FeedError, GeminiClient};

/// Source of free-form guidance on obtaining a document.
#[async_trait]
pub trait AdviceSource: Send + Sync {
    async fn document_advice(
        &self,
        document: &str,
        profile: &CitizenProfile,
        language: Language,
    ) -> Result<String, FeedError>;
}

/// Advice source used when the assistant is not configured.
#[derive(Debug, Default, Clone)]
pub struct OfflineAdvisor;

#[async_trait]
impl AdviceSource for OfflineAdvisor {
    async fn document_advice(
        &self,
        _document: &str,
        _profile: &CitizenProfile,
        _language: Language,
    ) -> Result<String, FeedError> {
        Err(FeedError::MissingCredential)
    }
}

/// Shown when no assistant credential is configured.
pub fn offline_guidance(language: Language) -> &'static str {
    match language {
        Language::En => "AI Assistant is offline. Please visit your Gram Panchayat office.",
        Language::Hi => "एआई सहायक ऑफ़लाइन है। कृपया अपनी ग्राम पंचायत कार्यालय पर जाएँ।",
    }
}

/// Shown when a request fails or comes back empty.
pub fn apology(language: Language) -> &'static str {
    match language {
        Language::En => "Sorry, I cannot help right now. Please check with your local office.",
        Language::Hi => "क्षमा करें, मैं अभी मदद नहीं कर सकता। कृपया अपने स्थानीय कार्यालय से संपर्क करें।",
    }
}

/// Wrapper guaranteeing a usable answer from any `AdviceSource`.
pub struct DocumentAdvisor<A> {
    source: Arc<A>,
}

impl<A: AdviceSource> DocumentAdvisor<A> {
    pub fn new(source: Arc<A>) -> Self {
        Self { source }
    }

    /// Total function: errors and blank replies become localized fallbacks.
    pub async fn advise(
        &self,
        document: &str,
        profile: &CitizenProfile,
        language: Language,
    ) -> String {
        match self
            .source
            .document_advice(document, profile, language)
            .await
        {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => apology(language).to_string(),
            Err(FeedError::MissingCredential) => offline_guidance(language).to_string(),
            Err(error) => {
                warn!(%error, document, "advice request failed");
                apology(language).to_string()
            }
        }
    }
}

/// Live advisor prompting Gemini with the user's situation.
pub struct GeminiAdvisor {
    client: GeminiClient,
}

impl GeminiAdvisor {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn prompt(document: &str, profile: &CitizenProfile, language: Language) -> String {
        let residence = profile
            .residence
            .map(|value| format!("{value:?}"))
            .unwrap_or_else(|| "unknown".to_string());
        let occupation = profile
            .occupation
            .map(|value| format!("{value:?}"))
            .unwrap_or_else(|| "unknown".to_string());
        let language = match language {
            Language::En => "English",
            Language::Hi => "Hindi (Devanagari script)",
        };

        format!(
            "You are a helpful village assistant in India.\n\
             A user needs help with a document: \"{document}\".\n\n\
             User Profile:\n\
             - Residence: {residence}\n\
             - Occupation: {occupation}\n\n\
             Explain in 2 simple sentences where to go and what to do to get this document.\n\
             Language: {language}.\n\
             Tone: Respectful, simple, non-bureaucratic."
        )
    }
}

#[async_trait]
impl AdviceSource for GeminiAdvisor {
    async fn document_advice(
        &self,
        document: &str,
        profile: &CitizenProfile,
        language: Language,
    ) -> Result<String, FeedError> {
        let generated = self
            .client
            .generate(&Self::prompt(document, profile, language), false, false)
            .await?;
        Ok(generated.text)
    }
}
