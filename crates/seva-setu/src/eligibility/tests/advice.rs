use std::sync::Arc;

use super::common::{farmer_profile, BlankAdvisor, EchoAdvisor, FailingAdvisor};
use crate::eligibility::advice::{apology, offline_guidance, DocumentAdvisor, OfflineAdvisor};
use crate::eligibility::domain::Language;

#[tokio::test]
async fn unconfigured_advisor_points_to_the_panchayat() {
    let advisor = DocumentAdvisor::new(Arc::new(OfflineAdvisor));

    let en = advisor
        .advise("Aadhaar Card", &farmer_profile(), Language::En)
        .await;
    assert_eq!(
        en,
        "AI Assistant is offline. Please visit your Gram Panchayat office."
    );

    let hi = advisor
        .advise("Aadhaar Card", &farmer_profile(), Language::Hi)
        .await;
    assert_eq!(hi, offline_guidance(Language::Hi));
}

#[tokio::test]
async fn transport_failure_becomes_a_localized_apology() {
    let advisor = DocumentAdvisor::new(Arc::new(FailingAdvisor));

    let en = advisor
        .advise("Ration Card", &farmer_profile(), Language::En)
        .await;
    assert_eq!(en, apology(Language::En));

    let hi = advisor
        .advise("Ration Card", &farmer_profile(), Language::Hi)
        .await;
    assert_eq!(hi, apology(Language::Hi));
}

#[tokio::test]
async fn blank_reply_becomes_an_apology() {
    let advisor = DocumentAdvisor::new(Arc::new(BlankAdvisor));

    let answer = advisor
        .advise("Bank Passbook", &farmer_profile(), Language::En)
        .await;
    assert_eq!(answer, apology(Language::En));
}

#[tokio::test]
async fn usable_reply_passes_through_untouched() {
    let advisor = DocumentAdvisor::new(Arc::new(EchoAdvisor));

    let answer = advisor
        .advise("Land Record", &farmer_profile(), Language::En)
        .await;
    assert_eq!(answer, "Visit the tehsil office for your Land Record.");
}
