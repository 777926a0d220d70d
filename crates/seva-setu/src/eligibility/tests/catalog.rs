use std::sync::Arc;

use super::common::{requirement, scheme};
use crate::eligibility::catalog::{CatalogError, SchemeCatalog, SchemeStore};
use crate::eligibility::domain::{
    CategoryValue, Occupation, Operator, ProfileField, RationCard, Requirement, RequirementValue,
};

#[test]
fn built_in_catalog_passes_validation() {
    let catalog = SchemeCatalog::standard().expect("built-in catalog");
    let ids: Vec<&str> = catalog
        .schemes()
        .iter()
        .map(|scheme| scheme.id.as_str())
        .collect();
    assert_eq!(
        ids,
        ["pm-kisan", "pmay-g", "nsap-pension", "ujjwala", "ayushman"]
    );
}

#[test]
fn duplicate_scheme_ids_are_rejected() {
    let err = SchemeCatalog::new(vec![scheme("twice", Vec::new()), scheme("twice", Vec::new())])
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "twice"));
}

#[test]
fn missing_translation_is_rejected() {
    let mut broken = scheme("partial", Vec::new());
    broken.description.hi = String::new();

    let err = SchemeCatalog::new(vec![broken]).unwrap_err();
    assert!(matches!(err, CatalogError::MissingTranslation { .. }));
}

#[test]
fn ordering_operator_needs_a_numeric_operand() {
    let broken = scheme(
        "s",
        vec![requirement(
            ProfileField::Occupation,
            Operator::Gt,
            RequirementValue::Category(CategoryValue::Occupation(Occupation::Farmer)),
            "Nonsense comparison",
        )],
    );

    let err = SchemeCatalog::new(vec![broken]).unwrap_err();
    assert!(matches!(err, CatalogError::IncompatibleRequirement { .. }));
}

#[test]
fn empty_membership_set_is_rejected() {
    let broken = scheme(
        "s",
        vec![requirement(
            ProfileField::RationCard,
            Operator::Includes,
            RequirementValue::CategorySet(Vec::new()),
            "No one qualifies",
        )],
    );

    let err = SchemeCatalog::new(vec![broken]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyMembershipSet { .. }));
}

#[test]
fn membership_set_must_match_the_field_domain() {
    let broken = scheme(
        "s",
        vec![requirement(
            ProfileField::RationCard,
            Operator::Includes,
            RequirementValue::CategorySet(vec![
                CategoryValue::RationCard(RationCard::Bpl),
                CategoryValue::Occupation(Occupation::Farmer),
            ]),
            "Mixed domains",
        )],
    );

    let err = SchemeCatalog::new(vec![broken]).unwrap_err();
    assert!(matches!(err, CatalogError::IncompatibleRequirement { .. }));
}

#[test]
fn unsupported_operator_is_rejected_up_front() {
    let broken = scheme(
        "s",
        vec![requirement(
            ProfileField::Age,
            Operator::Unsupported,
            RequirementValue::Number(1),
            "Future operator",
        )],
    );

    let err = SchemeCatalog::new(vec![broken]).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedOperator { .. }));
}

#[test]
fn unknown_operator_name_maps_to_unsupported_and_is_rejected() {
    let parsed: Requirement = serde_json::from_value(serde_json::json!({
        "field": "age",
        "operator": "between",
        "value": { "number": 60 },
        "description": { "en": "Age window", "hi": "आयु सीमा" }
    }))
    .expect("unknown operator names still deserialize");
    assert_eq!(parsed.operator, Operator::Unsupported);

    let err = SchemeCatalog::new(vec![scheme("s", vec![parsed])]).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedOperator { .. }));
}

#[test]
fn store_snapshots_are_isolated_from_replacement() {
    let store = SchemeStore::new(SchemeCatalog::standard().expect("built-in catalog"));
    let before = store.snapshot();
    assert_eq!(before.len(), 5);

    store.replace(vec![scheme("only-one", Vec::new())]);

    assert_eq!(before.len(), 5, "handed-out snapshot must not change");
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn store_is_shareable_across_threads() {
    let store = Arc::new(SchemeStore::new(
        SchemeCatalog::standard().expect("built-in catalog"),
    ));

    let writer = {
        let store = Arc::clone(&store);
        std::thread::spawn(move || {
            store.replace(vec![scheme("replacement", Vec::new())]);
        })
    };
    writer.join().expect("writer thread");

    assert_eq!(store.snapshot().len(), 1);
}
