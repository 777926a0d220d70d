use super::common::requirement;
use crate::eligibility::catalog::SchemeCatalog;
use crate::eligibility::domain::{
    CitizenProfile, FieldValue, Gender, Operator, ProfileField, RequirementValue, Text,
};
use crate::eligibility::questions::{
    InputKind, Question, QuestionCatalog, QuestionCatalogError, QuestionOption,
};

fn number_question(field: ProfileField, min: Option<u32>, max: Option<u32>) -> Question {
    Question {
        field,
        kind: InputKind::Number,
        text: Text::new("How many?", "कितने?"),
        sub_text: None,
        options: Vec::new(),
        min,
        max,
    }
}

#[test]
fn standard_flow_has_nine_questions_starting_with_age() {
    let catalog = QuestionCatalog::standard();
    assert_eq!(catalog.questions().len(), 9);
    assert_eq!(catalog.questions()[0].field, ProfileField::Age);
}

#[test]
fn standard_flow_covers_every_built_in_requirement() {
    let questions = QuestionCatalog::standard();
    let schemes = SchemeCatalog::standard().expect("built-in catalog");
    questions
        .validate_against(schemes.schemes())
        .expect("every requirement field has a question");
}

#[test]
fn question_lookup_by_field() {
    let catalog = QuestionCatalog::standard();
    let question = catalog
        .question_for(ProfileField::RationCard)
        .expect("ration card question exists");
    assert_eq!(question.options.len(), 4);
    assert!(catalog.question_for(ProfileField::Disability).is_none());
}

#[test]
fn numeric_zero_counts_as_unanswered() {
    let catalog = QuestionCatalog::standard();
    let age = catalog
        .question_for(ProfileField::Age)
        .expect("age question");
    let mut profile = CitizenProfile::default();

    assert!(!age.is_answered(&profile));
    profile.age = 30;
    assert!(age.is_answered(&profile));
}

#[test]
fn categorical_question_is_unanswered_until_selected() {
    let catalog = QuestionCatalog::standard();
    let gender = catalog
        .question_for(ProfileField::Gender)
        .expect("gender question");
    let mut profile = CitizenProfile::default();

    assert!(!gender.is_answered(&profile));
    profile.gender = Some(Gender::Female);
    assert!(gender.is_answered(&profile));
}

#[test]
fn uncovered_requirement_field_is_reported() {
    let schemes = vec![super::common::scheme(
        "s",
        vec![requirement(
            ProfileField::Disability,
            Operator::Eq,
            RequirementValue::Flag(true),
            "Must hold a disability certificate",
        )],
    )];

    let err = QuestionCatalog::standard()
        .validate_against(&schemes)
        .unwrap_err();
    assert!(matches!(
        err,
        QuestionCatalogError::UncoveredField {
            field: ProfileField::Disability
        }
    ));
}

#[test]
fn option_from_the_wrong_domain_is_reported() {
    let catalog = QuestionCatalog::new(vec![Question {
        field: ProfileField::Gender,
        kind: InputKind::Select,
        text: Text::new("Select Gender", "लिंग चुनें"),
        sub_text: None,
        options: vec![QuestionOption {
            value: FieldValue::Flag(true),
            label: Text::new("Yes", "हाँ"),
            icon: None,
        }],
        min: None,
        max: None,
    }]);

    let err = catalog.validate_against(&[]).unwrap_err();
    assert!(matches!(
        err,
        QuestionCatalogError::OptionKindMismatch {
            field: ProfileField::Gender
        }
    ));
}

#[test]
fn number_question_requires_bounds() {
    let catalog = QuestionCatalog::new(vec![number_question(ProfileField::Age, Some(14), None)]);
    let err = catalog.validate_against(&[]).unwrap_err();
    assert!(matches!(err, QuestionCatalogError::MissingBounds { .. }));
}

#[test]
fn number_question_rejects_inverted_bounds() {
    let catalog = QuestionCatalog::new(vec![number_question(
        ProfileField::Age,
        Some(100),
        Some(14),
    )]);
    let err = catalog.validate_against(&[]).unwrap_err();
    assert!(matches!(err, QuestionCatalogError::InvertedBounds { .. }));
}
