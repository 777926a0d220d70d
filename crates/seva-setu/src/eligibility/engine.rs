//! Deterministic eligibility engine.
//!
//! Pure computation over in-memory data: no I/O, no clock, no hidden state.
//! Every well-typed input produces a verdict; anomalies the type system
//! cannot rule out are treated as unsatisfied predicates rather than errors.

use super::domain::{
    CitizenProfile, EligibilityResult, FieldValue, Operator, Requirement, RequirementValue, Scheme,
    Text,
};

fn missing_information() -> Text {
    Text::new("Missing info", "जानकारी अनुपलब्ध")
}

fn all_criteria_met() -> Text {
    Text::new(
        "You meet all basic criteria.",
        "आप सभी बुनियादी मानदंडों को पूरा करते हैं।",
    )
}

/// Evaluate the profile against every scheme, preserving catalog order.
pub fn evaluate(profile: &CitizenProfile, schemes: &[Scheme]) -> Vec<EligibilityResult> {
    schemes
        .iter()
        .map(|scheme| evaluate_scheme(profile, scheme))
        .collect()
}

/// Evaluate a single scheme.
///
/// Requirements are checked in declaration order and every failure is
/// collected; an unanswered field counts as a failure with a generic
/// missing-information reason. An eligible scheme ends up with exactly one
/// confirmatory reason. A scheme with no requirements is vacuously eligible.
pub fn evaluate_scheme(profile: &CitizenProfile, scheme: &Scheme) -> EligibilityResult {
    let mut eligible = true;
    let mut reasons = Vec::new();

    for requirement in &scheme.requirements {
        let Some(value) = profile.value_of(requirement.field) else {
            eligible = false;
            reasons.push(missing_information());
            continue;
        };

        if !satisfies(value, requirement) {
            eligible = false;
            reasons.push(requirement.description.clone());
        }
    }

    if eligible {
        reasons = vec![all_criteria_met()];
    }

    EligibilityResult {
        scheme_id: scheme.id.clone(),
        is_eligible: eligible,
        reasons,
        documents: scheme.documents.clone(),
    }
}

fn satisfies(value: FieldValue, requirement: &Requirement) -> bool {
    match (requirement.operator, &requirement.value) {
        (Operator::Eq, expected) => equals(value, expected),
        (Operator::Neq, expected) => !equals(value, expected),
        (Operator::Gt, RequirementValue::Number(limit)) => {
            as_number(value).is_some_and(|n| n > *limit)
        }
        (Operator::Gte, RequirementValue::Number(limit)) => {
            as_number(value).is_some_and(|n| n >= *limit)
        }
        (Operator::Lt, RequirementValue::Number(limit)) => {
            as_number(value).is_some_and(|n| n < *limit)
        }
        (Operator::Lte, RequirementValue::Number(limit)) => {
            as_number(value).is_some_and(|n| n <= *limit)
        }
        (Operator::Includes, RequirementValue::CategorySet(set)) => match value {
            FieldValue::Category(category) => set.contains(&category),
            _ => false,
        },
        // Unknown operators and malformed operator/value pairings fail closed.
        _ => false,
    }
}

fn equals(value: FieldValue, expected: &RequirementValue) -> bool {
    match (value, expected) {
        (FieldValue::Number(n), RequirementValue::Number(e)) => n == *e,
        (FieldValue::Flag(b), RequirementValue::Flag(e)) => b == *e,
        (FieldValue::Category(c), RequirementValue::Category(e)) => c == *e,
        _ => false,
    }
}

fn as_number(value: FieldValue) -> Option<u32> {
    match value {
        FieldValue::Number(n) => Some(n),
        _ => None,
    }
}
