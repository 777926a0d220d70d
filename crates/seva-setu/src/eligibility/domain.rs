use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Languages every user-facing catalog string must render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

/// Bilingual text pair. Both renderings are mandatory for catalog data;
/// a missing translation is rejected at catalog construction, not at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub en: String,
    pub hi: String,
}

impl Text {
    pub fn new(en: impl Into<String>, hi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            hi: hi.into(),
        }
    }

    pub fn render(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Hi => &self.hi,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.hi.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Residence {
    Rural,
    Urban,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Caste {
    Sc,
    St,
    Obc,
    General,
}

/// Ration card category; `None` means the household holds no card at all,
/// which is still an answered state distinct from an unanswered profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RationCard {
    Bpl,
    Aay,
    Apl,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    Farmer,
    Laborer,
    Student,
    Unemployed,
    Salaried,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseType {
    Kutcha,
    Pucca,
    Homeless,
}

/// One categorical answer, tagged by the enumeration it belongs to so the
/// operator/value pairing stays statically checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryValue {
    Gender(Gender),
    Residence(Residence),
    Caste(Caste),
    RationCard(RationCard),
    Occupation(Occupation),
    HouseType(HouseType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Gender,
    Residence,
    Caste,
    RationCard,
    Occupation,
    HouseType,
}

impl CategoryValue {
    pub const fn kind(self) -> CategoryKind {
        match self {
            CategoryValue::Gender(_) => CategoryKind::Gender,
            CategoryValue::Residence(_) => CategoryKind::Residence,
            CategoryValue::Caste(_) => CategoryKind::Caste,
            CategoryValue::RationCard(_) => CategoryKind::RationCard,
            CategoryValue::Occupation(_) => CategoryKind::Occupation,
            CategoryValue::HouseType(_) => CategoryKind::HouseType,
        }
    }
}

/// Profile attributes addressable by requirements and questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Age,
    Gender,
    Residence,
    Caste,
    Occupation,
    LandOwner,
    HouseType,
    RationCard,
    AnnualIncome,
    Disability,
}

/// Value domain of a profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Flag,
    Category(CategoryKind),
}

impl ProfileField {
    pub const fn kind(self) -> FieldKind {
        match self {
            ProfileField::Age | ProfileField::AnnualIncome => FieldKind::Number,
            ProfileField::LandOwner | ProfileField::Disability => FieldKind::Flag,
            ProfileField::Gender => FieldKind::Category(CategoryKind::Gender),
            ProfileField::Residence => FieldKind::Category(CategoryKind::Residence),
            ProfileField::Caste => FieldKind::Category(CategoryKind::Caste),
            ProfileField::Occupation => FieldKind::Category(CategoryKind::Occupation),
            ProfileField::HouseType => FieldKind::Category(CategoryKind::HouseType),
            ProfileField::RationCard => FieldKind::Category(CategoryKind::RationCard),
        }
    }
}

/// One answered value: a number, a yes/no flag, or a categorical choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Number(u32),
    Flag(bool),
    Category(CategoryValue),
}

impl FieldValue {
    pub const fn kind(self) -> FieldKind {
        match self {
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Category(value) => FieldKind::Category(value.kind()),
        }
    }
}

/// The citizen's answers driving evaluation. Numeric fields start at zero and
/// are always considered answered; categorical and boolean fields are `None`
/// until the question flow fills them in. Session-scoped, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CitizenProfile {
    pub age: u32,
    pub gender: Option<Gender>,
    pub residence: Option<Residence>,
    pub caste: Option<Caste>,
    pub occupation: Option<Occupation>,
    pub land_owner: Option<bool>,
    pub house_type: Option<HouseType>,
    pub ration_card: Option<RationCard>,
    pub annual_income: u32,
    pub disability: Option<bool>,
}

impl CitizenProfile {
    /// Value currently held for `field`, or `None` when not yet answered.
    pub fn value_of(&self, field: ProfileField) -> Option<FieldValue> {
        match field {
            ProfileField::Age => Some(FieldValue::Number(self.age)),
            ProfileField::AnnualIncome => Some(FieldValue::Number(self.annual_income)),
            ProfileField::Gender => self
                .gender
                .map(|value| FieldValue::Category(CategoryValue::Gender(value))),
            ProfileField::Residence => self
                .residence
                .map(|value| FieldValue::Category(CategoryValue::Residence(value))),
            ProfileField::Caste => self
                .caste
                .map(|value| FieldValue::Category(CategoryValue::Caste(value))),
            ProfileField::Occupation => self
                .occupation
                .map(|value| FieldValue::Category(CategoryValue::Occupation(value))),
            ProfileField::HouseType => self
                .house_type
                .map(|value| FieldValue::Category(CategoryValue::HouseType(value))),
            ProfileField::RationCard => self
                .ration_card
                .map(|value| FieldValue::Category(CategoryValue::RationCard(value))),
            ProfileField::LandOwner => self.land_owner.map(FieldValue::Flag),
            ProfileField::Disability => self.disability.map(FieldValue::Flag),
        }
    }

    /// Record one answer, rejecting values whose kind does not match the field.
    pub fn answer(&mut self, field: ProfileField, value: FieldValue) -> Result<(), AnswerError> {
        match (field, value) {
            (ProfileField::Age, FieldValue::Number(n)) => self.age = n,
            (ProfileField::AnnualIncome, FieldValue::Number(n)) => self.annual_income = n,
            (ProfileField::Gender, FieldValue::Category(CategoryValue::Gender(v))) => {
                self.gender = Some(v)
            }
            (ProfileField::Residence, FieldValue::Category(CategoryValue::Residence(v))) => {
                self.residence = Some(v)
            }
            (ProfileField::Caste, FieldValue::Category(CategoryValue::Caste(v))) => {
                self.caste = Some(v)
            }
            (ProfileField::Occupation, FieldValue::Category(CategoryValue::Occupation(v))) => {
                self.occupation = Some(v)
            }
            (ProfileField::HouseType, FieldValue::Category(CategoryValue::HouseType(v))) => {
                self.house_type = Some(v)
            }
            (ProfileField::RationCard, FieldValue::Category(CategoryValue::RationCard(v))) => {
                self.ration_card = Some(v)
            }
            (ProfileField::LandOwner, FieldValue::Flag(v)) => self.land_owner = Some(v),
            (ProfileField::Disability, FieldValue::Flag(v)) => self.disability = Some(v),
            (field, value) => {
                return Err(AnswerError::KindMismatch {
                    field,
                    expected: field.kind(),
                    found: value.kind(),
                })
            }
        }
        Ok(())
    }
}

/// Raised when the wizard hands a field a value from the wrong domain.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("answer for {field:?} must be {expected:?}, got {found:?}")]
    KindMismatch {
        field: ProfileField,
        expected: FieldKind,
        found: FieldKind,
    },
}

/// Comparison operators permitted in requirement predicates.
///
/// `Unsupported` deserializes from any future operator name so data-driven
/// catalogs fail fast at validation while the engine itself fails closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Includes,
    #[serde(other)]
    Unsupported,
}

/// Typed comparison operand; the pairing with the requirement's field and
/// operator is checked once at catalog construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementValue {
    Number(u32),
    Flag(bool),
    Category(CategoryValue),
    CategorySet(Vec<CategoryValue>),
}

/// One atomic eligibility predicate over a single profile field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub field: ProfileField,
    pub operator: Operator,
    pub value: RequirementValue,
    pub description: Text,
}

/// A supporting document the applicant must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: Text,
    pub description: Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationMode {
    Online,
    Offline,
    Both,
}

impl ApplicationMode {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationMode::Online => "online",
            ApplicationMode::Offline => "offline",
            ApplicationMode::Both => "both",
        }
    }
}

/// Stable scheme identifier, preserved across sessions and catalog refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeId(pub String);

impl SchemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A welfare program: conjunctive requirement list, bilingual copy, document
/// list, and application metadata. `last_updated` and `source_urls` are set
/// only by the live refresh collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: SchemeId,
    pub name: Text,
    pub benefit_short: Text,
    pub description: Text,
    pub requirements: Vec<Requirement>,
    pub documents: Vec<Document>,
    pub application_mode: ApplicationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
    pub application_instructions: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_urls: Vec<String>,
}

/// Per-scheme verdict with itemized bilingual justification. Recomputed from
/// scratch on every evaluation, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub scheme_id: SchemeId,
    pub is_eligible: bool,
    pub reasons: Vec<Text>,
    pub documents: Vec<Document>,
}
