//! Question catalog: the ordered wizard questions and the contract binding
//! each question to the profile field it populates.

use serde::{Deserialize, Serialize};

use super::domain::{
    Caste, CategoryValue, CitizenProfile, FieldValue, Gender, HouseType, Occupation, ProfileField,
    RationCard, Residence, Scheme, Text,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Select,
    Boolean,
    Number,
}

/// Icons resolved at compile time instead of by string-name lookup; the
/// presentation bundle maps `asset()` names to its own rendering assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionIcon {
    User,
    UserCheck,
    Users,
    Trees,
    Building,
    CreditCard,
    XCircle,
    Wheat,
    Hammer,
    GraduationCap,
    Briefcase,
    UserMinus,
    CheckCircle,
    Tent,
    Home,
    CloudRain,
}

impl OptionIcon {
    pub const fn asset(self) -> &'static str {
        match self {
            OptionIcon::User => "user",
            OptionIcon::UserCheck => "user-check",
            OptionIcon::Users => "users",
            OptionIcon::Trees => "trees",
            OptionIcon::Building => "building",
            OptionIcon::CreditCard => "credit-card",
            OptionIcon::XCircle => "x-circle",
            OptionIcon::Wheat => "wheat",
            OptionIcon::Hammer => "hammer",
            OptionIcon::GraduationCap => "graduation-cap",
            OptionIcon::Briefcase => "briefcase",
            OptionIcon::UserMinus => "user-minus",
            OptionIcon::CheckCircle => "check-circle",
            OptionIcon::Tent => "tent",
            OptionIcon::Home => "home",
            OptionIcon::CloudRain => "cloud-rain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: FieldValue,
    pub label: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<OptionIcon>,
}

/// One wizard question bound to the profile field it fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub field: ProfileField,
    pub kind: InputKind,
    pub text: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<Text>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl Question {
    /// Progression gate: the wizard may not advance while this is false.
    /// Numeric answers of zero count as unanswered.
    pub fn is_answered(&self, profile: &CitizenProfile) -> bool {
        match profile.value_of(self.field) {
            None => false,
            Some(FieldValue::Number(n)) if self.kind == InputKind::Number => n != 0,
            Some(_) => true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionCatalogError {
    #[error("no question collects {field:?}, but a scheme requirement references it")]
    UncoveredField { field: ProfileField },
    #[error("question for {field:?} offers an option from the wrong value domain")]
    OptionKindMismatch { field: ProfileField },
    #[error("number question for {field:?} is missing min/max bounds")]
    MissingBounds { field: ProfileField },
    #[error("number question for {field:?} has min greater than max")]
    InvertedBounds { field: ProfileField },
}

/// Ordered question list driving the wizard.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_for(&self, field: ProfileField) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.field == field)
    }

    /// Check that the questions can actually feed the given schemes: every
    /// field any requirement reads has a question, option values belong to
    /// the field's domain, and number questions carry usable bounds.
    pub fn validate_against(&self, schemes: &[Scheme]) -> Result<(), QuestionCatalogError> {
        for scheme in schemes {
            for requirement in &scheme.requirements {
                if self.question_for(requirement.field).is_none() {
                    return Err(QuestionCatalogError::UncoveredField {
                        field: requirement.field,
                    });
                }
            }
        }

        for question in &self.questions {
            for option in &question.options {
                if option.value.kind() != question.field.kind() {
                    return Err(QuestionCatalogError::OptionKindMismatch {
                        field: question.field,
                    });
                }
            }
            if question.kind == InputKind::Number {
                match (question.min, question.max) {
                    (Some(min), Some(max)) if min <= max => {}
                    (Some(_), Some(_)) => {
                        return Err(QuestionCatalogError::InvertedBounds {
                            field: question.field,
                        })
                    }
                    _ => {
                        return Err(QuestionCatalogError::MissingBounds {
                            field: question.field,
                        })
                    }
                }
            }
        }

        Ok(())
    }

    /// The published nine-question flow.
    pub fn standard() -> Self {
        Self::new(vec![
            Question {
                field: ProfileField::Age,
                kind: InputKind::Number,
                text: Text::new("What is your age?", "आपकी उम्र क्या है?"),
                sub_text: Some(Text::new(
                    "Enter completed years",
                    "पूरे किए गए वर्ष दर्ज करें",
                )),
                options: Vec::new(),
                min: Some(14),
                max: Some(100),
            },
            Question {
                field: ProfileField::Gender,
                kind: InputKind::Select,
                text: Text::new("Select Gender", "लिंग चुनें"),
                sub_text: None,
                options: vec![
                    category_option(
                        CategoryValue::Gender(Gender::Male),
                        "Male",
                        "पुरुष",
                        Some(OptionIcon::User),
                    ),
                    category_option(
                        CategoryValue::Gender(Gender::Female),
                        "Female",
                        "महिला",
                        Some(OptionIcon::UserCheck),
                    ),
                    category_option(
                        CategoryValue::Gender(Gender::Other),
                        "Other",
                        "अन्य",
                        Some(OptionIcon::Users),
                    ),
                ],
                min: None,
                max: None,
            },
            Question {
                field: ProfileField::Residence,
                kind: InputKind::Select,
                text: Text::new("Where do you live?", "आप कहाँ रहते हैं?"),
                sub_text: None,
                options: vec![
                    category_option(
                        CategoryValue::Residence(Residence::Rural),
                        "Village (Rural)",
                        "गाँव (ग्रामीण)",
                        Some(OptionIcon::Trees),
                    ),
                    category_option(
                        CategoryValue::Residence(Residence::Urban),
                        "City (Urban)",
                        "शहर (शहरी)",
                        Some(OptionIcon::Building),
                    ),
                ],
                min: None,
                max: None,
            },
            Question {
                field: ProfileField::Caste,
                kind: InputKind::Select,
                text: Text::new("Social Category", "सामाजिक श्रेणी"),
                sub_text: Some(Text::new(
                    "As per your certificate",
                    "आपके प्रमाण पत्र के अनुसार",
                )),
                options: vec![
                    category_option(
                        CategoryValue::Caste(Caste::Sc),
                        "Scheduled Caste (SC)",
                        "अनुसूचित जाति (SC)",
                        None,
                    ),
                    category_option(
                        CategoryValue::Caste(Caste::St),
                        "Scheduled Tribe (ST)",
                        "अनुसूचित जनजाति (ST)",
                        None,
                    ),
                    category_option(
                        CategoryValue::Caste(Caste::Obc),
                        "OBC",
                        "अन्य पिछड़ा वर्ग (OBC)",
                        None,
                    ),
                    category_option(CategoryValue::Caste(Caste::General), "General", "सामान्य", None),
                ],
                min: None,
                max: None,
            },
            Question {
                field: ProfileField::RationCard,
                kind: InputKind::Select,
                text: Text::new("Ration Card Type", "राशन कार्ड का प्रकार"),
                sub_text: Some(Text::new(
                    "Check the color of your card",
                    "अपने कार्ड का रंग देखें",
                )),
                options: vec![
                    category_option(
                        CategoryValue::RationCard(RationCard::Bpl),
                        "BPL (Red/Pink)",
                        "बीपीएल (लाल/गुलाबी)",
                        Some(OptionIcon::CreditCard),
                    ),
                    category_option(
                        CategoryValue::RationCard(RationCard::Aay),
                        "Antyodaya (Yellow)",
                        "अंत्योदय (पीला)",
                        Some(OptionIcon::CreditCard),
                    ),
                    category_option(
                        CategoryValue::RationCard(RationCard::Apl),
                        "APL (White)",
                        "एपीएल (सफेद)",
                        Some(OptionIcon::CreditCard),
                    ),
                    category_option(
                        CategoryValue::RationCard(RationCard::None),
                        "No Card",
                        "कोई कार्ड नहीं",
                        Some(OptionIcon::XCircle),
                    ),
                ],
                min: None,
                max: None,
            },
            Question {
                field: ProfileField::Occupation,
                kind: InputKind::Select,
                text: Text::new("Main source of income", "आय का मुख्य स्रोत"),
                sub_text: None,
                options: vec![
                    category_option(
                        CategoryValue::Occupation(Occupation::Farmer),
                        "Farming",
                        "खेती",
                        Some(OptionIcon::Wheat),
                    ),
                    category_option(
                        CategoryValue::Occupation(Occupation::Laborer),
                        "Daily Labor",
                        "दिहाड़ी मजदूर",
                        Some(OptionIcon::Hammer),
                    ),
                    category_option(
                        CategoryValue::Occupation(Occupation::Student),
                        "Student",
                        "छात्र",
                        Some(OptionIcon::GraduationCap),
                    ),
                    category_option(
                        CategoryValue::Occupation(Occupation::Salaried),
                        "Salaried Job",
                        "वेतनभोगी नौकरी",
                        Some(OptionIcon::Briefcase),
                    ),
                    category_option(
                        CategoryValue::Occupation(Occupation::Unemployed),
                        "Unemployed",
                        "बेरोजगार",
                        Some(OptionIcon::UserMinus),
                    ),
                ],
                min: None,
                max: None,
            },
            Question {
                field: ProfileField::LandOwner,
                kind: InputKind::Boolean,
                text: Text::new(
                    "Do you own agricultural land?",
                    "क्या आपके पास खेती की जमीन है?",
                ),
                sub_text: None,
                options: vec![
                    QuestionOption {
                        value: FieldValue::Flag(true),
                        label: Text::new("Yes", "हाँ"),
                        icon: Some(OptionIcon::CheckCircle),
                    },
                    QuestionOption {
                        value: FieldValue::Flag(false),
                        label: Text::new("No", "नहीं"),
                        icon: Some(OptionIcon::XCircle),
                    },
                ],
                min: None,
                max: None,
            },
            Question {
                field: ProfileField::HouseType,
                kind: InputKind::Select,
                text: Text::new("Type of current house", "वर्तमान घर का प्रकार"),
                sub_text: None,
                options: vec![
                    category_option(
                        CategoryValue::HouseType(HouseType::Kutcha),
                        "Kutcha (Mud/Thatch)",
                        "कच्चा (मिट्टी/फूस)",
                        Some(OptionIcon::Tent),
                    ),
                    category_option(
                        CategoryValue::HouseType(HouseType::Pucca),
                        "Pucca (Brick/Cement)",
                        "पक्का (ईंट/सीमेंट)",
                        Some(OptionIcon::Home),
                    ),
                    category_option(
                        CategoryValue::HouseType(HouseType::Homeless),
                        "Homeless",
                        "बेघर",
                        Some(OptionIcon::CloudRain),
                    ),
                ],
                min: None,
                max: None,
            },
            // Income is a select of range midpoints for usability; the values
            // still land on the numeric annualIncome field.
            Question {
                field: ProfileField::AnnualIncome,
                kind: InputKind::Select,
                text: Text::new("Annual Family Income", "वार्षिक पारिवारिक आय"),
                sub_text: None,
                options: vec![
                    QuestionOption {
                        value: FieldValue::Number(45_000),
                        label: Text::new("Less than ₹50,000", "₹50,000 से कम"),
                        icon: None,
                    },
                    QuestionOption {
                        value: FieldValue::Number(90_000),
                        label: Text::new("₹50,000 - ₹1 Lakh", "₹50,000 - ₹1 लाख"),
                        icon: None,
                    },
                    QuestionOption {
                        value: FieldValue::Number(150_000),
                        label: Text::new("₹1 Lakh - ₹2 Lakhs", "₹1 लाख - ₹2 लाख"),
                        icon: None,
                    },
                    QuestionOption {
                        value: FieldValue::Number(300_000),
                        label: Text::new("More than ₹2.5 Lakhs", "₹2.5 लाख से अधिक"),
                        icon: None,
                    },
                ],
                min: None,
                max: None,
            },
        ])
    }
}

fn category_option(
    value: CategoryValue,
    label_en: &str,
    label_hi: &str,
    icon: Option<OptionIcon>,
) -> QuestionOption {
    QuestionOption {
        value: FieldValue::Category(value),
        label: Text::new(label_en, label_hi),
        icon,
    }
}
