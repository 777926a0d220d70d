//! Scheme catalog: the built-in rule data, fail-fast validation, and the
//! process-wide store the refresh collaborator writes into.

use std::sync::{Arc, RwLock};

use super::domain::{
    ApplicationMode, CategoryValue, Document, FieldKind, Gender, HouseType, Occupation, Operator,
    ProfileField, RationCard, Requirement, RequirementValue, Residence, Scheme, SchemeId, Text,
};

/// Replaceable rule thresholds. The income ceiling stands in for a real
/// asset-based means test in the source data, so it is configuration rather
/// than engine logic.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub farmer_income_ceiling: u32,
    pub pension_minimum_age: u32,
    pub adult_age: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            farmer_income_ceiling: 250_000,
            pension_minimum_age: 60,
            adult_age: 18,
        }
    }
}

/// Validation errors raised when a catalog is constructed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate scheme id '{0}'")]
    DuplicateId(String),
    #[error("scheme '{scheme}' is missing a translation for its {text}")]
    MissingTranslation { scheme: String, text: String },
    #[error(
        "scheme '{scheme}' requirement {index} pairs {operator:?} with an incompatible value for {field:?}"
    )]
    IncompatibleRequirement {
        scheme: String,
        index: usize,
        field: ProfileField,
        operator: Operator,
    },
    #[error("scheme '{scheme}' requirement {index} uses an empty membership set")]
    EmptyMembershipSet { scheme: String, index: usize },
    #[error("scheme '{scheme}' requirement {index} uses an unsupported operator")]
    UnsupportedOperator { scheme: String, index: usize },
}

/// Ordered, validated collection of schemes.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl SchemeCatalog {
    /// Validate and wrap a scheme list. Malformed requirement data and
    /// missing translations are data-integrity defects caught here, never
    /// mid-evaluation.
    pub fn new(schemes: Vec<Scheme>) -> Result<Self, CatalogError> {
        for (position, scheme) in schemes.iter().enumerate() {
            if schemes[..position]
                .iter()
                .any(|earlier| earlier.id == scheme.id)
            {
                return Err(CatalogError::DuplicateId(scheme.id.0.clone()));
            }
            validate_scheme(scheme)?;
        }
        Ok(Self { schemes })
    }

    /// The built-in catalog with default thresholds.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(builtin_schemes(&CatalogConfig::default()))
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn into_schemes(self) -> Vec<Scheme> {
        self.schemes
    }
}

fn validate_scheme(scheme: &Scheme) -> Result<(), CatalogError> {
    let texts: [(&str, &Text); 4] = [
        ("name", &scheme.name),
        ("benefit summary", &scheme.benefit_short),
        ("description", &scheme.description),
        ("application instructions", &scheme.application_instructions),
    ];
    for (label, text) in texts {
        require_complete(scheme, label, text)?;
    }

    for document in &scheme.documents {
        require_complete(scheme, "document name", &document.name)?;
        require_complete(scheme, "document description", &document.description)?;
    }

    for (index, requirement) in scheme.requirements.iter().enumerate() {
        require_complete(scheme, "requirement description", &requirement.description)?;
        validate_requirement(scheme, index, requirement)?;
    }

    Ok(())
}

fn require_complete(scheme: &Scheme, label: &str, text: &Text) -> Result<(), CatalogError> {
    if text.is_complete() {
        Ok(())
    } else {
        Err(CatalogError::MissingTranslation {
            scheme: scheme.id.0.clone(),
            text: label.to_string(),
        })
    }
}

fn validate_requirement(
    scheme: &Scheme,
    index: usize,
    requirement: &Requirement,
) -> Result<(), CatalogError> {
    let field_kind = requirement.field.kind();
    let mismatch = || CatalogError::IncompatibleRequirement {
        scheme: scheme.id.0.clone(),
        index,
        field: requirement.field,
        operator: requirement.operator,
    };

    match requirement.operator {
        Operator::Eq | Operator::Neq => match (&requirement.value, field_kind) {
            (RequirementValue::Number(_), FieldKind::Number) => Ok(()),
            (RequirementValue::Flag(_), FieldKind::Flag) => Ok(()),
            (RequirementValue::Category(value), FieldKind::Category(kind))
                if value.kind() == kind =>
            {
                Ok(())
            }
            _ => Err(mismatch()),
        },
        Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => {
            match (&requirement.value, field_kind) {
                (RequirementValue::Number(_), FieldKind::Number) => Ok(()),
                _ => Err(mismatch()),
            }
        }
        Operator::Includes => match (&requirement.value, field_kind) {
            (RequirementValue::CategorySet(set), FieldKind::Category(kind)) => {
                if set.is_empty() {
                    Err(CatalogError::EmptyMembershipSet {
                        scheme: scheme.id.0.clone(),
                        index,
                    })
                } else if set.iter().all(|value| value.kind() == kind) {
                    Ok(())
                } else {
                    Err(mismatch())
                }
            }
            _ => Err(mismatch()),
        },
        Operator::Unsupported => Err(CatalogError::UnsupportedOperator {
            scheme: scheme.id.0.clone(),
            index,
        }),
    }
}

/// Process-wide catalog holder: snapshot reads, wholesale replacement.
///
/// Evaluations capture one `Arc` snapshot per call, so a refresh completing
/// concurrently can never expose a half-updated record to a reader.
#[derive(Debug)]
pub struct SchemeStore {
    schemes: RwLock<Arc<Vec<Scheme>>>,
}

impl SchemeStore {
    pub fn new(catalog: SchemeCatalog) -> Self {
        Self {
            schemes: RwLock::new(Arc::new(catalog.into_schemes())),
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<Scheme>> {
        let guard = match self.schemes.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(&guard)
    }

    /// Replace the whole catalog. Sole caller is the refresh collaborator.
    pub fn replace(&self, schemes: Vec<Scheme>) {
        let mut guard = match self.schemes.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::new(schemes);
    }
}

/// The five built-in schemes, rule data and bilingual copy carried over from
/// the published questionnaire.
pub fn builtin_schemes(config: &CatalogConfig) -> Vec<Scheme> {
    vec![
        pm_kisan(config),
        pmay_gramin(),
        nsap_pension(config),
        ujjwala(config),
        ayushman(),
    ]
}

fn document(name_en: &str, name_hi: &str, desc_en: &str, desc_hi: &str) -> Document {
    Document {
        name: Text::new(name_en, name_hi),
        description: Text::new(desc_en, desc_hi),
    }
}

fn pm_kisan(config: &CatalogConfig) -> Scheme {
    Scheme {
        id: SchemeId::new("pm-kisan"),
        name: Text::new("PM Kisan Samman Nidhi", "पीएम किसान सम्मान निधि"),
        benefit_short: Text::new(
            "₹6,000 per year for Farmers",
            "किसानों के लिए ₹6,000 प्रति वर्ष",
        ),
        description: Text::new(
            "Income support for land-holding farmer families.",
            "भूमि रखने वाले किसान परिवारों के लिए आय सहायता।",
        ),
        requirements: vec![
            Requirement {
                field: ProfileField::Occupation,
                operator: Operator::Eq,
                value: RequirementValue::Category(CategoryValue::Occupation(Occupation::Farmer)),
                description: Text::new("Must be a Farmer", "किसान होना चाहिए"),
            },
            Requirement {
                field: ProfileField::LandOwner,
                operator: Operator::Eq,
                value: RequirementValue::Flag(true),
                description: Text::new("Must own land", "जमीन होनी चाहिए"),
            },
            Requirement {
                field: ProfileField::AnnualIncome,
                operator: Operator::Lt,
                value: RequirementValue::Number(config.farmer_income_ceiling),
                description: Text::new("Income below tax limit", "आय कर सीमा से कम"),
            },
        ],
        documents: vec![
            document("Aadhaar Card", "आधार कार्ड", "Identity Proof", "पहचान प्रमाण"),
            document(
                "Land Record (Khasra/Khatauni)",
                "भूमि रिकॉर्ड (खसरा/खतौनी)",
                "Proof of ownership",
                "स्वामित्व का प्रमाण",
            ),
            document(
                "Bank Passbook",
                "बैंक पासबुक",
                "For money transfer",
                "पैसे ट्रांसफर के लिए",
            ),
        ],
        application_mode: ApplicationMode::Both,
        application_url: Some("https://pmkisan.gov.in/".to_string()),
        application_instructions: Text::new(
            "Register online on the PM Kisan portal or visit your local Common Service Centre (CSC) / Patwari.",
            "पीएम किसान पोर्टल पर ऑनलाइन पंजीकरण करें या अपने स्थानीय जन सेवा केंद्र (CSC) / पटवारी से संपर्क करें।",
        ),
        last_updated: None,
        source_urls: Vec::new(),
    }
}

fn pmay_gramin() -> Scheme {
    Scheme {
        id: SchemeId::new("pmay-g"),
        name: Text::new(
            "PMAY Gramin (Rural Housing)",
            "प्रधानमंत्री आवास योजना (ग्रामीण)",
        ),
        benefit_short: Text::new(
            "Money to build a Pucca house",
            "पक्का घर बनाने के लिए पैसा",
        ),
        description: Text::new(
            "Subsidy to build a concrete house for rural poor.",
            "ग्रामीण गरीबों के लिए पक्का घर बनाने के लिए सब्सिडी।",
        ),
        requirements: vec![
            Requirement {
                field: ProfileField::Residence,
                operator: Operator::Eq,
                value: RequirementValue::Category(CategoryValue::Residence(Residence::Rural)),
                description: Text::new("Must live in a village", "गाँव में रहना चाहिए"),
            },
            Requirement {
                field: ProfileField::HouseType,
                operator: Operator::Neq,
                value: RequirementValue::Category(CategoryValue::HouseType(HouseType::Pucca)),
                description: Text::new(
                    "Must not have a Pucca house",
                    "पक्का घर नहीं होना चाहिए",
                ),
            },
            Requirement {
                field: ProfileField::RationCard,
                operator: Operator::Neq,
                value: RequirementValue::Category(CategoryValue::RationCard(RationCard::Apl)),
                description: Text::new(
                    "Priority for BPL/Antyodaya",
                    "बीपीएल/अंत्योदय को प्राथमिकता",
                ),
            },
        ],
        documents: vec![
            document("Aadhaar Card", "आधार कार्ड", "Identity Proof", "पहचान प्रमाण"),
            document(
                "MGNREGA Job Card",
                "मनरेगा जॉब कार्ड",
                "For labour linkage",
                "श्रम लिंक के लिए",
            ),
            document("Bank Account", "बैंक खाता", "For subsidy", "सब्सिडी के लिए"),
        ],
        application_mode: ApplicationMode::Offline,
        application_url: None,
        application_instructions: Text::new(
            "Contact your Gram Panchayat or Block Development Officer (BDO). They will register you on the AwaasApp.",
            "अपनी ग्राम पंचायत या खंड विकास अधिकारी (BDO) से संपर्क करें। वे आवास ऐप पर आपका पंजीकरण करेंगे।",
        ),
        last_updated: None,
        source_urls: Vec::new(),
    }
}

fn nsap_pension(config: &CatalogConfig) -> Scheme {
    Scheme {
        id: SchemeId::new("nsap-pension"),
        name: Text::new("Old Age Pension (NSAP)", "वृद्धावस्था पेंशन"),
        benefit_short: Text::new(
            "Monthly Pension for Elderly",
            "बुजुर्गों के लिए मासिक पेंशन",
        ),
        description: Text::new(
            "Financial assistance for elderly below poverty line.",
            "गरीबी रेखा से नीचे के बुजुर्गों के लिए वित्तीय सहायता।",
        ),
        requirements: vec![
            Requirement {
                field: ProfileField::Age,
                operator: Operator::Gte,
                value: RequirementValue::Number(config.pension_minimum_age),
                description: Text::new("Age must be 60+", "आयु 60+ होनी चाहिए"),
            },
            Requirement {
                field: ProfileField::RationCard,
                operator: Operator::Includes,
                value: RequirementValue::CategorySet(vec![
                    CategoryValue::RationCard(RationCard::Bpl),
                    CategoryValue::RationCard(RationCard::Aay),
                ]),
                description: Text::new("Must be BPL family", "बीपीएल परिवार होना चाहिए"),
            },
        ],
        documents: vec![
            document("Age Proof", "आयु प्रमाण", "Voter ID/Aadhaar", "वोटर आईडी/आधार"),
            document(
                "BPL Ration Card",
                "बीपीएल राशन कार्ड",
                "Poverty proof",
                "गरीबी का प्रमाण",
            ),
        ],
        application_mode: ApplicationMode::Both,
        application_url: Some("https://nsap.nic.in/".to_string()),
        application_instructions: Text::new(
            "Submit application at District Social Welfare Office or apply online via Umang App.",
            "जिला समाज कल्याण कार्यालय में आवेदन जमा करें या उमंग ऐप के माध्यम से ऑनलाइन आवेदन करें।",
        ),
        last_updated: None,
        source_urls: Vec::new(),
    }
}

fn ujjwala(config: &CatalogConfig) -> Scheme {
    Scheme {
        id: SchemeId::new("ujjwala"),
        name: Text::new("PM Ujjwala Yojana", "प्रधानमंत्री उज्ज्वला योजना"),
        benefit_short: Text::new("Free Gas Connection", "मुफ्त गैस कनेक्शन"),
        description: Text::new(
            "LPG connection for women in poor households.",
            "गरीब परिवारों की महिलाओं के लिए एलपीजी कनेक्शन।",
        ),
        requirements: vec![
            Requirement {
                field: ProfileField::Gender,
                operator: Operator::Eq,
                value: RequirementValue::Category(CategoryValue::Gender(Gender::Female)),
                description: Text::new(
                    "Applicant must be female",
                    "आवेदक महिला होनी चाहिए",
                ),
            },
            Requirement {
                field: ProfileField::RationCard,
                operator: Operator::Includes,
                value: RequirementValue::CategorySet(vec![
                    CategoryValue::RationCard(RationCard::Bpl),
                    CategoryValue::RationCard(RationCard::Aay),
                ]),
                description: Text::new(
                    "Must be BPL/Antyodaya",
                    "बीपीएल/अंत्योदय होना चाहिए",
                ),
            },
            Requirement {
                field: ProfileField::Age,
                operator: Operator::Gte,
                value: RequirementValue::Number(config.adult_age),
                description: Text::new("Must be adult", "वयस्क होना चाहिए"),
            },
        ],
        documents: vec![
            document("Aadhaar of Woman", "महिला का आधार", "Applicant", "आवेदक"),
            document("Ration Card", "राशन कार्ड", "Family details", "परिवार का विवरण"),
        ],
        application_mode: ApplicationMode::Offline,
        application_url: None,
        application_instructions: Text::new(
            "Visit your nearest LPG Distributor (Indane, Bharat Gas, HP) and fill the KYC form.",
            "अपने निकटतम एलपीजी वितरक (इंडेन, भारत गैस, एचपी) पर जाएं और केवाईसी फॉर्म भरें।",
        ),
        last_updated: None,
        source_urls: Vec::new(),
    }
}

fn ayushman() -> Scheme {
    Scheme {
        id: SchemeId::new("ayushman"),
        name: Text::new("Ayushman Bharat", "आयुष्मान भारत"),
        benefit_short: Text::new(
            "Free Treatment up to ₹5 Lakhs",
            "₹5 लाख तक का मुफ्त इलाज",
        ),
        description: Text::new(
            "Health insurance for poor and vulnerable families.",
            "गरीब और कमजोर परिवारों के लिए स्वास्थ्य बीमा।",
        ),
        requirements: vec![Requirement {
            field: ProfileField::RationCard,
            operator: Operator::Includes,
            value: RequirementValue::CategorySet(vec![
                CategoryValue::RationCard(RationCard::Bpl),
                CategoryValue::RationCard(RationCard::Aay),
            ]),
            description: Text::new(
                "Based on economic status",
                "आर्थिक स्थिति के आधार पर",
            ),
        }],
        documents: vec![
            document("Aadhaar Card", "आधार कार्ड", "Identity", "पहचान"),
            document("Ration Card", "राशन कार्ड", "Family proof", "परिवार का प्रमाण"),
        ],
        application_mode: ApplicationMode::Both,
        application_url: Some("https://beneficiary.nha.gov.in/".to_string()),
        application_instructions: Text::new(
            "Visit any Empanelled Hospital or Common Service Centre (CSC) to get your card made.",
            "अपना कार्ड बनवाने के लिए किसी भी सूचीबद्ध अस्पताल या जन सेवा केंद्र (CSC) पर जाएं।",
        ),
        last_updated: None,
        source_urls: Vec::new(),
    }
}
