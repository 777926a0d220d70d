use clap::{Args, ValueEnum};
use seva_setu::eligibility::{
    evaluate, Caste, CitizenProfile, Gender, HouseType, Language, Occupation, RationCard,
    Residence, SchemeCatalog,
};
use seva_setu::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Age in completed years
    #[arg(long)]
    pub(crate) age: u32,
    #[arg(long, value_enum)]
    pub(crate) gender: Option<GenderArg>,
    #[arg(long, value_enum)]
    pub(crate) residence: Option<ResidenceArg>,
    #[arg(long, value_enum)]
    pub(crate) caste: Option<CasteArg>,
    #[arg(long, value_enum)]
    pub(crate) occupation: Option<OccupationArg>,
    /// Whether the family owns agricultural land (true/false)
    #[arg(long)]
    pub(crate) land_owner: Option<bool>,
    #[arg(long, value_enum)]
    pub(crate) house_type: Option<HouseTypeArg>,
    #[arg(long, value_enum)]
    pub(crate) ration_card: Option<RationCardArg>,
    /// Annual family income in rupees
    #[arg(long, default_value_t = 0)]
    pub(crate) annual_income: u32,
    /// Whether the applicant holds a disability certificate (true/false)
    #[arg(long)]
    pub(crate) disability: Option<bool>,
    /// Language for the printed report
    #[arg(long, value_enum, default_value_t = LanguageArg::En)]
    pub(crate) language: LanguageArg,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum GenderArg {
    Male,
    Female,
    Other,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum ResidenceArg {
    Rural,
    Urban,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum CasteArg {
    Sc,
    St,
    Obc,
    General,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum OccupationArg {
    Farmer,
    Laborer,
    Student,
    Unemployed,
    Salaried,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum HouseTypeArg {
    Kutcha,
    Pucca,
    Homeless,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum RationCardArg {
    Bpl,
    Aay,
    Apl,
    None,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum LanguageArg {
    En,
    Hi,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

impl From<ResidenceArg> for Residence {
    fn from(value: ResidenceArg) -> Self {
        match value {
            ResidenceArg::Rural => Residence::Rural,
            ResidenceArg::Urban => Residence::Urban,
        }
    }
}

impl From<CasteArg> for Caste {
    fn from(value: CasteArg) -> Self {
        match value {
            CasteArg::Sc => Caste::Sc,
            CasteArg::St => Caste::St,
            CasteArg::Obc => Caste::Obc,
            CasteArg::General => Caste::General,
        }
    }
}

impl From<OccupationArg> for Occupation {
    fn from(value: OccupationArg) -> Self {
        match value {
            OccupationArg::Farmer => Occupation::Farmer,
            OccupationArg::Laborer => Occupation::Laborer,
            OccupationArg::Student => Occupation::Student,
            OccupationArg::Unemployed => Occupation::Unemployed,
            OccupationArg::Salaried => Occupation::Salaried,
        }
    }
}

impl From<HouseTypeArg> for HouseType {
    fn from(value: HouseTypeArg) -> Self {
        match value {
            HouseTypeArg::Kutcha => HouseType::Kutcha,
            HouseTypeArg::Pucca => HouseType::Pucca,
            HouseTypeArg::Homeless => HouseType::Homeless,
        }
    }
}

impl From<RationCardArg> for RationCard {
    fn from(value: RationCardArg) -> Self {
        match value {
            RationCardArg::Bpl => RationCard::Bpl,
            RationCardArg::Aay => RationCard::Aay,
            RationCardArg::Apl => RationCard::Apl,
            RationCardArg::None => RationCard::None,
        }
    }
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::En => Language::En,
            LanguageArg::Hi => Language::Hi,
        }
    }
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        age,
        gender,
        residence,
        caste,
        occupation,
        land_owner,
        house_type,
        ration_card,
        annual_income,
        disability,
        language,
    } = args;

    let profile = CitizenProfile {
        age,
        gender: gender.map(Into::into),
        residence: residence.map(Into::into),
        caste: caste.map(Into::into),
        occupation: occupation.map(Into::into),
        land_owner,
        house_type: house_type.map(Into::into),
        ration_card: ration_card.map(Into::into),
        annual_income,
        disability,
    };

    let language = Language::from(language);
    let catalog = SchemeCatalog::standard()?;
    let results = evaluate(&profile, catalog.schemes());

    let heading = match language {
        Language::En => "Scheme eligibility report",
        Language::Hi => "योजना पात्रता रिपोर्ट",
    };
    println!("{heading}");

    for (scheme, result) in catalog.schemes().iter().zip(&results) {
        let verdict = match (result.is_eligible, language) {
            (true, Language::En) => "ELIGIBLE",
            (true, Language::Hi) => "पात्र",
            (false, Language::En) => "NOT ELIGIBLE",
            (false, Language::Hi) => "पात्र नहीं",
        };

        println!("\n{} [{verdict}]", scheme.name.render(language));
        println!("  {}", scheme.benefit_short.render(language));
        for reason in &result.reasons {
            println!("  - {}", reason.render(language));
        }

        if result.is_eligible {
            let documents_label = match language {
                Language::En => "Documents needed:",
                Language::Hi => "आवश्यक दस्तावेज़:",
            };
            println!("  {documents_label}");
            for document in &result.documents {
                println!(
                    "    - {} ({})",
                    document.name.render(language),
                    document.description.render(language)
                );
            }
            println!("  {}", scheme.application_instructions.render(language));
            if let Some(url) = &scheme.application_url {
                println!("  {url}");
            }
        }
    }

    let disclaimer = match language {
        Language::En => {
            "This is an indicative check based on general criteria. \
             Final eligibility is decided by the concerned government department."
        }
        Language::Hi => {
            "यह सामान्य मानदंडों पर आधारित एक सांकेतिक जांच है। \
             अंतिम पात्रता संबंधित सरकारी विभाग द्वारा तय की जाती है।"
        }
    };
    println!("\n{disclaimer}");

    Ok(())
}
