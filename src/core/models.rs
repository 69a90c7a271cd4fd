//! Portfolio Records
//!
//! Raw records as served by the portfolio backend. Every field tolerates
//! absence: missing values fall back to defaults and are replaced with
//! display fallbacks when mapped to cards.

use serde::{Deserialize, Serialize};

// ============================================================================
// System
// ============================================================================

/// `GET /health` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthRecord {
    pub status: String,
    pub version: Option<String>,
}

// ============================================================================
// Projects & Experiences
// ============================================================================

/// Project record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub id: Option<String>,
    pub nom: String,
    pub entreprise: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "date début")]
    pub date_debut: Option<String>,
    #[serde(alias = "date fin")]
    pub date_fin: Option<String>,
    #[serde(alias = "lien github")]
    pub lien_github: Option<String>,
    pub technologies: Vec<String>,
    pub skills: Vec<String>,
}

/// Professional experience record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRecord {
    pub id: Option<String>,
    pub nom: String,
    pub company: Option<String>,
    pub role: Option<String>,
    pub type_de_poste: Option<String>,
    pub description: Option<String>,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
}

// ============================================================================
// Skill graph
// ============================================================================

/// Skill node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillRecord {
    pub id: Option<String>,
    pub nom: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Technology node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnologyRecord {
    pub id: Option<String>,
    pub nom: String,
}

/// Hobby record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HobbyRecord {
    pub id: Option<String>,
    pub nom: String,
    pub description: Option<String>,
}

// ============================================================================
// Profile
// ============================================================================

/// Contact block of the personal info record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRecord {
    #[serde(alias = "email", alias = "Adresse mail")]
    pub mail: Option<String>,
    #[serde(alias = "telephone", alias = "numéro de téléphone")]
    pub tel: Option<String>,
    #[serde(alias = "liens_linkedin", alias = "liens linkedin")]
    pub linkedin: Option<String>,
}

/// Personal info record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRecord {
    pub id: Option<String>,
    #[serde(alias = "Nom")]
    pub nom: Option<String>,
    #[serde(alias = "Prenom")]
    pub prenom: Option<String>,
    #[serde(alias = "Description")]
    pub description: Option<String>,
    #[serde(alias = "Contact")]
    pub contact: Option<ContactRecord>,
}

impl PersonRecord {
    /// "First Last", or `None` when both parts are blank.
    pub fn full_name(&self) -> Option<String> {
        let name = format!(
            "{} {}",
            self.prenom.as_deref().unwrap_or_default(),
            self.nom.as_deref().unwrap_or_default()
        );
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

/// Education entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRecord {
    pub id: Option<String>,
    pub school_name: String,
    pub degree: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// `GET /profile/global` payload. Only the sections the book reads are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalProfile {
    pub infos_personnels: Vec<PersonRecord>,
    pub parcours_scolaire: Vec<EducationRecord>,
}

impl GlobalProfile {
    /// The profile owner (first personal info record).
    pub fn person(&self) -> Option<&PersonRecord> {
        self.infos_personnels.first()
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Everything one load delivers to the book.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    pub health: Option<HealthRecord>,
    pub profile: GlobalProfile,
    pub projects: Vec<ProjectRecord>,
    pub experiences: Vec<ExperienceRecord>,
    pub skills: Vec<SkillRecord>,
    pub technologies: Vec<TechnologyRecord>,
    pub hobbies: Vec<HobbyRecord>,
}
