//! Test fixtures: portfolio records and ready-made books.

use serde_json::{json, Value};

use crate::core::book::Book;
use crate::core::cue::SilentCue;
use crate::core::models::{ExperienceRecord, Portfolio, ProjectRecord, SkillRecord};
use crate::core::navigation::Navigator;

/// `n` projects named "project 0" .. "project n-1".
pub fn projects(n: usize) -> Vec<ProjectRecord> {
    (0..n)
        .map(|i| ProjectRecord {
            id: Some(format!("p{i}")),
            nom: format!("project {i}"),
            status: Some("done".to_string()),
            ..Default::default()
        })
        .collect()
}

/// `n` experiences named "experience 0" .. "experience n-1".
pub fn experiences(n: usize) -> Vec<ExperienceRecord> {
    (0..n)
        .map(|i| ExperienceRecord {
            id: Some(format!("e{i}")),
            nom: format!("experience {i}"),
            company: Some("Acme".to_string()),
            ..Default::default()
        })
        .collect()
}

pub fn skills(names: &[&str]) -> Vec<SkillRecord> {
    names
        .iter()
        .map(|name| SkillRecord {
            nom: name.to_string(),
            ..Default::default()
        })
        .collect()
}

pub fn portfolio(project_count: usize, experience_count: usize) -> Portfolio {
    Portfolio {
        projects: projects(project_count),
        experiences: experiences(experience_count),
        ..Default::default()
    }
}

/// A silent book loaded with the given collection sizes.
pub fn book(project_count: usize, experience_count: usize) -> Book {
    let mut book = Book::new(Box::new(SilentCue));
    book.load(portfolio(project_count, experience_count));
    book
}

/// A silent navigator over `len` spreads.
pub fn navigator(len: usize) -> Navigator {
    Navigator::new(len, Box::new(SilentCue))
}

/// Backend payloads as the portfolio API serves them, including the sparse
/// and spaced-key variants.
pub mod payloads {
    use super::*;

    pub fn health() -> Value {
        json!({ "status": "ok", "version": "2.1.0" })
    }

    pub fn profile() -> Value {
        json!({
            "infos_personnels": [{
                "Prenom": "Ada",
                "Nom": "Lovelace",
                "Description": "Engineer",
                "Contact": {
                    "Adresse mail": "ada@example.com",
                    "numéro de téléphone": "0102030405",
                    "liens linkedin": "https://linkedin.com/in/ada"
                }
            }],
            "parcours_scolaire": [
                { "school_name": "ENS", "degree": "MSc", "start_year": 2015, "end_year": 2017 }
            ]
        })
    }

    pub fn projects(n: usize) -> Value {
        Value::Array(
            (0..n)
                .map(|i| {
                    json!({
                        "id": format!("p{i}"),
                        "nom": format!("project {i}"),
                        "entreprise": "Acme",
                        "date début": "2023-01",
                        "lien github": format!("https://github.com/ada/p{i}")
                    })
                })
                .collect(),
        )
    }

    pub fn experiences(n: usize) -> Value {
        Value::Array(
            (0..n)
                .map(|i| json!({ "nom": format!("experience {i}") }))
                .collect(),
        )
    }

    pub fn skills() -> Value {
        json!([{ "nom": "Rust" }, { "nom": "C++" }])
    }

    pub fn technologies() -> Value {
        json!([{ "nom": "tokio" }, { "nom": "ratatui" }])
    }

    pub fn hobbies() -> Value {
        json!([{ "nom": "chess", "description": "Sicilian, always" }])
    }
}
