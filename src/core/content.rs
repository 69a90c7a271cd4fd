//! Uniform card shape for projects and experiences.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::models::{ExperienceRecord, ProjectRecord};

const NOT_AVAILABLE: &str = "n/a";
const NO_DESCRIPTION: &str = "No description available.";

/// One card on a generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub footer: String,
    pub link: Option<String>,
}

impl ContentItem {
    /// Stable identity within a source collection.
    pub fn key(&self) -> String {
        format!("{}-{}", self.title, self.footer)
    }
}

impl From<&ProjectRecord> for ContentItem {
    fn from(project: &ProjectRecord) -> Self {
        Self {
            title: project.nom.clone(),
            subtitle: format!(
                "{} · {}",
                or_fallback(&project.entreprise, "Company n/a"),
                or_fallback(&project.status, NOT_AVAILABLE)
            ),
            body: or_fallback(&project.description, NO_DESCRIPTION).to_string(),
            footer: date_range(&project.date_debut, &project.date_fin),
            link: project.lien_github.clone().filter(|l| !l.trim().is_empty()),
        }
    }
}

impl From<&ExperienceRecord> for ContentItem {
    fn from(experience: &ExperienceRecord) -> Self {
        Self {
            title: experience.nom.clone(),
            subtitle: format!(
                "{} · {}",
                or_fallback(&experience.company, "Company n/a"),
                or_fallback(&experience.role, "Role n/a")
            ),
            body: or_fallback(&experience.description, NO_DESCRIPTION).to_string(),
            footer: date_range(&experience.date_debut, &experience.date_fin),
            link: None,
        }
    }
}

/// Map a record collection into cards, keeping order.
pub fn cards<'a, R>(records: &'a [R]) -> Vec<ContentItem>
where
    &'a R: Into<ContentItem>,
{
    records.iter().map(|record| record.into()).collect()
}

/// Keys carried by more than one card, each reported once.
pub fn duplicate_keys(items: &[ContentItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    items
        .iter()
        .map(ContentItem::key)
        .filter(|key| !seen.insert(key.clone()) && reported.insert(key.clone()))
        .collect()
}

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

fn date_range(start: &Option<String>, end: &Option<String>) -> String {
    format!(
        "{} → {}",
        or_fallback(start, NOT_AVAILABLE),
        or_fallback(end, NOT_AVAILABLE)
    )
}
