//! Portfolio backend client.
//!
//! Read-only JSON client for the portfolio API. One [`PortfolioClient::fetch_portfolio`]
//! call gathers everything the book needs; the skill graph's related projects
//! are fetched on demand.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::AppConfig;
use crate::core::models::{
    ExperienceRecord, GlobalProfile, HealthRecord, HobbyRecord, Portfolio, ProjectRecord,
    SkillRecord, TechnologyRecord,
};

pub const HEALTH_PATH: &str = "/health";
pub const PROFILE_PATH: &str = "/profile/global";
pub const PROJECTS_PATH: &str = "/projects";
pub const EXPERIENCES_PATH: &str = "/experiences";
pub const SKILLS_PATH: &str = "/skills";
pub const TECHNOLOGIES_PATH: &str = "/technologies";
pub const HOBBIES_PATH: &str = "/profile/hobbies";

/// Errors from the portfolio API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {path} failed: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("could not decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    base: Url,
    client: Client,
}

impl PortfolioClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url.trim()).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self { base, client })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.api.base_url, config.request_timeout())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        log::debug!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Http {
                path: path.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    pub async fn health(&self) -> Result<HealthRecord> {
        self.get_json(HEALTH_PATH).await
    }

    pub async fn profile(&self) -> Result<GlobalProfile> {
        self.get_json(PROFILE_PATH).await
    }

    pub async fn projects(&self) -> Result<Vec<ProjectRecord>> {
        self.get_json(PROJECTS_PATH).await
    }

    pub async fn experiences(&self) -> Result<Vec<ExperienceRecord>> {
        self.get_json(EXPERIENCES_PATH).await
    }

    pub async fn skills(&self) -> Result<Vec<SkillRecord>> {
        self.get_json(SKILLS_PATH).await
    }

    pub async fn technologies(&self) -> Result<Vec<TechnologyRecord>> {
        self.get_json(TECHNOLOGIES_PATH).await
    }

    pub async fn hobbies(&self) -> Result<Vec<HobbyRecord>> {
        self.get_json(HOBBIES_PATH).await
    }

    /// Projects linked to `skill` in the skill graph.
    pub async fn related_projects(&self, skill: &str) -> Result<Vec<ProjectRecord>> {
        let path = related_projects_path(skill);
        self.get_json(&path).await
    }

    /// Fetch every collection the book shows, concurrently. Any failure fails
    /// the whole load.
    pub async fn fetch_portfolio(&self) -> Result<Portfolio> {
        let (health, profile, projects, experiences, skills, technologies, hobbies) = tokio::try_join!(
            self.health(),
            self.profile(),
            self.projects(),
            self.experiences(),
            self.skills(),
            self.technologies(),
            self.hobbies(),
        )?;

        log::info!(
            "Fetched portfolio from {}: {} projects, {} experiences, {} skills",
            self.base_url(),
            projects.len(),
            experiences.len(),
            skills.len()
        );

        Ok(Portfolio {
            health: Some(health),
            profile,
            projects,
            experiences,
            skills,
            technologies,
            hobbies,
        })
    }
}

/// Path of the related-projects endpoint with `skill` percent-encoded.
pub fn related_projects_path(skill: &str) -> String {
    format!("{}/{}/projects", SKILLS_PATH, urlencoding::encode(skill))
}
