//! Portfolio API Client Integration Tests
//!
//! Covers:
//! - Full portfolio fetch with spaced and capitalized backend keys
//! - Sparse payloads decoding with fallbacks
//! - Non-2xx responses mapped to `ApiError::Status`
//! - Undecodable bodies mapped to `ApiError::Decode`
//! - Related-project lookups with percent-encoded skill names
//! - A fetched portfolio laid out as a book

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api::{
    ApiError, PortfolioClient, EXPERIENCES_PATH, HEALTH_PATH, HOBBIES_PATH, PROFILE_PATH,
    PROJECTS_PATH, SKILLS_PATH, TECHNOLOGIES_PATH,
};
use crate::core::book::Book;
use crate::core::content::ContentItem;
use crate::core::cue::SilentCue;
use crate::core::spreads::Section;
use crate::tests::common::payloads;

// ============================================================================
// Helpers
// ============================================================================

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount every collection endpoint with the standard payloads.
async fn mount_portfolio(server: &MockServer, project_count: usize, experience_count: usize) {
    mount_json(server, HEALTH_PATH, payloads::health()).await;
    mount_json(server, PROFILE_PATH, payloads::profile()).await;
    mount_json(server, PROJECTS_PATH, payloads::projects(project_count)).await;
    mount_json(server, EXPERIENCES_PATH, payloads::experiences(experience_count)).await;
    mount_json(server, SKILLS_PATH, payloads::skills()).await;
    mount_json(server, TECHNOLOGIES_PATH, payloads::technologies()).await;
    mount_json(server, HOBBIES_PATH, payloads::hobbies()).await;
}

fn client(server: &MockServer) -> PortfolioClient {
    PortfolioClient::new(&server.uri(), Duration::from_secs(5)).expect("mock server URL")
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_portfolio_decodes_every_collection() {
    let server = MockServer::start().await;
    mount_portfolio(&server, 9, 5).await;

    let portfolio = client(&server).fetch_portfolio().await.expect("portfolio");

    assert_eq!(
        portfolio.health.as_ref().and_then(|h| h.version.as_deref()),
        Some("2.1.0")
    );
    assert_eq!(portfolio.projects.len(), 9);
    assert_eq!(portfolio.experiences.len(), 5);
    assert_eq!(portfolio.skills.len(), 2);
    assert_eq!(portfolio.technologies.len(), 2);
    assert_eq!(portfolio.hobbies[0].nom, "chess");

    let person = portfolio.profile.person().expect("person");
    assert_eq!(person.full_name().as_deref(), Some("Ada Lovelace"));
    let contact = person.contact.as_ref().expect("contact");
    assert_eq!(contact.mail.as_deref(), Some("ada@example.com"));
    assert_eq!(portfolio.profile.parcours_scolaire[0].school_name, "ENS");

    // Spaced backend keys
    assert_eq!(portfolio.projects[0].date_debut.as_deref(), Some("2023-01"));
    assert_eq!(
        portfolio.projects[0].lien_github.as_deref(),
        Some("https://github.com/ada/p0")
    );
}

#[tokio::test]
async fn test_sparse_records_fall_back() {
    let server = MockServer::start().await;
    mount_portfolio(&server, 0, 0).await;
    Mock::given(method("GET"))
        .and(path(PROJECTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "nom": "bare" }])))
        .with_priority(1)
        .mount(&server)
        .await;

    let portfolio = client(&server).fetch_portfolio().await.expect("portfolio");
    let card = ContentItem::from(&portfolio.projects[0]);

    assert_eq!(card.title, "bare");
    assert_eq!(card.body, "No description available.");
    assert!(card.link.is_none());
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start().await;
    mount_portfolio(&server, 1, 1).await;
    Mock::given(method("GET"))
        .and(path(EXPERIENCES_PATH))
        .respond_with(ResponseTemplate::new(503))
        .with_priority(1)
        .mount(&server)
        .await;

    let err = client(&server).fetch_portfolio().await.unwrap_err();
    match err {
        ApiError::Status { path, status } => {
            assert_eq!(path, EXPERIENCES_PATH);
            assert_eq!(status, 503);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_body_maps_to_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SKILLS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).skills().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { ref path, .. } if path == SKILLS_PATH));
}

#[tokio::test]
async fn test_related_projects_encodes_skill() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/skills/C%2B%2B/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "nom": "engine", "status": "active" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client(&server).related_projects("C++").await.expect("related");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].status.as_deref(), Some("active"));
}

#[tokio::test]
async fn test_unknown_skill_is_a_status_error() {
    let server = MockServer::start().await;
    let err = client(&server).related_projects("cobol").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_fetched_portfolio_lays_out_as_book() {
    let server = MockServer::start().await;
    mount_portfolio(&server, 9, 5).await;

    let portfolio = client(&server).fetch_portfolio().await.expect("portfolio");
    let mut book = Book::new(Box::new(SilentCue));
    book.load(portfolio);

    assert_eq!(book.spreads().len(), 9);
    assert_eq!(book.anchor(Section::Contact), 8);
    assert_eq!(book.selected_skill(), Some("Rust"));
    assert_eq!(
        book.project_chunks()[0][0].link.as_deref(),
        Some("https://github.com/ada/p0")
    );
}
