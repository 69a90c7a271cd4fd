//! The portfolio book: source collections, the layout derived from them, and
//! the navigator that walks it.
//!
//! Chunks and spreads are pure functions of the project and experience
//! collections. Each collection carries a version; derived data is
//! recomputed when its version moves and reused otherwise.

use super::chunker::{chunk, PAGE_CAPACITY};
use super::content::{cards, duplicate_keys, ContentItem};
use super::cue::TransitionCue;
use super::models::{
    ExperienceRecord, GlobalProfile, HealthRecord, HobbyRecord, PersonRecord, Portfolio,
    ProjectRecord, SkillRecord, TechnologyRecord,
};
use super::navigation::{Direction, NavigationState, Navigator, PendingTurn};
use super::spreads::{build_spreads, Collection, PageId, Section, Side, Spread};

// ============================================================================
// Derived layout
// ============================================================================

#[derive(Debug, Default)]
struct Memo<T> {
    version: Option<u64>,
    value: T,
}

impl<T> Memo<T> {
    /// Recompute when `version` differs from the cached one. Returns whether
    /// a recomputation happened.
    fn refresh(&mut self, version: u64, compute: impl FnOnce() -> T) -> bool {
        if self.version == Some(version) {
            return false;
        }
        self.value = compute();
        self.version = Some(version);
        true
    }
}

/// What a page id resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContent<'a> {
    /// Fixed layout; rendered from the book's profile data.
    Structural(PageId),
    /// One chunk of cards. Both pages of a generated spread refer to the same
    /// chunk; `side` picks which half of it the page shows.
    Cards {
        collection: Collection,
        side: Side,
        /// 1-based page label.
        page_number: usize,
        chunk: &'a [ContentItem],
    },
}

impl<'a> PageContent<'a> {
    /// Cards printed on this particular page.
    pub fn visible_cards(&self) -> &'a [ContentItem] {
        match *self {
            PageContent::Structural(_) => &[],
            PageContent::Cards { side, chunk, .. } => {
                let split = chunk.len().div_ceil(2);
                match side {
                    Side::Left => &chunk[..split],
                    Side::Right => &chunk[split..],
                }
            }
        }
    }
}

// ============================================================================
// Book
// ============================================================================

/// One loaded portfolio laid out as spreads, plus the reader's position.
pub struct Book {
    portfolio: Portfolio,
    projects_version: u64,
    experiences_version: u64,
    project_chunks: Memo<Vec<Vec<ContentItem>>>,
    experience_chunks: Memo<Vec<Vec<ContentItem>>>,
    spreads: Vec<Spread>,
    navigator: Navigator,
    selected_skill: Option<usize>,
    related_projects: Vec<ProjectRecord>,
}

impl Book {
    /// An empty book: only the structural spreads.
    pub fn new(cue: Box<dyn TransitionCue>) -> Self {
        let spreads = build_spreads::<(), ()>(&[], &[]);
        let navigator = Navigator::new(spreads.len(), cue);
        let mut book = Self {
            portfolio: Portfolio::default(),
            projects_version: 0,
            experiences_version: 0,
            project_chunks: Memo::default(),
            experience_chunks: Memo::default(),
            spreads,
            navigator,
            selected_skill: None,
            related_projects: Vec::new(),
        };
        book.relayout();
        book
    }

    /// Replace every collection with a freshly loaded snapshot and return to
    /// the cover.
    pub fn load(&mut self, portfolio: Portfolio) {
        self.portfolio = portfolio;
        self.projects_version += 1;
        self.experiences_version += 1;
        self.selected_skill = (!self.portfolio.skills.is_empty()).then_some(0);
        self.related_projects.clear();
        self.relayout();
        self.navigator.reset(self.spreads.len());
        log::info!(
            "Book loaded: {} projects, {} experiences, {} spreads",
            self.portfolio.projects.len(),
            self.portfolio.experiences.len(),
            self.spreads.len()
        );
    }

    /// Swap the project collection, keeping the reader's position when it
    /// still exists.
    pub fn set_projects(&mut self, projects: Vec<ProjectRecord>) {
        self.portfolio.projects = projects;
        self.projects_version += 1;
        self.relayout();
        self.navigator.rebuild(self.spreads.len());
    }

    /// Swap the experience collection, keeping the reader's position when it
    /// still exists.
    pub fn set_experiences(&mut self, experiences: Vec<ExperienceRecord>) {
        self.portfolio.experiences = experiences;
        self.experiences_version += 1;
        self.relayout();
        self.navigator.rebuild(self.spreads.len());
    }

    fn relayout(&mut self) {
        let projects = &self.portfolio.projects;
        let experiences = &self.portfolio.experiences;
        let projects_changed = self
            .project_chunks
            .refresh(self.projects_version, || {
                chunk(&collection_cards(Collection::Projects, projects), PAGE_CAPACITY)
            });
        let experiences_changed = self
            .experience_chunks
            .refresh(self.experiences_version, || {
                chunk(&collection_cards(Collection::Experiences, experiences), PAGE_CAPACITY)
            });
        if projects_changed || experiences_changed {
            self.spreads = build_spreads(&self.project_chunks.value, &self.experience_chunks.value);
        }
    }

    // ── Layout ──────────────────────────────────────────────────────────

    pub fn spreads(&self) -> &[Spread] {
        &self.spreads
    }

    pub fn project_chunks(&self) -> &[Vec<ContentItem>] {
        &self.project_chunks.value
    }

    pub fn experience_chunks(&self) -> &[Vec<ContentItem>] {
        &self.experience_chunks.value
    }

    pub fn current_spread(&self) -> Spread {
        // The navigator index is clamped on every relayout.
        self.spreads
            .get(self.navigator.current_index())
            .copied()
            .unwrap_or(Spread::COVER)
    }

    /// Resolve a page id against the current chunk sequences. A generated id
    /// whose chunk no longer exists resolves to an empty page.
    pub fn resolve(&self, page: PageId) -> PageContent<'_> {
        match page {
            PageId::Generated {
                collection,
                side,
                index,
            } => {
                let chunks = match collection {
                    Collection::Projects => self.project_chunks(),
                    Collection::Experiences => self.experience_chunks(),
                };
                PageContent::Cards {
                    collection,
                    side,
                    page_number: index + 1,
                    chunk: chunks.get(index).map(Vec::as_slice).unwrap_or_default(),
                }
            }
            structural => PageContent::Structural(structural),
        }
    }

    /// Spread index a table-of-contents entry points at.
    pub fn anchor(&self, section: Section) -> usize {
        section.anchor(self.project_chunks().len(), self.experience_chunks().len())
    }

    // ── Navigation ──────────────────────────────────────────────────────

    pub fn navigation(&self) -> NavigationState {
        self.navigator.state()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn turn(&mut self, direction: Direction) -> Option<PendingTurn> {
        self.navigator.turn(direction)
    }

    pub fn settle(&mut self, ticket: PendingTurn) -> bool {
        self.navigator.settle(ticket)
    }

    pub fn goto(&mut self, index: usize) -> bool {
        self.navigator.goto(index)
    }

    pub fn goto_section(&mut self, section: Section) -> bool {
        let index = self.anchor(section);
        self.navigator.goto(index)
    }

    /// Invalidate outstanding turns; the book is being closed.
    pub fn close(&mut self) {
        self.navigator.teardown();
    }

    // ── Profile data ────────────────────────────────────────────────────

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn health(&self) -> Option<&HealthRecord> {
        self.portfolio.health.as_ref()
    }

    pub fn profile(&self) -> &GlobalProfile {
        &self.portfolio.profile
    }

    pub fn person(&self) -> Option<&PersonRecord> {
        self.portfolio.profile.person()
    }

    pub fn skills(&self) -> &[SkillRecord] {
        &self.portfolio.skills
    }

    pub fn technologies(&self) -> &[TechnologyRecord] {
        &self.portfolio.technologies
    }

    pub fn hobbies(&self) -> &[HobbyRecord] {
        &self.portfolio.hobbies
    }

    // ── Skill graph ─────────────────────────────────────────────────────

    pub fn selected_skill(&self) -> Option<&str> {
        self.selected_skill
            .and_then(|i| self.portfolio.skills.get(i))
            .map(|s| s.nom.as_str())
    }

    /// Move the skill selection, wrapping around. Returns the newly selected
    /// skill name; its related projects are cleared until they are supplied.
    pub fn cycle_skill(&mut self, direction: Direction) -> Option<&str> {
        let count = self.portfolio.skills.len();
        if count == 0 {
            return None;
        }
        let current = self.selected_skill.unwrap_or(0);
        let next = match direction {
            Direction::Forward => (current + 1) % count,
            Direction::Backward => (current + count - 1) % count,
        };
        self.selected_skill = Some(next);
        self.related_projects.clear();
        self.selected_skill()
    }

    /// Store projects related to `skill`. Ignored when the selection has moved
    /// on since the request was made.
    pub fn set_related_projects(&mut self, skill: &str, projects: Vec<ProjectRecord>) -> bool {
        if self.selected_skill() != Some(skill) {
            log::debug!("Dropping related projects for stale skill {skill}");
            return false;
        }
        self.related_projects = projects;
        true
    }

    pub fn related_projects(&self) -> &[ProjectRecord] {
        &self.related_projects
    }
}

/// Cards for one collection. Cards sharing a key cannot be told apart.
fn collection_cards<'a, R>(collection: Collection, records: &'a [R]) -> Vec<ContentItem>
where
    &'a R: Into<ContentItem>,
{
    let items = cards(records);
    for key in duplicate_keys(&items) {
        log::warn!("Duplicate {} card key: {key}", collection.label());
    }
    items
}
