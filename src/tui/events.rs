use crate::core::models::{Portfolio, ProjectRecord};
use crate::core::navigation::{Direction, PendingTurn};
use crate::core::spreads::Section;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// Portfolio fetch finished (error already rendered as text).
    PortfolioLoaded(Result<Portfolio, String>),
    /// Related projects for a skill arrived.
    RelatedProjectsLoaded {
        skill: String,
        projects: Vec<ProjectRecord>,
    },
    /// Settle delay of an accepted turn elapsed.
    TurnSettled(PendingTurn),
    /// Notification to display to the user.
    Notification(Notification),
}

/// High-level actions dispatched by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Turn(Direction),
    GotoSection(Section),

    // Skill graph
    NextSkill,
    PrevSkill,

    // Application
    ToggleSound,
    Reload,
    EditApiUrl,
    ShowHelp,
    CloseHelp,
    Quit,
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}
