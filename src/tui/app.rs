use std::io;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::events::{Action, AppEvent, Notification, NotificationLevel};
use super::layout::{centered_rect, BookLayout};
use super::theme;
use super::views::pages::PageView;
use super::widgets::input_buffer::InputBuffer;
use crate::api::{self, PortfolioClient};
use crate::config::ApiConfig;
use crate::core::book::Book;
use crate::core::cue::{SoundSwitch, TransitionCue};
use crate::core::models::Portfolio;
use crate::core::navigation::{Direction, PendingTurn, SETTLE_DELAY};
use crate::core::spreads::Section;

/// Ticks a notification stays on screen.
const NOTIFICATION_TTL: u32 = 100;
/// Notifications visible at once.
const MAX_NOTIFICATIONS: usize = 3;

/// Where the portfolio data stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// The book being read.
    pub book: Book,
    /// Backend client; `None` when the configured URL was unusable.
    client: Option<PortfolioClient>,
    /// Portfolio load status shown in the status bar.
    pub load: LoadState,
    /// Shared with the flip cue.
    sound: SoundSwitch,
    /// Settle timer of the in-flight turn.
    settle_task: Option<JoinHandle<()>>,
    /// Portfolio fetch in progress.
    load_task: Option<JoinHandle<()>>,
    /// Related-projects fetch for the selected skill.
    related_task: Option<JoinHandle<()>>,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// API base URL being edited, when the prompt is open.
    url_prompt: Option<InputBuffer>,
    /// Timeout for clients built from the prompt.
    request_timeout: Duration,
    /// Terminal area of the last frame, for mouse click zones.
    viewport: Rect,
    /// Receiver for internal events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender handed to spawned tasks.
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    pub fn new(
        client: api::Result<PortfolioClient>,
        cue: Box<dyn TransitionCue>,
        sound: SoundSwitch,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let (client, load) = match client {
            Ok(client) => (Some(client), LoadState::Loading),
            Err(e) => {
                log::error!("Portfolio client unavailable: {e}");
                (None, LoadState::Failed(e.to_string()))
            }
        };

        Self {
            running: true,
            book: Book::new(cue),
            client,
            load,
            sound,
            settle_task: None,
            load_task: None,
            related_task: None,
            notifications: Vec::new(),
            notification_counter: 0,
            show_help: false,
            url_prompt: None,
            request_timeout: Duration::from_secs(ApiConfig::default().timeout_secs),
            viewport: Rect::default(),
            event_rx,
            event_tx,
        }
    }

    /// Request timeout for clients created from the URL prompt.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        self.reload();

        while self.running {
            // Render
            let completed = terminal.draw(|frame| self.render(frame))?;
            self.viewport = completed.area;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        self.shutdown();
        Ok(())
    }

    /// Stop background work and invalidate outstanding turns.
    pub fn shutdown(&mut self) {
        for task in [
            self.settle_task.take(),
            self.load_task.take(),
            self.related_task.take(),
        ]
        .into_iter()
        .flatten()
        {
            task.abort();
        }
        self.book.close();
        log::info!("Book closed");
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // The URL prompt owns the keyboard while open
                if self.url_prompt.is_some() {
                    self.handle_url_input(&crossterm_event);
                    return;
                }

                // Help modal swallows everything else
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                if let Some(action) = self.map_input_to_action(crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::PortfolioLoaded(result) => self.on_portfolio_loaded(result),
            AppEvent::RelatedProjectsLoaded { skill, projects } => {
                self.book.set_related_projects(&skill, projects);
            }
            AppEvent::TurnSettled(ticket) => self.on_turn_settled(ticket),
            AppEvent::Notification(notification) => {
                self.push_notification(notification.message, notification.level);
            }
        }
    }

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    /// Edit the URL prompt. Enter loads from the typed URL, Esc cancels.
    fn handle_url_input(&mut self, event: &Event) {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return;
        };
        let Some(input) = self.url_prompt.as_mut() else {
            return;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => self.handle_action(Action::Quit),
            (_, KeyCode::Esc) => self.url_prompt = None,
            (_, KeyCode::Enter) => {
                let url = input.text().trim().to_string();
                self.url_prompt = None;
                self.switch_api_url(&url);
            }
            (_, KeyCode::Backspace) => input.backspace(),
            (_, KeyCode::Delete) => input.delete(),
            (_, KeyCode::Left) => input.move_left(),
            (_, KeyCode::Right) => input.move_right(),
            (_, KeyCode::Home) => input.move_home(),
            (_, KeyCode::End) => input.move_end(),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => input.insert_char(c),
            _ => {}
        }
    }

    fn map_input_to_action(&self, event: Event) -> Option<Action> {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => map_key(modifiers, code),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => BookLayout::compute(self.viewport)
                .click_direction(column, row)
                .map(Action::Turn),
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Turn(direction) => self.turn(direction),
            Action::GotoSection(section) => {
                if !self.book.goto_section(section) {
                    log::debug!("Ignored jump to {} while turning", section.label());
                }
            }
            Action::NextSkill => self.cycle_skill(Direction::Forward),
            Action::PrevSkill => self.cycle_skill(Direction::Backward),
            Action::ToggleSound => {
                let on = self.sound.toggle();
                self.push_notification(
                    format!("Sound {}", if on { "on" } else { "off" }),
                    NotificationLevel::Info,
                );
            }
            Action::Reload => self.reload(),
            Action::EditApiUrl => {
                let current = self.client.as_ref().map(|c| c.base_url()).unwrap_or_default();
                self.url_prompt = Some(InputBuffer::with_text(current));
            }
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    // ── Navigation ──────────────────────────────────────────────────────

    fn turn(&mut self, direction: Direction) {
        let Some(ticket) = self.book.turn(direction) else {
            return;
        };
        let tx = self.event_tx.clone();
        self.settle_task = Some(tokio::spawn(async move {
            tokio::time::sleep(SETTLE_DELAY).await;
            let _ = tx.send(AppEvent::TurnSettled(ticket));
        }));
    }

    fn on_turn_settled(&mut self, ticket: PendingTurn) {
        if self.book.settle(ticket) {
            self.settle_task = None;
        }
    }

    // ── Data loading ────────────────────────────────────────────────────

    /// Fetch the whole portfolio in the background.
    fn reload(&mut self) {
        let Some(client) = self.client.clone() else {
            return;
        };
        if let Some(task) = self.load_task.take() {
            task.abort();
        }

        self.load = LoadState::Loading;
        let tx = self.event_tx.clone();
        self.load_task = Some(tokio::spawn(async move {
            let result = client.fetch_portfolio().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::PortfolioLoaded(result));
        }));
    }

    /// Point the client at a new backend and reload from it. An unusable URL
    /// keeps the current client.
    fn switch_api_url(&mut self, url: &str) {
        if url.is_empty() {
            return;
        }
        match PortfolioClient::new(url, self.request_timeout) {
            Ok(client) => {
                log::info!("API base URL set to {}", client.base_url());
                self.client = Some(client);
                self.reload();
            }
            Err(e) => {
                log::warn!("Rejected API base URL: {e}");
                self.push_notification(format!("Invalid API URL: {e}"), NotificationLevel::Error);
            }
        }
    }

    fn on_portfolio_loaded(&mut self, result: Result<Portfolio, String>) {
        self.load_task = None;
        match result {
            Ok(portfolio) => {
                // A turn in flight belongs to the old layout.
                if let Some(task) = self.settle_task.take() {
                    task.abort();
                }
                self.book.load(portfolio);
                self.load = LoadState::Ready;
                self.fetch_related_projects();
            }
            Err(e) => {
                log::warn!("Portfolio load failed: {e}");
                self.push_notification(format!("API error: {e}"), NotificationLevel::Error);
                self.load = LoadState::Failed(e);
            }
        }
    }

    fn cycle_skill(&mut self, direction: Direction) {
        if self.book.cycle_skill(direction).is_some() {
            self.fetch_related_projects();
        }
    }

    /// Fetch the projects linked to the selected skill. Failures leave the
    /// list empty.
    fn fetch_related_projects(&mut self) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let Some(skill) = self.book.selected_skill().map(str::to_owned) else {
            return;
        };
        if let Some(task) = self.related_task.take() {
            task.abort();
        }

        let tx = self.event_tx.clone();
        self.related_task = Some(tokio::spawn(async move {
            let projects = match client.related_projects(&skill).await {
                Ok(projects) => projects,
                Err(e) => {
                    log::warn!("Related projects for {skill} unavailable: {e}");
                    let _ = tx.send(AppEvent::Notification(Notification {
                        id: 0,
                        message: format!("No related projects for {skill}"),
                        level: NotificationLevel::Warning,
                        ttl_ticks: NOTIFICATION_TTL,
                    }));
                    Vec::new()
                }
            };
            let _ = tx.send(AppEvent::RelatedProjectsLoaded { skill, projects });
        }));
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), area);

        let layout = BookLayout::compute(area);

        self.render_header(frame, layout.header);
        self.render_book(frame, &layout);
        self.render_pager(frame, layout.pager);
        self.render_status_bar(frame, layout.status);

        // Overlays
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
        if let Some(input) = &self.url_prompt {
            self.render_url_prompt(frame, area, input);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let sound = if self.sound.is_enabled() {
            Span::styled("Sound: ON", Style::default().fg(theme::SUCCESS))
        } else {
            Span::styled("Sound: OFF", theme::dim())
        };
        let header = Line::from(vec![
            Span::styled(" Portfolio Book ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled("Interactive book", Style::default().fg(theme::TEXT)),
            Span::raw(" │ "),
            sound,
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_book(&self, frame: &mut Frame, layout: &BookLayout) {
        frame.render_widget(theme::binding(), layout.book);

        let spread = self.book.current_spread();
        let pending = self.book.navigation().pending_direction;
        let pages = PageView::new(&self.book);
        pages.render(
            frame,
            layout.left_page,
            spread.left,
            pending == Some(Direction::Backward),
        );
        pages.render(
            frame,
            layout.right_page,
            spread.right,
            pending == Some(Direction::Forward),
        );

        let spine: Vec<Line> = (0..layout.spine.height).map(|_| Line::raw("┃")).collect();
        frame.render_widget(
            Paragraph::new(spine).style(Style::default().fg(theme::PAPER_EDGE).bg(theme::LEATHER)),
            layout.spine,
        );
    }

    fn render_pager(&self, frame: &mut Frame, area: Rect) {
        let navigator = self.book.navigator();
        let hint = |enabled: bool, text: &'static str| {
            if enabled {
                Span::styled(text, theme::key_hint())
            } else {
                Span::styled(text, theme::dim())
            }
        };

        let pager = Line::from(vec![
            hint(!navigator.at_first(), "◀ Previous"),
            Span::styled(
                format!(
                    "   Spread {} / {}   ",
                    navigator.current_index() + 1,
                    navigator.len()
                ),
                Style::default().fg(theme::TEXT),
            ),
            hint(!navigator.at_last(), "Next ▶"),
        ]);
        frame.render_widget(Paragraph::new(pager).alignment(Alignment::Center), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let load_status = match &self.load {
            LoadState::Loading => {
                Span::styled("Loading pages…", Style::default().fg(theme::INFO))
            }
            LoadState::Ready => Span::styled("ready", Style::default().fg(theme::SUCCESS)),
            LoadState::Failed(e) => {
                Span::styled(format!("API error: {e}"), Style::default().fg(theme::ERROR))
            }
        };

        let status = Line::from(vec![
            Span::raw(" "),
            load_status,
            Span::raw(" │ "),
            Span::styled("←/→", theme::key_hint()),
            Span::raw(":turn "),
            Span::styled("1-4", theme::key_hint()),
            Span::raw(":contents "),
            Span::styled("s", theme::key_hint()),
            Span::raw(":sound "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1.min(area.height.saturating_sub(height));

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().fg(theme::TEXT).bg(theme::BG_BASE)),
            notification_area,
        );
    }

    fn render_url_prompt(&self, frame: &mut Frame, area: Rect, input: &InputBuffer) {
        let modal = centered_rect(60, 20, area);
        let mut url = vec![Span::raw("  "), Span::styled("URL: ", theme::dim())];
        url.extend(input.line().spans);
        let lines = vec![
            Line::raw(""),
            Line::from(url),
            Line::raw(""),
            Line::from(vec![
                Span::raw("  "),
                Span::styled("Enter", Style::default().fg(theme::BRASS).bold()),
                Span::raw(" load  "),
                Span::styled("Esc", Style::default().fg(theme::BRASS).bold()),
                Span::raw(" cancel"),
            ]),
        ];

        frame.render_widget(Clear, modal);
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(theme::TEXT).bg(theme::BG_BASE))
                .block(theme::modal("API base URL").title_alignment(Alignment::Center)),
            modal,
        );
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 70, area);

        let keybindings = [
            ("Reading:", ""),
            ("→ / l / n / PgDn", "Turn forward"),
            ("← / h / p / PgUp", "Turn back"),
            ("Click right / left", "Turn forward / back"),
            ("", ""),
            ("Contents:", ""),
            ("1", "Projects"),
            ("2", "Experiences"),
            ("3", "Skill graph"),
            ("4", "Contact"),
            ("Home", "Cover"),
            ("", ""),
            ("Skill graph:", ""),
            ("[ / ]", "Previous / next skill"),
            ("", ""),
            ("Application:", ""),
            ("s", "Sound on/off"),
            ("r", "Reload pages"),
            ("u", "Change API URL"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                " Keybindings",
                Style::default()
                    .fg(theme::BRASS)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::BRASS)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{key:<22}"), Style::default().fg(theme::TEXT).bold()),
                    Span::styled(desc, theme::dim()),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", Style::default().fg(theme::BRASS).bold()),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::BRASS).bold()),
            Span::raw(" to close"),
        ]));

        frame.render_widget(Clear, modal);
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(theme::TEXT).bg(theme::BG_BASE))
                .block(theme::modal("Help").title_alignment(Alignment::Center)),
            modal,
        );
    }
}

/// Global key bindings.
fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    match (modifiers, code) {
        // Ctrl+C → quit
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        // No modifiers
        (KeyModifiers::NONE | KeyModifiers::SHIFT, _) => match code {
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') | KeyCode::Char('n') => {
                Some(Action::Turn(Direction::Forward))
            }
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') | KeyCode::Char('p') => {
                Some(Action::Turn(Direction::Backward))
            }
            KeyCode::Home => Some(Action::GotoSection(Section::Cover)),
            // Number keys → table of contents
            KeyCode::Char(c @ '1'..='4') => {
                let entry = c as usize - '1' as usize;
                Section::TABLE_OF_CONTENTS
                    .get(entry)
                    .copied()
                    .map(Action::GotoSection)
            }
            KeyCode::Char(']') => Some(Action::NextSkill),
            KeyCode::Char('[') => Some(Action::PrevSkill),
            KeyCode::Char('s') => Some(Action::ToggleSound),
            KeyCode::Char('r') => Some(Action::Reload),
            KeyCode::Char('u') => Some(Action::EditApiUrl),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        _ => None,
    }
}
