//! Page renderer: turns a page id into the lines printed on one side of the
//! open book.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
    Frame,
};

use crate::core::book::{Book, PageContent};
use crate::core::content::ContentItem;
use crate::core::models::PersonRecord;
use crate::core::spreads::{PageId, Section};
use crate::tui::theme;

const NOT_AVAILABLE: &str = "n/a";

/// Renders pages of one book.
pub struct PageView<'a> {
    book: &'a Book,
}

impl<'a> PageView<'a> {
    pub fn new(book: &'a Book) -> Self {
        Self { book }
    }

    /// Draw `page` into `area`. A page that is being turned over is drawn in
    /// faded ink.
    pub fn render(&self, frame: &mut Frame, area: Rect, page: PageId, turning: bool) {
        let style = if turning {
            theme::turning()
        } else {
            theme::page()
        };
        let lines = if turning {
            self.lines(page).into_iter().map(fade).collect()
        } else {
            self.lines(page)
        };

        let block = Block::default().padding(Padding::horizontal(1)).style(style);
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .style(style)
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    /// Lines printed on `page`.
    pub fn lines(&self, page: PageId) -> Vec<Line<'static>> {
        match self.book.resolve(page) {
            PageContent::Structural(id) => self.structural(id),
            content @ PageContent::Cards {
                collection,
                page_number,
                ..
            } => {
                let mut lines = vec![
                    heading(format!("{} · Page {page_number}", collection.label())),
                    Line::raw(""),
                ];
                let visible = content.visible_cards();
                if visible.is_empty() {
                    lines.push(muted("(blank page)"));
                }
                for item in visible {
                    push_card(&mut lines, item);
                }
                lines
            }
        }
    }

    fn structural(&self, page: PageId) -> Vec<Line<'static>> {
        match page {
            PageId::CoverLeft => self.cover_left(),
            PageId::CoverRight => self.cover_right(),
            PageId::SummaryLeft => self.summary_left(),
            PageId::SummaryRight => self.summary_right(),
            PageId::GraphLeft => self.graph_left(),
            PageId::GraphRight => self.graph_right(),
            PageId::ContactLeft => self.contact_left(),
            PageId::Closing => self.closing(),
            // Resolved as cards before reaching here.
            PageId::Generated { .. } => Vec::new(),
        }
    }

    fn cover_left(&self) -> Vec<Line<'static>> {
        let name = self
            .book
            .person()
            .and_then(PersonRecord::full_name)
            .unwrap_or_else(|| "Portfolio".to_string());
        vec![
            Line::raw(""),
            heading("The Portfolio"),
            heading("Book"),
            Line::raw(""),
            Line::styled(name, theme::card_title()),
            Line::raw(""),
            Line::raw("An interactive journal of projects, experiences and skills."),
            Line::raw(""),
            muted("Turn right to open."),
        ]
    }

    fn cover_right(&self) -> Vec<Line<'static>> {
        let api = match self.book.health() {
            Some(health) => format!(
                "API: connected (v{})",
                health.version.as_deref().unwrap_or(NOT_AVAILABLE)
            ),
            None => "API: not available".to_string(),
        };
        vec![
            heading("Data-driven edition"),
            Line::raw(""),
            Line::raw("Every page of this book is laid out from live portfolio data."),
            Line::raw(""),
            Line::raw("• Projects and experiences, four to a spread"),
            Line::raw("• A skill graph linking skills to projects"),
            Line::raw("• Contact details and hobbies at the end"),
            Line::raw(""),
            muted(api),
        ]
    }

    fn summary_left(&self) -> Vec<Line<'static>> {
        let mut lines = vec![heading("Contents"), Line::raw("")];
        for (number, section) in Section::TABLE_OF_CONTENTS.iter().enumerate() {
            let spread = self.book.anchor(*section) + 1;
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", number + 1), theme::link()),
                Span::styled(section.label().to_string(), theme::card_title()),
                Span::styled(format!("  spread {spread}"), theme::muted()),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(muted("Press a number to jump."));
        lines
    }

    fn summary_right(&self) -> Vec<Line<'static>> {
        let portfolio = self.book.portfolio();
        let description = self
            .book
            .person()
            .and_then(|p| p.description.clone())
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "Description unavailable.".to_string());
        vec![
            heading("Profile"),
            Line::raw(""),
            Line::raw(description),
            Line::raw(""),
            Line::raw(format!("• Projects: {}", portfolio.projects.len())),
            Line::raw(format!("• Experiences: {}", portfolio.experiences.len())),
            Line::raw(format!("• Skills: {}", portfolio.skills.len())),
            Line::raw(format!("• Technologies: {}", portfolio.technologies.len())),
            Line::raw(""),
            muted("Click the right or left page to turn."),
        ]
    }

    fn graph_left(&self) -> Vec<Line<'static>> {
        let mut lines = vec![heading("Skill graph"), Line::raw("")];
        let selected = self.book.selected_skill();
        if self.book.skills().is_empty() {
            lines.push(muted("No skills recorded."));
        }
        for skill in self.book.skills() {
            if Some(skill.nom.as_str()) == selected {
                lines.push(Line::styled(format!("▸ {}", skill.nom), theme::link()));
            } else {
                lines.push(Line::raw(format!("  {}", skill.nom)));
            }
        }
        lines.push(muted("[ / ] to change skill"));
        lines.push(Line::raw(""));
        lines.push(subheading("Technologies"));

        let chips: Vec<Span<'static>> = self
            .book
            .technologies()
            .iter()
            .flat_map(|t| {
                [
                    Span::styled(format!("[{}]", t.nom), theme::muted()),
                    Span::raw(" "),
                ]
            })
            .collect();
        if chips.is_empty() {
            lines.push(muted(NOT_AVAILABLE));
        } else {
            lines.push(Line::from(chips));
        }
        lines
    }

    fn graph_right(&self) -> Vec<Line<'static>> {
        let skill = self.book.selected_skill().unwrap_or("...");
        let mut lines = vec![heading(format!("Projects using {skill}")), Line::raw("")];
        let related = self.book.related_projects();
        if related.is_empty() {
            lines.push(muted("No related projects found for this skill."));
        }
        for project in related {
            lines.push(Line::from(vec![
                Span::styled(project.nom.clone(), theme::card_title()),
                Span::styled(
                    format!(" · {}", project.status.as_deref().unwrap_or(NOT_AVAILABLE)),
                    theme::muted(),
                ),
            ]));
        }
        lines
    }

    fn contact_left(&self) -> Vec<Line<'static>> {
        let contact = self.book.person().and_then(|p| p.contact.clone()).unwrap_or_default();
        let field = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let mut lines = vec![
            heading("Contact"),
            Line::raw(""),
            Line::raw(format!("Email: {}", field(contact.mail))),
            Line::raw(format!("Phone: {}", field(contact.tel))),
            Line::raw(format!("LinkedIn: {}", field(contact.linkedin))),
            Line::raw(""),
            subheading("Education"),
        ];
        let education = &self.book.profile().parcours_scolaire;
        if education.is_empty() {
            lines.push(muted(NOT_AVAILABLE));
        }
        for item in education {
            let years = |year: Option<i32>| year.map_or_else(|| "?".to_string(), |y| y.to_string());
            lines.push(Line::raw(format!(
                "{} · {} ({} - {})",
                item.school_name,
                item.degree.as_deref().unwrap_or(NOT_AVAILABLE),
                years(item.start_year),
                years(item.end_year)
            )));
        }
        lines
    }

    fn closing(&self) -> Vec<Line<'static>> {
        let mut lines = vec![heading("Hobbies & the end"), Line::raw("")];
        for hobby in self.book.hobbies() {
            let mut line = vec![Span::styled(hobby.nom.clone(), theme::card_title())];
            if let Some(description) = hobby.description.as_deref().filter(|d| !d.is_empty()) {
                line.push(Span::styled(format!(" · {description}"), theme::page()));
            }
            lines.push(Line::from(line));
        }
        lines.push(Line::raw(""));
        lines.push(muted("End of the book. Turn left to go back."));
        lines
    }
}

fn push_card(lines: &mut Vec<Line<'static>>, item: &ContentItem) {
    lines.push(Line::styled(item.title.clone(), theme::card_title()));
    lines.push(muted(item.subtitle.clone()));
    lines.push(Line::raw(item.body.clone()));
    lines.push(muted(item.footer.clone()));
    if let Some(link) = &item.link {
        lines.push(Line::styled(format!("GitHub: {link}"), theme::link()));
    }
    lines.push(Line::raw(""));
}

fn fade(line: Line<'static>) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .into_iter()
        .map(|span| span.style(theme::turning()))
        .collect();
    Line::from(spans).style(theme::turning())
}

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::styled(text.into(), theme::heading())
}

fn subheading(text: impl Into<String>) -> Line<'static> {
    Line::styled(text.into(), theme::card_title())
}

fn muted(text: impl Into<String>) -> Line<'static> {
    Line::styled(text.into(), theme::muted())
}
