//! Spread building: lays chunked content and structural pages out as an
//! ordered sequence of two-page spreads.
//!
//! The builder only counts chunks. Generated page ids carry the chunk index so
//! the renderer can resolve them against the same chunk sequence.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Structural spreads before the generated ones (cover, summary).
pub const OPENING_SPREADS: usize = 2;
/// Structural spreads after the generated ones (graph, contact/closing).
pub const CLOSING_SPREADS: usize = 2;

// ============================================================================
// Page ids
// ============================================================================

/// Which page of a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Content collection a generated page draws its cards from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Experiences,
}

impl Collection {
    fn as_str(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Experiences => "experiences",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Collection::Projects => "Projects",
            Collection::Experiences => "Experiences",
        }
    }
}

/// Stable identifier of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    CoverLeft,
    CoverRight,
    SummaryLeft,
    SummaryRight,
    GraphLeft,
    GraphRight,
    ContactLeft,
    /// Right page of the last spread: hobbies and the end of the book.
    Closing,
    Generated {
        collection: Collection,
        side: Side,
        index: usize,
    },
}

impl PageId {
    pub fn is_structural(&self) -> bool {
        !matches!(self, PageId::Generated { .. })
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::CoverLeft => f.write_str("cover-left"),
            PageId::CoverRight => f.write_str("cover-right"),
            PageId::SummaryLeft => f.write_str("summary-left"),
            PageId::SummaryRight => f.write_str("summary-right"),
            PageId::GraphLeft => f.write_str("graph-left"),
            PageId::GraphRight => f.write_str("graph-right"),
            PageId::ContactLeft => f.write_str("contact-left"),
            PageId::Closing => f.write_str("contact-right"),
            PageId::Generated {
                collection,
                side,
                index,
            } => write!(f, "{}-{}-{}", collection.as_str(), side.as_str(), index),
        }
    }
}

/// Failure to parse a page id string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageIdError {
    #[error("unknown page id: {0}")]
    Unknown(String),
    #[error("invalid chunk index in page id: {0}")]
    BadIndex(String),
}

impl FromStr for PageId {
    type Err = PageIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let structural = match s {
            "cover-left" => Some(PageId::CoverLeft),
            "cover-right" => Some(PageId::CoverRight),
            "summary-left" => Some(PageId::SummaryLeft),
            "summary-right" => Some(PageId::SummaryRight),
            "graph-left" => Some(PageId::GraphLeft),
            "graph-right" => Some(PageId::GraphRight),
            "contact-left" => Some(PageId::ContactLeft),
            "contact-right" | "closing" => Some(PageId::Closing),
            _ => None,
        };
        if let Some(id) = structural {
            return Ok(id);
        }

        let mut parts = s.splitn(3, '-');
        let (Some(collection), Some(side), Some(index)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(PageIdError::Unknown(s.to_string()));
        };

        let collection = match collection {
            "projects" => Collection::Projects,
            "experiences" => Collection::Experiences,
            _ => return Err(PageIdError::Unknown(s.to_string())),
        };
        let side = match side {
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(PageIdError::Unknown(s.to_string())),
        };
        let index = index
            .parse::<usize>()
            .map_err(|_| PageIdError::BadIndex(s.to_string()))?;

        Ok(PageId::Generated {
            collection,
            side,
            index,
        })
    }
}

// ============================================================================
// Spreads
// ============================================================================

/// One visible two-page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spread {
    pub left: PageId,
    pub right: PageId,
}

impl Spread {
    pub const COVER: Spread = Spread::structural(PageId::CoverLeft, PageId::CoverRight);
    pub const SUMMARY: Spread = Spread::structural(PageId::SummaryLeft, PageId::SummaryRight);
    pub const GRAPH: Spread = Spread::structural(PageId::GraphLeft, PageId::GraphRight);
    pub const CONTACT: Spread = Spread::structural(PageId::ContactLeft, PageId::Closing);

    const fn structural(left: PageId, right: PageId) -> Self {
        Self { left, right }
    }

    /// Spread showing chunk `index` of `collection`.
    pub fn generated(collection: Collection, index: usize) -> Self {
        Self {
            left: PageId::Generated {
                collection,
                side: Side::Left,
                index,
            },
            right: PageId::Generated {
                collection,
                side: Side::Right,
                index,
            },
        }
    }

    pub fn pages(&self) -> [PageId; 2] {
        [self.left, self.right]
    }
}

/// Total spreads for the given chunk counts.
pub fn spread_count(project_chunks: usize, experience_chunks: usize) -> usize {
    OPENING_SPREADS + project_chunks + experience_chunks + CLOSING_SPREADS
}

/// Build the spread sequence: cover, summary, one spread per project chunk,
/// one per experience chunk, graph, contact/closing.
///
/// Never empty: with no content the four structural spreads remain.
pub fn build_spreads<P, E>(project_chunks: &[P], experience_chunks: &[E]) -> Vec<Spread> {
    let mut spreads = Vec::with_capacity(spread_count(
        project_chunks.len(),
        experience_chunks.len(),
    ));

    spreads.push(Spread::COVER);
    spreads.push(Spread::SUMMARY);
    spreads.extend((0..project_chunks.len()).map(|i| Spread::generated(Collection::Projects, i)));
    spreads.extend(
        (0..experience_chunks.len()).map(|i| Spread::generated(Collection::Experiences, i)),
    );
    spreads.push(Spread::GRAPH);
    spreads.push(Spread::CONTACT);

    spreads
}

// ============================================================================
// Table of contents
// ============================================================================

/// Sections reachable from the summary page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Cover,
    Projects,
    Experiences,
    Graph,
    Contact,
}

impl Section {
    pub const TABLE_OF_CONTENTS: [Section; 4] = [
        Section::Projects,
        Section::Experiences,
        Section::Graph,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Cover => "Cover",
            Section::Projects => "Projects",
            Section::Experiences => "Experiences",
            Section::Graph => "Skill graph",
            Section::Contact => "Contact",
        }
    }

    /// Spread index the section starts at.
    ///
    /// An empty collection's anchor lands on whatever follows it.
    pub fn anchor(self, project_chunks: usize, experience_chunks: usize) -> usize {
        match self {
            Section::Cover => 0,
            Section::Projects => OPENING_SPREADS,
            Section::Experiences => OPENING_SPREADS + project_chunks,
            Section::Graph => OPENING_SPREADS + project_chunks + experience_chunks,
            Section::Contact => OPENING_SPREADS + project_chunks + experience_chunks + 1,
        }
    }
}
