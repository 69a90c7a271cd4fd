//! Book Layout Scenario Tests
//!
//! Collection sizes in, spread sequences and table-of-contents anchors out.

use rstest::rstest;

use crate::core::book::PageContent;
use crate::core::navigation::Direction;
use crate::core::spreads::{Collection, PageId, Section, Side, Spread};
use crate::tests::common::{book, experiences, portfolio, projects, skills};

#[rstest]
#[case::empty(0, 0, 4)]
#[case::one_project(1, 0, 5)]
#[case::exact_page(4, 4, 6)]
#[case::nine_and_five(9, 5, 9)]
#[case::many(40, 13, 18)]
fn spread_count_for_collections(
    #[case] project_count: usize,
    #[case] experience_count: usize,
    #[case] spreads: usize,
) {
    assert_eq!(book(project_count, experience_count).spreads().len(), spreads);
}

#[test]
fn nine_projects_five_experiences_layout() {
    let book = book(9, 5);
    let spreads = book.spreads();
    assert_eq!(spreads[0], Spread::COVER);
    assert_eq!(spreads[1], Spread::SUMMARY);
    assert_eq!(spreads[2], Spread::generated(Collection::Projects, 0));
    assert_eq!(spreads[4], Spread::generated(Collection::Projects, 2));
    assert_eq!(spreads[5], Spread::generated(Collection::Experiences, 0));
    assert_eq!(spreads[6], Spread::generated(Collection::Experiences, 1));
    assert_eq!(spreads[7], Spread::GRAPH);
    assert_eq!(spreads[8], Spread::CONTACT);

    // Last project chunk holds the ninth project alone
    let PageContent::Cards { chunk, page_number, .. } = book.resolve(spreads[4].left) else {
        panic!("expected cards");
    };
    assert_eq!(page_number, 3);
    assert_eq!(chunk.len(), 1);
    assert_eq!(chunk[0].title, "project 8");
}

#[test]
fn empty_book_boundaries() {
    let mut book = book(0, 0);
    let ticket = book.turn(Direction::Forward).expect("forward from cover");
    assert!(book.settle(ticket));
    assert!(book.goto(3));
    assert!(book.turn(Direction::Forward).is_none());
    assert_eq!(book.current_spread(), Spread::CONTACT);
}

#[rstest]
#[case::projects(Section::Projects, 2)]
#[case::experiences(Section::Experiences, 5)]
#[case::graph(Section::Graph, 7)]
#[case::contact(Section::Contact, 8)]
#[case::cover(Section::Cover, 0)]
fn table_of_contents_anchors(#[case] section: Section, #[case] index: usize) {
    let mut book = book(9, 5);
    assert_eq!(book.anchor(section), index);
    assert!(book.goto_section(section));
    assert_eq!(book.navigation().current_index, index);
}

#[test]
fn empty_collection_anchor_lands_on_next_section() {
    let book = book(0, 5);
    assert_eq!(book.anchor(Section::Projects), 2);
    assert_eq!(
        book.spreads()[2],
        Spread::generated(Collection::Experiences, 0)
    );
}

#[test]
fn page_ids_of_current_spread_roundtrip() {
    let book = book(6, 2);
    for spread in book.spreads() {
        for page in spread.pages() {
            let parsed: PageId = page.to_string().parse().expect("valid page id");
            assert_eq!(parsed, page);
        }
    }
}

#[test]
fn removing_experiences_mid_transition_clamps() {
    let mut book = book(9, 5);
    assert!(book.goto(7));
    let ticket = book.turn(Direction::Forward).expect("accepted");
    book.set_experiences(experiences(0));
    book.set_projects(projects(1));
    // 1 project chunk, no experiences: 5 spreads
    assert_eq!(book.spreads().len(), 5);
    assert!(book.settle(ticket));
    assert_eq!(book.navigation().current_index, 4);
    assert_eq!(book.current_spread(), Spread::CONTACT);
}

#[test]
fn generated_page_sides() {
    let book = book(4, 0);
    let spread = book.spreads()[2];
    let left = book.resolve(spread.left);
    let right = book.resolve(spread.right);
    assert!(matches!(left, PageContent::Cards { side: Side::Left, .. }));
    assert!(matches!(right, PageContent::Cards { side: Side::Right, .. }));
    let titles: Vec<&str> = left
        .visible_cards()
        .iter()
        .chain(right.visible_cards())
        .map(|card| card.title.as_str())
        .collect();
    assert_eq!(titles, ["project 0", "project 1", "project 2", "project 3"]);
}

#[test]
fn reload_returns_to_cover_with_first_skill() {
    let mut book = book(9, 5);
    assert!(book.goto(6));
    let mut next = portfolio(2, 2);
    next.skills = skills(&["Rust", "SQL"]);
    book.load(next);
    assert_eq!(book.navigation().current_index, 0);
    assert_eq!(book.spreads().len(), 6);
    assert_eq!(book.selected_skill(), Some("Rust"));
}
