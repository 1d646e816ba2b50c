use masthead_core::{Catalog, MagazineId, ValidationError};
use std::collections::HashSet;

#[test]
fn add_article_shows_up_for_author_and_magazine() {
    let mut catalog = Catalog::in_memory();
    let author = catalog.create_author("Carry Bradshaw").unwrap();
    let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();

    let article = catalog.add_article(author, magazine, "Valid Title").unwrap();

    let stored = catalog.article(article).unwrap();
    assert_eq!(stored.author(), author);
    assert_eq!(stored.magazine(), magazine);

    let by_author: Vec<_> = catalog.author_articles(author).iter().map(|a| a.id()).collect();
    let by_magazine: Vec<_> = catalog
        .magazine_articles(magazine)
        .iter()
        .map(|a| a.id())
        .collect();
    assert_eq!(by_author, vec![article]);
    assert_eq!(by_magazine, vec![article]);
}

#[test]
fn add_article_rejects_unknown_magazine() {
    let mut catalog = Catalog::in_memory();
    let author = catalog.create_author("Carry Bradshaw").unwrap();
    let stranger = MagazineId::generate();

    let err = catalog
        .add_article(author, stranger, "Valid Title")
        .unwrap_err();
    assert_eq!(err, ValidationError::UnknownMagazine(stranger));
    assert_eq!(catalog.article_count(), 0);
}

#[test]
fn add_article_propagates_title_errors_unchanged() {
    let mut catalog = Catalog::in_memory();
    let author = catalog.create_author("Carry Bradshaw").unwrap();
    let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();

    let err = catalog
        .add_article(author, magazine, "x".repeat(51))
        .unwrap_err();
    assert_eq!(err, ValidationError::TitleLength { len: 51 });
    assert!(catalog.author_articles(author).is_empty());
}

#[test]
fn author_articles_follow_registry_order() {
    let mut catalog = Catalog::in_memory();
    let author = catalog.create_author("Carry Bradshaw").unwrap();
    let other = catalog.create_author("Nathaniel Hawthorne").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let ai = catalog.create_magazine("AI Today", "Technology").unwrap();

    catalog.add_article(author, vogue, "First piece").unwrap();
    catalog.add_article(other, vogue, "Someone else").unwrap();
    catalog.add_article(author, ai, "Second piece").unwrap();

    let titles: Vec<_> = catalog
        .author_articles(author)
        .iter()
        .map(|a| a.title())
        .collect();
    assert_eq!(titles, vec!["First piece", "Second piece"]);
}

#[test]
fn magazines_and_topic_areas_have_no_duplicates() {
    let mut catalog = Catalog::in_memory();
    let author = catalog.create_author("Carry Bradshaw").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let gq = catalog.create_magazine("GQ", "Fashion").unwrap();
    let ai = catalog.create_magazine("AI Today", "Technology").unwrap();

    catalog.add_article(author, vogue, "Tutus forever").unwrap();
    catalog.add_article(author, vogue, "Tutus again").unwrap();
    catalog.add_article(author, gq, "Suits and ties").unwrap();
    catalog.add_article(author, ai, "Robots at dinner").unwrap();

    let magazines: HashSet<MagazineId> = catalog
        .author_magazines(author)
        .into_iter()
        .map(|m| m.id())
        .collect();
    assert_eq!(magazines, HashSet::from([vogue, gq, ai]));
    assert_eq!(catalog.author_magazines(author).len(), 3);

    let topics = catalog.author_topic_areas(author);
    assert_eq!(topics, HashSet::from(["Fashion", "Technology"]));
}

#[test]
fn queries_reflect_later_reassignment() {
    let mut catalog = Catalog::in_memory();
    let author = catalog.create_author("Carry Bradshaw").unwrap();
    let other = catalog.create_author("Nathaniel Hawthorne").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let article = catalog.add_article(author, vogue, "Borrowed byline").unwrap();

    assert!(catalog.reassign_article_author(article, other));

    assert!(catalog.author_articles(author).is_empty());
    assert!(catalog.author_topic_areas(author).is_empty());
    assert_eq!(catalog.author_articles(other).len(), 1);
}

#[test]
fn topic_areas_track_magazine_recategorization() {
    let mut catalog = Catalog::in_memory();
    let author = catalog.create_author("Carry Bradshaw").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    catalog.add_article(author, vogue, "Tutus forever").unwrap();

    assert!(catalog.recategorize_magazine(vogue, "Culture"));
    assert_eq!(catalog.author_topic_areas(author), HashSet::from(["Culture"]));
}

#[test]
fn author_without_articles_has_empty_queries() {
    let mut catalog = Catalog::in_memory();
    let author = catalog.create_author("Quiet Writer").unwrap();

    assert!(catalog.author_articles(author).is_empty());
    assert!(catalog.author_magazines(author).is_empty());
    assert!(catalog.author_topic_areas(author).is_empty());
}
