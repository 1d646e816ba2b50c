//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `masthead_core` linkage by building a small sample catalog.
//! - Print derived query results in a deterministic order.

use masthead_core::{Catalog, ValidationResult};

fn main() {
    println!("masthead_core version={}", masthead_core::core_version());
    if let Err(err) = run() {
        eprintln!("sample catalog failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> ValidationResult<()> {
    let mut catalog = Catalog::in_memory();

    let carry = catalog.create_author("Carry Bradshaw")?;
    let nathaniel = catalog.create_author("Nathaniel Hawthorne")?;
    let vogue = catalog.create_magazine("Vogue", "Fashion")?;
    let ai = catalog.create_magazine("AI Today", "Technology")?;

    catalog.add_article(carry, vogue, "How to wear a tutu with style")?;
    catalog.add_article(carry, vogue, "Dating life in NYC")?;
    catalog.add_article(carry, vogue, "Sneakers as evening wear")?;
    catalog.add_article(carry, ai, "Robots and runway trends")?;
    catalog.add_article(nathaniel, ai, "The scarlet algorithm")?;

    for author in catalog.authors() {
        let mut topics: Vec<_> = catalog.author_topic_areas(author.id()).into_iter().collect();
        topics.sort_unstable();
        println!(
            "author name={} articles={} topics={}",
            author.name(),
            catalog.author_articles(author.id()).len(),
            topics.join(",")
        );
    }

    for magazine in catalog.magazines() {
        let mut heavy: Vec<_> = catalog
            .magazine_contributing_authors(magazine.id())
            .into_iter()
            .map(|author| author.name())
            .collect();
        heavy.sort_unstable();
        println!(
            "magazine name={} titles={:?} contributing_authors={:?}",
            magazine.name(),
            catalog.magazine_article_titles(magazine.id()),
            heavy
        );
    }

    if let Some(top) = catalog.top_publisher() {
        println!("top_publisher={}", top.name());
    }
    Ok(())
}
