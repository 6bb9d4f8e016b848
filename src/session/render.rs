//! Plain-text rendering for pager listings and article bodies.

use crate::config::Spacing;
use crate::domain::{Article, FeedSection};

const RULE_WIDTH: usize = 80;

/// The grouped, globally numbered "new articles" listing. Numbering runs
/// across sections so a single integer identifies any article.
pub fn new_listing(sections: &[FeedSection]) -> String {
    let mut out = String::from("\nAvailable New Articles:\n\n");
    let mut index = 1;

    for section in sections {
        out.push_str(&section.feed_title);
        out.push_str("\n\n");
        for article in &section.articles {
            out.push_str(&format!("{index}. {}\n", article.display_title()));
            index += 1;
        }
        out.push('\n');
    }

    out
}

pub fn saved_listing(links: &[String]) -> String {
    numbered_listing("Saved Articles", links.iter().map(String::as_str))
}

pub fn read_listing<'a>(links: impl Iterator<Item = &'a str>) -> String {
    numbered_listing("Read Articles", links)
}

fn numbered_listing<'a>(heading: &str, links: impl Iterator<Item = &'a str>) -> String {
    let mut out = format!("\n{heading}:\n\n");
    for (i, link) in links.enumerate() {
        out.push_str(&format!("{}. {link}\n", i + 1));
    }
    out
}

/// The article as shown in the pager: a ruled title header with the
/// reading-time estimate, then the body paragraphs. `Double` spacing
/// inserts a blank line after each paragraph.
pub fn article(article: &Article, spacing: Spacing) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!(
        "\n{rule}\n{} ({} min read)\n{rule}\n\n",
        article.title,
        article.reading_minutes()
    );

    for paragraph in article.text.lines() {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        out.push_str(paragraph);
        out.push('\n');
        if spacing == Spacing::Double {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArticleRef;

    fn sections() -> Vec<FeedSection> {
        vec![
            FeedSection {
                feed_title: "Feed One".into(),
                articles: vec![
                    ArticleRef {
                        title: "First".into(),
                        link: "https://a/1".into(),
                    },
                    ArticleRef {
                        title: "Second".into(),
                        link: "https://a/2".into(),
                    },
                ],
            },
            FeedSection {
                feed_title: "Feed Two".into(),
                articles: vec![ArticleRef {
                    title: "Third".into(),
                    link: "https://b/1".into(),
                }],
            },
        ]
    }

    #[test]
    fn test_new_listing_numbers_across_sections() {
        let listing = new_listing(&sections());
        assert!(listing.contains("Feed One"));
        assert!(listing.contains("1. First"));
        assert!(listing.contains("2. Second"));
        assert!(listing.contains("Feed Two"));
        assert!(listing.contains("3. Third"));
    }

    #[test]
    fn test_saved_listing_is_one_indexed() {
        let listing = saved_listing(&["https://x".into(), "https://y".into()]);
        assert!(listing.contains("1. https://x"));
        assert!(listing.contains("2. https://y"));
    }

    #[test]
    fn test_article_header_and_estimate() {
        let a = Article {
            title: "A Title".into(),
            text: "Some body text.".into(),
        };
        let out = article(&a, Spacing::Single);
        assert!(out.contains("A Title (1 min read)"));
        assert!(out.contains(&"=".repeat(80)));
        assert!(out.contains("Some body text.\n"));
    }

    #[test]
    fn test_article_single_vs_double_spacing() {
        let a = Article {
            title: "T".into(),
            text: "one\ntwo".into(),
        };

        let single = article(&a, Spacing::Single);
        assert!(single.ends_with("one\ntwo\n"));

        let double = article(&a, Spacing::Double);
        assert!(double.ends_with("one\n\ntwo\n\n"));
    }

    #[test]
    fn test_article_drops_blank_paragraphs() {
        let a = Article {
            title: "T".into(),
            text: "one\n   \n\ntwo".into(),
        };
        let out = article(&a, Spacing::Single);
        assert!(out.ends_with("one\ntwo\n"));
    }
}
