use serde_json::Value;
use std::collections::HashMap;

use crate::config::SiteConfig;
use crate::error::{Result, SedgeError};
use crate::taxonomy;
use crate::types::ContentItem;

pub struct CollectionBuilder<'a> {
    config: &'a SiteConfig,
    items: Vec<ContentItem>,
}

impl<'a> CollectionBuilder<'a> {
    pub fn new(config: &'a SiteConfig, items: Vec<ContentItem>) -> Self {
        Self { config, items }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn filtered<F>(&self, predicate: F) -> Vec<&ContentItem>
    where
        F: Fn(&ContentItem) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    // Items arrive in loader order, oldest first, so the newest post leads.
    pub fn posts(&self) -> Vec<&ContentItem> {
        let mut posts = self.filtered(|item| self.is_post(item));
        posts.reverse();
        posts
    }

    fn is_post(&self, item: &ContentItem) -> bool {
        item.path.parent() == Some(self.config.posts_dir.as_path())
            && item
                .path
                .extension()
                .map(|extension| extension == "md")
                .unwrap_or(false)
    }

    pub fn tag_list(&self) -> Vec<String> {
        taxonomy::collect_tags(&self.items)
    }

    pub fn build_collections(&self) -> Result<HashMap<String, Value>> {
        let mut collections = HashMap::new();

        for name in &self.config.collections {
            let value = match name.as_str() {
                "posts" => serde_json::to_value(self.posts())?,
                "tag_list" => serde_json::to_value(self.tag_list())?,
                _ => {
                    return Err(SedgeError::UnknownCollection { name: name.clone() });
                }
            };
            collections.insert(name.clone(), value);
        }

        Ok(collections)
    }

    pub fn into_items(self) -> Vec<ContentItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Metadata, MetadataValue};
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn item(path: &str, slug: &str, tags: &[&str]) -> ContentItem {
        let mut metadata = Metadata::default();
        if !tags.is_empty() {
            metadata.raw.insert(
                "tags".to_string(),
                MetadataValue::List(tags.iter().map(|tag| tag.to_string()).collect()),
            );
        }

        ContentItem {
            path: PathBuf::from(path),
            slug: slug.to_string(),
            raw_content: String::new(),
            html: String::new(),
            metadata,
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            url: format!("/{slug}/"),
        }
    }

    fn sample_items() -> Vec<ContentItem> {
        vec![
            item("_posts/2024-01-01-first.md", "first", &["rust"]),
            item("_posts/2024-02-01-second.md", "second", &["ssg"]),
            item("_posts/2024-03-01-third.md", "third", &["rust", "ssg"]),
            item("about.md", "about", &[]),
        ]
    }

    #[test]
    fn test_posts_reverses_loader_order() {
        let config = SiteConfig::default();
        let builder = CollectionBuilder::new(&config, sample_items());

        let posts = builder.posts();
        let slugs: Vec<&str> = posts.iter().map(|post| post.slug.as_str()).collect();

        assert_eq!(slugs, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_posts_only_match_markdown_directly_under_posts_dir() {
        let config = SiteConfig::default();
        let items = vec![
            item("_posts/2024-01-01-first.md", "first", &[]),
            item("_posts/drafts/2024-01-02-draft.md", "draft", &[]),
            item("_posts/notes.txt", "notes", &[]),
            item("index.md", "index", &[]),
        ];
        let builder = CollectionBuilder::new(&config, items);

        let posts = builder.posts();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "first");
    }

    #[test]
    fn test_posts_respects_configured_directory() {
        let config = SiteConfig {
            posts_dir: PathBuf::from("articles"),
            ..SiteConfig::default()
        };
        let items = vec![
            item("articles/2024-01-01-first.md", "first", &[]),
            item("_posts/2024-01-02-second.md", "second", &[]),
        ];
        let builder = CollectionBuilder::new(&config, items);

        let posts = builder.posts();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "first");
    }

    #[test]
    fn test_tag_list_spans_posts_and_pages() {
        let config = SiteConfig::default();
        let mut items = sample_items();
        items.push(item("projects.md", "projects", &["showcase"]));
        let builder = CollectionBuilder::new(&config, items);

        assert_eq!(builder.tag_list(), vec!["rust", "showcase", "ssg"]);
    }

    #[test]
    fn test_filtered_applies_predicate() {
        let config = SiteConfig::default();
        let builder = CollectionBuilder::new(&config, sample_items());

        assert_eq!(builder.items().len(), 4);

        let tagged_rust = builder.filtered(|item| item.tags().contains(&"rust".to_string()));

        assert_eq!(tagged_rust.len(), 2);
    }

    #[test]
    fn test_build_collections_defaults() {
        let config = SiteConfig::default();
        let builder = CollectionBuilder::new(&config, sample_items());

        let collections = builder.build_collections().unwrap();

        assert_eq!(collections.len(), 2);

        let posts = collections["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0]["slug"], "third");

        let tag_list = collections["tag_list"].as_array().unwrap();
        assert_eq!(tag_list.len(), 2);
        assert_eq!(tag_list[0], "rust");
    }

    #[test]
    fn test_build_collections_unknown_name() {
        let config = SiteConfig {
            collections: vec!["related".to_string()],
            ..SiteConfig::default()
        };
        let builder = CollectionBuilder::new(&config, sample_items());

        let result = builder.build_collections();

        assert!(matches!(
            result,
            Err(SedgeError::UnknownCollection { name }) if name == "related"
        ));
    }

    #[test]
    fn test_into_items_returns_everything() {
        let config = SiteConfig::default();
        let builder = CollectionBuilder::new(&config, sample_items());

        assert_eq!(builder.into_items().len(), 4);
    }
}
