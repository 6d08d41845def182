use crate::domain::models::{Topic, TopicFile};
use std::collections::HashSet;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("topics file not found: {0}")]
    NotFound(String),
    #[error("failed to read topics file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("topics file {path} is not valid JSON: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum TopicError {
    #[error("topic not found: {0}")]
    NotFound(String),
    #[error("duplicate topic slug: {0}")]
    DuplicateSlug(String),
}

/// Load the ordered topic list. The file must exist and parse; no further
/// validation happens here (duplicate slugs are only rejected by `validate`).
pub fn load_topics(path: &Path) -> Result<Vec<Topic>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path).map_err(|e| LoadError::Unreadable {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: TopicFile = serde_json::from_str(&raw).map_err(|e| LoadError::Malformed {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(file.topics)
}

pub fn discover<'a>(topics: &'a [Topic], query: Option<&str>) -> Vec<&'a Topic> {
    match query {
        None => topics.iter().collect(),
        Some(q) => {
            let q = q.to_ascii_lowercase();
            topics
                .iter()
                .filter(|t| {
                    t.title.to_ascii_lowercase().contains(&q)
                        || t.slug.to_ascii_lowercase().contains(&q)
                        || t.description.to_ascii_lowercase().contains(&q)
                        || t.keywords
                            .iter()
                            .any(|k| k.to_ascii_lowercase().contains(&q))
                })
                .collect()
        }
    }
}

pub fn show<'a>(topics: &'a [Topic], slug: &str) -> Result<&'a Topic, TopicError> {
    topics
        .iter()
        .find(|t| t.slug == slug)
        .ok_or_else(|| TopicError::NotFound(slug.to_string()))
}

pub fn validate(topics: &[Topic]) -> Result<(), TopicError> {
    let mut seen = HashSet::new();
    for t in topics {
        if !seen.insert(&t.slug) {
            return Err(TopicError::DuplicateSlug(t.slug.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{discover, show, validate};
    use crate::domain::models::Topic;

    fn topic(slug: &str, title: &str, keyword: &str) -> Topic {
        Topic {
            title: title.to_string(),
            slug: slug.to_string(),
            keywords: vec![keyword.to_string()],
            target_products: vec!["p1".to_string()],
            target_collections: vec!["c1".to_string()],
            description: "d".to_string(),
        }
    }

    #[test]
    fn validate_rejects_duplicate_slug() {
        let topics = vec![
            topic("roof-racks", "Roof Racks", "racks"),
            topic("roof-racks", "Roof Racks Again", "racks"),
        ];
        let err = validate(&topics).unwrap_err();
        assert_eq!(err.to_string(), "duplicate topic slug: roof-racks");
    }

    #[test]
    fn validate_accepts_unique_slugs() {
        let topics = vec![
            topic("roof-racks", "Roof Racks", "racks"),
            topic("cat-fences", "Cat Fences", "fences"),
        ];
        assert!(validate(&topics).is_ok());
    }

    #[test]
    fn discover_matches_title_and_keywords() {
        let topics = vec![
            topic("roof-racks", "Best Roof Racks", "cargo"),
            topic("cat-fences", "Cat Fences", "containment"),
        ];
        assert_eq!(discover(&topics, Some("roof")).len(), 1);
        assert_eq!(discover(&topics, Some("containment")).len(), 1);
        assert_eq!(discover(&topics, None).len(), 2);
        assert!(discover(&topics, Some("gazebo")).is_empty());
    }

    #[test]
    fn show_finds_by_slug() {
        let topics = vec![topic("roof-racks", "Best Roof Racks", "cargo")];
        assert_eq!(show(&topics, "roof-racks").unwrap().title, "Best Roof Racks");
        assert!(show(&topics, "missing").is_err());
    }
}
