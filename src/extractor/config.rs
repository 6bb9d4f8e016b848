use serde::{Deserialize, Serialize};

/// Configuration for article content extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// CSS selectors to try for article content, in priority order.
    pub content_selectors: Vec<String>,

    /// CSS selectors for elements to strip before extraction (ads,
    /// navigation, etc.).
    pub remove_selectors: Vec<String>,

    /// Minimum text length for a selector match to count as the article
    /// body; shorter matches fall through to the next selector.
    pub min_text_length: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            content_selectors: vec![
                // Common article content selectors in priority order
                "article".to_string(),
                "[role=\"main\"]".to_string(),
                "main".to_string(),
                ".post-content".to_string(),
                ".article-content".to_string(),
                ".entry-content".to_string(),
                ".content".to_string(),
                "#content".to_string(),
                ".post".to_string(),
                ".article".to_string(),
                ".blog-post".to_string(),
            ],
            remove_selectors: vec![
                // Common elements to remove
                "nav".to_string(),
                "header".to_string(),
                "footer".to_string(),
                "aside".to_string(),
                ".sidebar".to_string(),
                ".advertisement".to_string(),
                ".ad".to_string(),
                ".ads".to_string(),
                ".social-share".to_string(),
                ".comments".to_string(),
                ".related-posts".to_string(),
                "script".to_string(),
                "style".to_string(),
                "noscript".to_string(),
            ],
            min_text_length: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = ExtractorConfig::default();
        assert_eq!(config.min_text_length, 100);
        assert!(!config.content_selectors.is_empty());
        assert!(!config.remove_selectors.is_empty());
        assert_eq!(config.content_selectors[0], "article");
    }
}
