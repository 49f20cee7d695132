use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses an adapter configuration file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SERMON_CONFIG: &str = r#"
[archive]
name = "gty-sermons"
base-url = "https://www.example.org"
listing-path = "/sermons/archive"
link-prefixes = ["/sermons/"]
link-excludes = ["/archive"]

[extract]
kind = "sermon"
min-words = 100
expand-selector = ".sermon-transcript-expand-btn"
title-suffix = "| Grace Archive"

[output]
corpus-dir = "corpus/sermons"
log-path = "sermons_scrape.log"
"#;

    const ARTICLE_CONFIG: &str = r#"
[archive]
name = "itm-articles"
base-url = "https://www.example.org"
listing-path = "/read"
page-count = 56
link-prefixes = ["/read/articles/", "/read/daily-devotions/"]

[extract]
kind = "article"
min-words = 50

[crawler]
fetch-timeout-secs = 30

[output]
corpus-dir = "corpus/articles"
log-path = "articles_scrape.log"
"#;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_sermon_config() {
        let file = write_config(SERMON_CONFIG);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.archive.name, "gty-sermons");
        assert_eq!(config.extract.kind, ExtractorKind::Sermon);
        assert_eq!(config.extract.min_words, 100);
        assert_eq!(
            config.extract.expand_selector.as_deref(),
            Some(".sermon-transcript-expand-btn")
        );
        // Defaults
        assert_eq!(config.archive.page_count, 1);
        assert_eq!(config.archive.page_query, "page");
        assert_eq!(config.extract.settle_ms, 600);
        assert_eq!(config.crawler.fetch_timeout_secs, 60);
        assert_eq!(config.crawler.courtesy_delay_ms, 1000);
    }

    #[test]
    fn test_load_article_config() {
        let file = write_config(ARTICLE_CONFIG);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.extract.kind, ExtractorKind::Article);
        assert_eq!(config.archive.page_count, 56);
        assert_eq!(config.archive.link_prefixes.len(), 2);
        assert_eq!(config.crawler.fetch_timeout_secs, 30);
        assert!(config.extract.expand_selector.is_none());
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/lectern.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("this is not toml [[[");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_base_url_fails_validation() {
        let file = write_config(&SERMON_CONFIG.replace(
            "https://www.example.org",
            "not a url",
        ));
        let result = load_config(file.path());
        assert!(result.is_err());
    }
}
