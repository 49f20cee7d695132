use crate::config::types::{ArchiveConfig, Config, CrawlerConfig, ExtractConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_archive_config(&config.archive)?;
    validate_extract_config(&config.extract)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the archive/listing configuration
fn validate_archive_config(config: &ArchiveConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "archive name cannot be empty".to_string(),
        ));
    }

    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;
    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must be http or https, got {}",
            base.scheme()
        )));
    }

    if !config.listing_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "listing-path must start with '/', got '{}'",
            config.listing_path
        )));
    }

    if config.page_count < 1 {
        return Err(ConfigError::Validation(format!(
            "page-count must be >= 1, got {}",
            config.page_count
        )));
    }

    if config.page_query.is_empty() {
        return Err(ConfigError::Validation(
            "page-query cannot be empty".to_string(),
        ));
    }

    if config.link_prefixes.is_empty() {
        return Err(ConfigError::Validation(
            "at least one link-prefix is required".to_string(),
        ));
    }
    for prefix in &config.link_prefixes {
        if !prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "link-prefixes must start with '/', got '{}'",
                prefix
            )));
        }
    }

    Ok(())
}

/// Validates the extraction configuration
fn validate_extract_config(config: &ExtractConfig) -> Result<(), ConfigError> {
    if config.min_words < 1 {
        return Err(ConfigError::Validation(format!(
            "min-words must be >= 1, got {}",
            config.min_words
        )));
    }

    if let Some(selector) = &config.expand_selector {
        if selector.is_empty() {
            return Err(ConfigError::Validation(
                "expand-selector cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates the crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.fetch_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetch-timeout-secs must be >= 1, got {}",
            config.fetch_timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.corpus_dir.is_empty() {
        return Err(ConfigError::Validation(
            "corpus-dir cannot be empty".to_string(),
        ));
    }

    if config.log_path.is_empty() {
        return Err(ConfigError::Validation(
            "log-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
