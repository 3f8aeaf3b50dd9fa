use anyhow::Result;
use seedscrub_config::Config;
use seedscrub_core::UrlSanitizer;

/// Sanitize the configured seed file and print the confirmation line
pub fn handle(config: &Config) -> Result<()> {
    let sanitizer = UrlSanitizer::with_placeholder(&config.placeholder)?;
    let report = sanitizer.sanitize(&config.target)?;

    tracing::debug!("{} URL literal(s) replaced", report.replacements);
    println!("✓ All URLs replaced with {}", config.placeholder);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedscrub_core::SanitizeError;

    #[test]
    fn test_handle_rewrites_target() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("seed_cloud.sql");
        std::fs::write(&target, "VALUES ('http://a.com', 'https://b.com/x')").unwrap();

        let config = Config {
            target: target.clone(),
            ..Config::default()
        };
        handle(&config).unwrap();

        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            "VALUES ('http://onlinekompas.cz/', 'http://onlinekompas.cz/')"
        );
    }

    #[test]
    fn test_handle_missing_target() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("missing.sql");

        let config = Config {
            target: target.clone(),
            ..Config::default()
        };
        let err = handle(&config).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SanitizeError>(),
            Some(SanitizeError::NotFound { .. })
        ));
        assert!(!target.exists());
    }

    #[test]
    fn test_handle_rejects_bad_placeholder_before_touching_target() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("seed_cloud.sql");
        std::fs::write(&target, "('http://a.com')").unwrap();

        let config = Config {
            target: target.clone(),
            placeholder: "http://x/'y".to_string(),
        };
        let err = handle(&config).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SanitizeError>(),
            Some(SanitizeError::InvalidPlaceholder(_))
        ));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "('http://a.com')");
    }
}
