use std::path::Path;

use crate::errors::CrosscheckError;

use super::types::CrosscheckConfig;

pub async fn parse_config(path: &Path) -> Result<CrosscheckConfig, CrosscheckError> {
    if !path.exists() {
        return Err(CrosscheckError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(CrosscheckError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: CrosscheckConfig = serde_yaml::from_str(&content)?;
    validate(&config)?;

    Ok(config)
}

/// Reject values the engine cannot act on.
pub fn validate(config: &CrosscheckConfig) -> Result<(), CrosscheckError> {
    if let Some(threshold) = config.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CrosscheckError::Config(format!(
                "threshold must lie in [0, 1], got {threshold}"
            )));
        }
    }

    if let Some(page) = &config.page {
        if page.top <= page.bottom {
            return Err(CrosscheckError::Config(
                "page.top must be greater than page.bottom".into(),
            ));
        }
        if page.line_height <= 0.0 {
            return Err(CrosscheckError::Config(
                "page.line_height must be positive".into(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::PageGeometry;

    #[test]
    fn test_validate_default_config() {
        assert!(validate(&CrosscheckConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_threshold_out_of_range() {
        let config = CrosscheckConfig {
            threshold: Some(1.5),
            ..Default::default()
        };
        assert!(validate(&config).is_err());

        let config = CrosscheckConfig {
            threshold: Some(-0.1),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_threshold_in_range() {
        let config = CrosscheckConfig {
            threshold: Some(0.85),
            ..Default::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_inverted_page_geometry() {
        let config = CrosscheckConfig {
            page: Some(PageGeometry {
                top: 40.0,
                bottom: 700.0,
                line_height: 15.0,
            }),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_non_positive_line_height() {
        let config = CrosscheckConfig {
            page: Some(PageGeometry {
                top: 700.0,
                bottom: 40.0,
                line_height: 0.0,
            }),
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }

    #[tokio::test]
    async fn test_parse_config_missing_file() {
        let err = parse_config(Path::new("/nonexistent/crosscheck.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, CrosscheckError::Config(_)));
    }

    #[tokio::test]
    async fn test_parse_config_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("crosscheck.yaml");
        std::fs::write(
            &path,
            "threshold: 0.7\npage:\n  top: 700.0\n  bottom: 40.0\n  line_height: 15.0\noutput: report.txt\n",
        )
        .unwrap();

        let config = parse_config(&path).await.unwrap();
        assert_eq!(config.threshold, Some(0.7));
        assert_eq!(config.output.as_deref(), Some("report.txt"));
        assert_eq!(config.page.unwrap().top, 700.0);
    }
}
