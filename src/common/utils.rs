use std::error::Error as StdError;

use aws_sdk_guardduty::error::DisplayErrorContext;

/// Renders an SDK error together with its whole source chain.
pub fn error_message<E: StdError>(err: E) -> String {
    DisplayErrorContext(err).to_string()
}

/// Treats an empty `region` query value the same as a missing one.
pub fn region_or_default(region: Option<String>, default_region: &str) -> String {
    match region {
        Some(region) if !region.trim().is_empty() => region.trim().to_string(),
        _ => default_region.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_falls_back_when_missing_or_blank() {
        assert_eq!(region_or_default(None, "us-west-2"), "us-west-2");
        assert_eq!(region_or_default(Some("".into()), "us-west-2"), "us-west-2");
        assert_eq!(region_or_default(Some("  ".into()), "us-west-2"), "us-west-2");
    }

    #[test]
    fn region_is_kept_when_present() {
        assert_eq!(
            region_or_default(Some("eu-central-1".into()), "us-west-2"),
            "eu-central-1"
        );
    }

    #[test]
    fn error_message_includes_source() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        assert!(error_message(err).contains("connection reset"));
    }
}
