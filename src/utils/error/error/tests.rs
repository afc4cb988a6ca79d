//! Tests for error handling

#[cfg(test)]
mod tests {
    use super::super::types::MonitorError;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(MonitorError::config("bad"), MonitorError::Config(msg) if msg == "bad"));
        assert!(matches!(
            MonitorError::not_found("alert 1"),
            MonitorError::NotFound(msg) if msg == "alert 1"
        ));
        assert!(matches!(
            MonitorError::remediation("restart failed"),
            MonitorError::Remediation(_)
        ));
    }

    #[test]
    fn test_error_display() {
        let error = MonitorError::validation("cooldown must be positive");
        assert_eq!(
            error.to_string(),
            "Validation error: cooldown must be positive"
        );
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            MonitorError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            MonitorError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MonitorError::config("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: MonitorError = io.into();
        assert!(matches!(error, MonitorError::Io(_)));
    }

    #[test]
    fn test_from_yaml_error() {
        let parse: std::result::Result<serde_yaml::Value, _> = serde_yaml::from_str("a: [b");
        let error: MonitorError = parse.unwrap_err().into();
        assert!(error.to_string().starts_with("YAML error"));
    }
}
