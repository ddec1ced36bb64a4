//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::types::*;

    #[test]
    fn test_preload_error_display() {
        let err = PreloadError::config("missing user agent");
        assert_eq!(err.to_string(), "Configuration error: missing user agent");

        let err = PreloadError::slot(3, "already written");
        assert_eq!(err.to_string(), "Result slot 3: already written");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PreloadError = io.into();
        assert!(matches!(err, PreloadError::Io(_)));
    }

    #[test]
    fn test_item_error_kinds() {
        assert_eq!(ItemLoadError::status("http://x/a.png", 404).kind(), "status");
        assert_eq!(ItemLoadError::data_uri("no comma").kind(), "data_uri");
        assert_eq!(
            ItemLoadError::UnsupportedScheme("ftp".to_string()).kind(),
            "unsupported_scheme"
        );
        assert_eq!(
            ItemLoadError::invalid_location("::", "empty").kind(),
            "invalid_location"
        );
    }

    #[test]
    fn test_item_error_display() {
        let err = ItemLoadError::status("http://host/a.png", 500);
        assert_eq!(err.to_string(), "HTTP status 500 for http://host/a.png");
    }
}
