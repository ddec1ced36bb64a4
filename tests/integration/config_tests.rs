//! Configuration integration tests
//!
//! Settings from `Config` must reach the HTTP requests the loader makes.

#[cfg(test)]
mod tests {
    use crate::common::{ImageServer, png_bytes};
    use image_preload::{Config, ImageLoader, preload};
    use std::io::Write;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_relative_sources_use_base_url() {
        let server = ImageServer::start().await;
        server.serve_png("/assets/icons/a.png", 3, 3).await;

        let mut config = Config::default();
        config.loader.base_url = Some(format!("{}/assets/", server.uri()));
        let loader = ImageLoader::from_config(&config).unwrap();

        let images = preload("icons/a.png", &loader).await.unwrap();
        assert_eq!(images[0].as_ref().unwrap().dimensions(), (3, 3));
    }

    #[tokio::test]
    async fn test_user_agent_and_headers_sent() {
        let server = ImageServer::start().await;
        Mock::given(method("GET"))
            .and(path("/guarded.png"))
            .and(header("user-agent", "preload-tests/1.0"))
            .and(header("x-api-key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(2, 2)))
            .expect(1)
            .mount(server.inner())
            .await;

        let mut config = Config::default();
        config.client.user_agent = "preload-tests/1.0".to_string();
        config
            .client
            .default_headers
            .insert("x-api-key".to_string(), "secret".to_string());
        let loader = ImageLoader::from_config(&config).unwrap();

        let images = preload(server.url("/guarded.png").as_str(), &loader)
            .await
            .unwrap();
        assert!(images[0].is_some());
    }

    #[tokio::test]
    async fn test_client_timeout_yields_empty_slot() {
        let server = ImageServer::start().await;
        server
            .serve_png_delayed("/stalled.png", 1, 1, Duration::from_secs(5))
            .await;
        server.serve_png("/quick.png", 1, 1).await;

        let mut config = Config::default();
        config.client.timeout_secs = Some(1);
        let loader = ImageLoader::from_config(&config).unwrap();

        let images = preload(
            vec![server.url("/stalled.png"), server.url("/quick.png")],
            &loader,
        )
        .await
        .unwrap();

        assert!(images[0].is_none());
        assert!(images[1].is_some());
    }

    #[tokio::test]
    async fn test_loader_from_yaml_file() {
        let server = ImageServer::start().await;
        server.serve_png("/cdn/logo.png", 16, 16).await;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "client:\n  timeout_secs: 10\nloader:\n  base_url: \"{}/cdn/\"",
            server.uri()
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let loader = ImageLoader::from_config(&config).unwrap();
        let images = preload("logo.png", &loader).await.unwrap();

        assert_eq!(images[0].as_ref().unwrap().width(), 16);
    }

    #[test]
    fn test_loader_rejects_invalid_base_url() {
        let mut config = Config::default();
        config.loader.base_url = Some("not a url".to_string());
        assert!(ImageLoader::from_config(&config).is_err());
    }
}
