//! Image fixtures and mock server

use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).expect("encode fixture image");
    buf.into_inner()
}

/// Blank PNG of the given size
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgba8(RgbaImage::new(width, height)),
        ImageFormat::Png,
    )
}

/// Blank JPEG of the given size
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(
        DynamicImage::ImageRgb8(RgbImage::new(width, height)),
        ImageFormat::Jpeg,
    )
}

/// Local HTTP server serving image fixtures
pub struct ImageServer {
    server: MockServer,
}

impl ImageServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Absolute URL for a path on this server
    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.server.uri(), route)
    }

    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Serve `body` at `route` after `delay`
    pub async fn serve(&self, route: &str, body: Vec<u8>, content_type: &str, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", content_type)
                    .set_body_bytes(body)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn serve_png(&self, route: &str, width: u32, height: u32) {
        self.serve(route, png_bytes(width, height), "image/png", Duration::ZERO)
            .await;
    }

    pub async fn serve_png_delayed(&self, route: &str, width: u32, height: u32, delay: Duration) {
        self.serve(route, png_bytes(width, height), "image/png", delay)
            .await;
    }

    /// Respond to `route` with a bare status code
    pub async fn serve_status(&self, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}
