//! Batch integration tests
//!
//! Whole batches against a local HTTP server. Failed sources must show up
//! as empty slots at their own index and never hold back the callback.

#[cfg(test)]
mod tests {
    use crate::common::{ImageServer, jpeg_bytes};
    use image_preload::{
        BatchCoordinator, Config, ImageLoader, Items, Results, preload, preload_with_summary,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};
    use tokio::sync::oneshot;

    fn loader() -> ImageLoader {
        ImageLoader::from_config(&Config::default()).unwrap()
    }

    // ==================== Callback Contract ====================

    /// a.png and c.png load, bad-url 404s: results are [R1, None, R3]
    #[tokio::test]
    async fn test_mixed_batch_callback() {
        let server = ImageServer::start().await;
        server.serve_png("/a.png", 10, 20).await;
        server.serve_png("/c.png", 30, 40).await;

        let items = Items::from(vec![
            server.url("/a.png"),
            server.url("/bad-url"),
            server.url("/c.png"),
        ]);
        let results = Results::new(items.len());
        let calls = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel();

        let observed = Arc::clone(&calls);
        let dispatched = BatchCoordinator::run(items, &results, &loader(), move |images| {
            observed.fetch_add(1, Ordering::SeqCst);
            let _ = tx.send(images);
        })
        .unwrap();
        assert_eq!(dispatched, 3);

        let images = tokio::time::timeout(Duration::from_secs(10), rx)
            .await
            .expect("batch settled")
            .unwrap();

        assert_eq!(images.len(), 3);
        assert_eq!(images[0].as_ref().unwrap().dimensions(), (10, 20));
        assert!(images[1].is_none());
        assert_eq!(images[2].as_ref().unwrap().dimensions(), (30, 40));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_results_align_despite_settle_order() {
        let server = ImageServer::start().await;
        server
            .serve_png_delayed("/slow.png", 1, 1, Duration::from_millis(300))
            .await;
        server.serve_png("/fast.png", 2, 2).await;
        server
            .serve("/photo.jpg", jpeg_bytes(3, 3), "image/jpeg", Duration::ZERO)
            .await;

        let images = preload(
            vec![
                server.url("/slow.png"),
                server.url("/fast.png"),
                server.url("/photo.jpg"),
            ],
            &loader(),
        )
        .await
        .unwrap();

        let dims: Vec<_> = images
            .iter()
            .map(|slot| slot.as_ref().map(|image| image.dimensions()))
            .collect();
        assert_eq!(dims, vec![Some((1, 1)), Some((2, 2)), Some((3, 3))]);
        assert_eq!(images[2].as_ref().unwrap().format_name(), "jpg");
    }

    #[tokio::test]
    async fn test_scalar_source() {
        let server = ImageServer::start().await;
        server.serve_png("/single.png", 5, 6).await;

        let images = preload(server.url("/single.png").as_str(), &loader())
            .await
            .unwrap();

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].as_ref().unwrap().source(), server.url("/single.png"));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let images = preload(Vec::<String>::new(), &loader()).await.unwrap();
        assert!(images.is_empty());
    }

    // ==================== Failure Sentinels ====================

    #[tokio::test]
    async fn test_server_errors_and_non_images_are_empty_slots() {
        let server = ImageServer::start().await;
        server.serve_status("/error.png", 500).await;
        server
            .serve(
                "/page.png",
                b"<html>moved</html>".to_vec(),
                "text/html",
                Duration::ZERO,
            )
            .await;
        server.serve_png("/ok.png", 8, 8).await;

        let (images, summary) = preload_with_summary(
            vec![
                server.url("/error.png"),
                server.url("/page.png"),
                server.url("/ok.png"),
                "unsupported://nowhere/x.png".to_string(),
            ],
            &loader(),
        )
        .await
        .unwrap();

        assert!(images[0].is_none());
        assert!(images[1].is_none());
        assert!(images[2].is_some());
        assert!(images[3].is_none());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.failed, 3);
    }

    #[tokio::test]
    async fn test_failed_load_does_not_wait_past_slowest() {
        let server = ImageServer::start().await;
        server
            .serve_png_delayed("/slow.png", 1, 1, Duration::from_millis(200))
            .await;

        let started = Instant::now();
        let images = preload(
            vec![server.url("/missing.png"), server.url("/slow.png")],
            &loader(),
        )
        .await
        .unwrap();

        assert!(images[0].is_none());
        assert!(images[1].is_some());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    // ==================== Concurrency ====================

    #[tokio::test]
    async fn test_loads_run_concurrently() {
        let server = ImageServer::start().await;
        let delay = Duration::from_millis(400);
        let sources: Vec<String> = (0..10)
            .map(|i| format!("/img-{}.png", i))
            .collect();
        for route in &sources {
            server.serve_png_delayed(route, 4, 4, delay).await;
        }

        let started = Instant::now();
        let images = preload(
            sources.iter().map(|route| server.url(route)).collect::<Items>(),
            &loader(),
        )
        .await
        .unwrap();

        assert!(images.iter().all(Option::is_some));
        // Sequential loading would take at least 4s.
        assert!(started.elapsed() < delay * 5);
    }
}
