// Shared test helpers for starting the classification server.

use std::sync::Arc;
use std::time::Duration;

use signal_detector::server::router;
use signal_detector::{init_client, Detector, VendorTable};
use tokio::net::TcpListener;

/// Builds a detector over the built-in vendor table.
#[allow(dead_code)] // Used by other test files
pub fn builtin_detector() -> Detector {
    Detector::new(
        init_client().expect("Failed to build HTTP client"),
        Arc::new(VendorTable::builtin().expect("Built-in vendor table should compile")),
    )
}

/// Starts the router on an ephemeral port and returns its base URL.
#[allow(dead_code)] // Used by other test files
pub async fn start_test_server(detector: Detector) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, router(detector))
            .await
            .expect("Server failed to start");
    });

    // Give server time to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://{}", addr)
}
