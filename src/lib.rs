//! signal_detector library: homepage vendor fingerprinting.
//!
//! Given a domain, fetches `https://<domain>` and reports which known
//! third-party vendors (field-service-management platforms by default) are
//! embedded in the page, by matching vendor patterns against the HTML.
//!
//! # Example
//!
//! ```no_run
//! use signal_detector::{init_client, init_vendor_table, Detector};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = Detector::new(init_client()?, init_vendor_table(None).await?);
//! let result = detector.classify("example.com").await?;
//! println!("{}", serde_json::to_string(&result)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod batch;
pub mod classify;
pub mod config;
pub mod detector;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod server;
pub mod vendors;

// Re-export public API
pub use batch::{classify_domains, BatchOutcome};
pub use classify::{classify_html, ClassificationResult};
pub use config::{Config, LogFormat, LogLevel};
pub use detector::Detector;
pub use error_handling::{ClassifyError, FetchError, FetchErrorKind, VendorTableError};
pub use initialization::init_client;
pub use run::run;
pub use vendors::{init_vendor_table, VendorTable};

// Internal run module (wires configuration to server or batch mode)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::batch::classify_domains;
    use crate::config::Config;
    use crate::detector::Detector;
    use crate::initialization::init_client;
    use crate::server::start_server;
    use crate::vendors::init_vendor_table;

    /// Runs the service with the provided configuration.
    ///
    /// Serves HTTP until Ctrl-C, or, when `config.domains` is non-empty,
    /// classifies those domains once and prints one JSON line per domain to
    /// stdout in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the vendor table or
    /// HTTP client cannot be built, or the server cannot bind.
    pub async fn run(config: Config) -> Result<()> {
        config.validate().context("Invalid configuration")?;

        let vendors = init_vendor_table(config.vendors.as_deref())
            .await
            .context("Failed to initialize vendor table")?;
        let client = init_client().context("Failed to initialize HTTP client")?;
        let detector = Detector::new(client, vendors);

        if config.is_batch() {
            info!(
                "Classifying {} domains (max concurrency {})",
                config.domains.len(),
                config.max_concurrency
            );
            let outcomes = classify_domains(&detector, &config.domains, config.max_concurrency).await;
            for outcome in &outcomes {
                let line = outcome
                    .to_json()
                    .with_context(|| format!("Failed to serialize result for {}", outcome.input))?;
                println!("{}", line);
            }
            return Ok(());
        }

        let addr = config.listen_addr().context("Invalid listen address")?;
        start_server(addr, detector).await
    }
}
