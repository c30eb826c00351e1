//! Concurrent batch classification.
//!
//! Classifies a list of domains with at most `max_concurrency` fetches in
//! flight. Outcomes come back in input order regardless of which fetch
//! finishes first.

use futures::stream::{self, StreamExt};

use crate::classify::ClassificationResult;
use crate::detector::Detector;
use crate::error_handling::ClassifyError;
use crate::server::ErrorBody;

/// Outcome for one input domain.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The domain exactly as given
    pub input: String,
    pub result: Result<ClassificationResult, ClassifyError>,
}

impl BatchOutcome {
    /// The JSON body `POST /classify` would have returned for this domain.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match &self.result {
            Ok(result) => serde_json::to_string(result),
            Err(err) => serde_json::to_string(&ErrorBody::from(err)),
        }
    }
}

/// Classifies `domains` concurrently.
///
/// A `max_concurrency` of zero is treated as one.
pub async fn classify_domains(
    detector: &Detector,
    domains: &[String],
    max_concurrency: usize,
) -> Vec<BatchOutcome> {
    stream::iter(domains)
        .map(|input| async move {
            BatchOutcome {
                input: input.clone(),
                result: detector.classify(input).await,
            }
        })
        .buffered(max_concurrency.max(1))
        .collect()
        .await
}
