//! Image generation: the service seam, the HTTP client, and the
//! all-or-nothing fetch of a run's three views.

mod fetch;
mod openai;

pub use fetch::{ImageTarget, fetch_and_save};
pub use openai::OpenAiImageClient;

use crate::error::AutoconceptError;
use thiserror::Error;

/// Why a single generation call produced no image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageFailure {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Payload(String),

    /// The image field was not valid base64.
    #[error("image payload is not valid base64: {0}")]
    Decode(String),
}

impl From<ImageFailure> for AutoconceptError {
    fn from(failure: ImageFailure) -> Self {
        AutoconceptError::ImageServiceError(failure.to_string())
    }
}

/// Something that turns a text prompt into encoded image bytes.
///
/// The pipeline only sees this trait; the real implementation is
/// [`OpenAiImageClient`], tests substitute canned generators.
pub trait ImageGenerator {
    /// Generate one image. Failures are returned, never retried.
    fn generate(&self, prompt: &str) -> Result<Vec<u8>, ImageFailure>;
}
