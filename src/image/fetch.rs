//! Fetch-and-save for the three views of a run.
//!
//! Views are requested one after another. Each image is written atomically
//! as soon as it arrives; if any later request or write fails, every image
//! this call created is removed before the error is returned, so a failed
//! run never leaves a partial gallery behind. Files that were already on
//! disk before the call are left in place.

use super::ImageGenerator;
use crate::error::{AutoconceptError, Result};
use crate::fs::{atomic_write, remove_written};
use crate::prompt::{ImageView, PromptSet};
use std::path::PathBuf;
use tracing::{info, warn};

/// Where one view is stored and how the article links to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTarget {
    pub view: ImageView,
    pub path: PathBuf,
    /// Site-absolute URL, e.g. `/images/2025-03-14-orionnyra-one-01.jpg`.
    pub url: String,
}

/// Generate and store every target, in order, all or nothing.
///
/// Returns the paths that did not exist before this call.
pub fn fetch_and_save(
    generator: &dyn ImageGenerator,
    prompts: &PromptSet,
    targets: &[ImageTarget],
) -> Result<Vec<PathBuf>> {
    let mut created: Vec<PathBuf> = Vec::with_capacity(targets.len());

    for target in targets {
        let existed = target.path.exists();
        let outcome = generator
            .generate(prompts.get(target.view))
            .map_err(AutoconceptError::from)
            .and_then(|bytes| atomic_write(&target.path, &bytes).map(|()| bytes.len()));

        match outcome {
            Ok(size) => {
                info!(view = %target.view, bytes = size, "saved {}", target.path.display());
                if !existed {
                    created.push(target.path.clone());
                }
            }
            Err(err) => {
                warn!(
                    view = %target.view,
                    "image step failed, removing {} image(s) from this run",
                    created.len()
                );
                remove_written(&created);
                return Err(err);
            }
        }
    }

    Ok(created)
}
