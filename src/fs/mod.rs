//! Filesystem utilities for autoconcept.
//!
//! Atomic writes for every run output, plus best-effort removal used when a
//! partially completed run has to be rolled back.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;

use std::path::Path;
use tracing::warn;

/// Remove files written earlier in a failed run, logging anything that
/// cannot be removed instead of masking the original failure.
pub fn remove_written(paths: &[impl AsRef<Path>]) {
    for path in paths {
        let path = path.as_ref();
        if let Err(e) = std::fs::remove_file(path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            warn!("could not remove '{}' during cleanup: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn remove_written_deletes_existing_and_ignores_missing() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("a.jpg");
        let missing = temp_dir.path().join("b.jpg");
        std::fs::write(&present, b"x").unwrap();

        remove_written(&[&present, &missing]);

        assert!(!present.exists());
        assert!(!missing.exists());
    }
}
