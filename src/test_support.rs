use crate::image::{ImageFailure, ImageGenerator};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Bytes returned by [`StubGenerator`] for every successful call.
pub(crate) const STUB_IMAGE: &[u8] = b"\xFF\xD8\xFF\xE0stub-jpeg";

/// Image service stand-in: returns [`STUB_IMAGE`] until `fail_on` (0-based
/// call index) is reached, and records every prompt it receives.
pub(crate) struct StubGenerator {
    fail_on: Option<usize>,
    pub(crate) prompts: RefCell<Vec<String>>,
}

impl StubGenerator {
    pub(crate) fn constant() -> Self {
        Self {
            fail_on: None,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing_on(call: usize) -> Self {
        Self {
            fail_on: Some(call),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl ImageGenerator for StubGenerator {
    fn generate(&self, prompt: &str) -> Result<Vec<u8>, ImageFailure> {
        let call = self.prompts.borrow().len();
        self.prompts.borrow_mut().push(prompt.to_string());
        if self.fail_on == Some(call) {
            return Err(ImageFailure::Transport("connection reset".to_string()));
        }
        Ok(STUB_IMAGE.to_vec())
    }
}

/// A project directory with an `index.html` holding an empty feed section.
pub(crate) fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("index.html"),
        "<html><body>\n<!-- FEED:start -->\n<!-- FEED:end -->\n</body></html>\n",
    )
    .unwrap();
    temp_dir
}
