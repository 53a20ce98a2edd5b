//! Project layout resolution for autoconcept.
//!
//! All paths are derived from one project root (the `--root` argument or
//! the current working directory):
//!
//! ```text
//! <root>/
//!   autoconcept.yaml                 optional config
//!   index.html                       feed document, mutated in place
//!   images/<date>-<slug>-01..03.<ext>
//!   articles/<date>-<slug>.html
//!   templates/article_template.html  optional override, never written
//!   templates/card_template.html     optional override, never written
//! ```

use crate::error::{AutoconceptError, Result};
use crate::image::ImageTarget;
use crate::prompt::ImageView;
use chrono::NaiveDate;
use std::env;
use std::path::{Path, PathBuf};

/// Config file name at the project root.
pub const CONFIG_FILE: &str = "autoconcept.yaml";

/// Resolved paths for one project. All paths are absolute.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub images_dir: PathBuf,
    pub articles_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub index_path: PathBuf,
}

/// File names and links for everything one run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArtifacts {
    /// `<date>-<slug>`, shared by every file of the run.
    pub stem: String,
    pub images: Vec<ImageTarget>,
    pub article_path: PathBuf,
    pub article_url: String,
}

impl ProjectContext {
    /// Resolve the project from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            AutoconceptError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        Self::resolve_from(cwd)
    }

    /// Resolve the project rooted at `root`, which must be an existing directory.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let root = root.canonicalize().map_err(|e| {
            AutoconceptError::UserError(format!(
                "project root '{}' is not accessible: {}",
                root.display(),
                e
            ))
        })?;
        if !root.is_dir() {
            return Err(AutoconceptError::UserError(format!(
                "project root '{}' is not a directory",
                root.display()
            )));
        }

        Ok(Self {
            images_dir: root.join("images"),
            articles_dir: root.join("articles"),
            templates_dir: root.join("templates"),
            index_path: root.join("index.html"),
            root,
        })
    }

    /// Resolve from an explicit root when given, else from the current directory.
    pub fn resolve_optional(root: Option<&Path>) -> Result<Self> {
        match root {
            Some(root) => Self::resolve_from(root),
            None => Self::resolve(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn article_template_path(&self) -> PathBuf {
        self.templates_dir.join("article_template.html")
    }

    pub fn card_template_path(&self) -> PathBuf {
        self.templates_dir.join("card_template.html")
    }

    /// Create the output directories if they are missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.images_dir, &self.articles_dir, &self.templates_dir] {
            std::fs::create_dir_all(dir).map_err(|e| {
                AutoconceptError::UserError(format!(
                    "failed to create directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Paths and URLs for a run on `date` of the car slugged `slug`.
    pub fn artifacts(&self, date: NaiveDate, slug: &str, image_extension: &str) -> RunArtifacts {
        let stem = format!("{}-{}", date.format("%Y-%m-%d"), slug);

        let images = ImageView::ALL
            .iter()
            .map(|&view| {
                let file = format!("{}-{:02}.{}", stem, view.number(), image_extension);
                ImageTarget {
                    view,
                    path: self.images_dir.join(&file),
                    url: format!("/images/{}", file),
                }
            })
            .collect();

        let article_file = format!("{}.html", stem);
        RunArtifacts {
            images,
            article_path: self.articles_dir.join(&article_file),
            article_url: format!("/articles/{}", article_file),
            stem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_resolve_from_root() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();

        let expected_root = temp_dir.path().canonicalize().unwrap();
        assert_eq!(ctx.root, expected_root);
        assert!(ctx.images_dir.ends_with("images"));
        assert!(ctx.articles_dir.ends_with("articles"));
        assert!(ctx.index_path.ends_with("index.html"));
        assert!(ctx.config_path().ends_with(CONFIG_FILE));
        assert!(
            ctx.article_template_path()
                .ends_with("templates/article_template.html")
        );
    }

    #[test]
    fn test_resolve_missing_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = ProjectContext::resolve_from(temp_dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, AutoconceptError::UserError(_)));
    }

    #[test]
    fn test_resolve_file_as_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("index.html");
        std::fs::write(&file, "x").unwrap();

        let err = ProjectContext::resolve_from(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    #[serial]
    fn test_resolve_uses_current_directory() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let ctx = ProjectContext::resolve_optional(None).unwrap();
        assert_eq!(ctx.root, temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();

        ctx.ensure_dirs().unwrap();
        ctx.ensure_dirs().unwrap();

        assert!(ctx.images_dir.is_dir());
        assert!(ctx.articles_dir.is_dir());
        assert!(ctx.templates_dir.is_dir());
    }

    #[test]
    fn test_artifact_names_share_stem() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ProjectContext::resolve_from(temp_dir.path()).unwrap();

        let artifacts = ctx.artifacts(date(), "orionnyra-one", "jpg");

        assert_eq!(artifacts.stem, "2025-03-14-orionnyra-one");
        assert_eq!(
            artifacts.article_path,
            ctx.articles_dir.join("2025-03-14-orionnyra-one.html")
        );
        assert_eq!(artifacts.article_url, "/articles/2025-03-14-orionnyra-one.html");

        let names: Vec<String> = artifacts
            .images
            .iter()
            .map(|t| t.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "2025-03-14-orionnyra-one-01.jpg",
                "2025-03-14-orionnyra-one-02.jpg",
                "2025-03-14-orionnyra-one-03.jpg",
            ]
        );
        assert_eq!(
            artifacts.images[2].url,
            "/images/2025-03-14-orionnyra-one-03.jpg"
        );
        assert_eq!(artifacts.images[1].view, ImageView::Rear);
    }
}
