//! Article and feed-card rendering.
//!
//! Both documents are filled from the same [`TemplateContext`], built once
//! per run by [`build_context`]. Templates come from the project's
//! `templates/` directory when present, otherwise from the built-in copies.

mod article;
pub mod template;

pub use article::{
    ArticleInput, DEFAULT_ARTICLE_TEMPLATE, DEFAULT_CARD_TEMPLATE, build_context, load_template,
    render,
};
pub use template::{Field, TemplateContext, TemplateError, render_template};

use crate::error::AutoconceptError;

impl From<TemplateError> for AutoconceptError {
    fn from(err: TemplateError) -> Self {
        AutoconceptError::TemplateError(err.to_string())
    }
}
