//! Template engine for `{{ NAME }}` placeholders.
//!
//! # Syntax
//!
//! - `{{ NAME }}` or `{{NAME}}` - substitutes the value of field `NAME`
//!
//! # Semantics
//!
//! - The set of field names is closed ([`Field`]). A token naming a known
//!   field that the context does not supply is an error.
//! - Tokens whose name is not a known field are copied through verbatim, so
//!   templates may carry unrelated `{{ ... }}` text (e.g. for a client-side
//!   framework) without tripping the renderer.
//! - The template is scanned once; substituted values are never rescanned,
//!   so a value that happens to contain `{{ MODEL }}` stays literal.
//! - Values are HTML-escaped on insertion.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("Invalid placeholder regex")
});

/// Every placeholder the article and card templates may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Model,
    Kind,
    Zero100,
    Vmax,
    PowerHp,
    Autonomy,
    Seats,
    DimLength,
    DimWidth,
    DimHeight,
    DimWheelbase,
    Img01,
    Img02,
    Img03,
    Tags,
    Date,
    SiteTitle,
    ArticleUrl,
}

impl Field {
    pub const ALL: [Field; 18] = [
        Field::Model,
        Field::Kind,
        Field::Zero100,
        Field::Vmax,
        Field::PowerHp,
        Field::Autonomy,
        Field::Seats,
        Field::DimLength,
        Field::DimWidth,
        Field::DimHeight,
        Field::DimWheelbase,
        Field::Img01,
        Field::Img02,
        Field::Img03,
        Field::Tags,
        Field::Date,
        Field::SiteTitle,
        Field::ArticleUrl,
    ];

    /// Token name as written in templates.
    pub fn token(self) -> &'static str {
        match self {
            Field::Model => "MODEL",
            Field::Kind => "KIND",
            Field::Zero100 => "ZERO100",
            Field::Vmax => "VMAX",
            Field::PowerHp => "POWER_HP",
            Field::Autonomy => "AUTONOMY",
            Field::Seats => "SEATS",
            Field::DimLength => "DIM_LENGTH",
            Field::DimWidth => "DIM_WIDTH",
            Field::DimHeight => "DIM_HEIGHT",
            Field::DimWheelbase => "DIM_WB",
            Field::Img01 => "IMG01",
            Field::Img02 => "IMG02",
            Field::Img03 => "IMG03",
            Field::Tags => "TAGS",
            Field::Date => "DATE",
            Field::SiteTitle => "SITE_TITLE",
            Field::ArticleUrl => "ARTICLE_URL",
        }
    }

    pub fn from_token(name: &str) -> Option<Field> {
        // Older templates used KIND_FR for the kind label.
        if name == "KIND_FR" {
            return Some(Field::Kind);
        }
        Field::ALL.into_iter().find(|f| f.token() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Field values for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    values: BTreeMap<Field, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl ToString) -> &mut Self {
        self.values.insert(field, value.to_string());
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
}

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A known field was referenced but not provided.
    MissingField {
        field: Field,
        /// Byte offset of the token in the template.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MissingField { field, position } => write!(
                f,
                "field '{}' at position {} has no value in the render context",
                field, position
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render `template`, substituting every known field token.
pub fn render_template(template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len() + 256);
    let mut last = 0;

    for caps in TOKEN.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(field) = Field::from_token(name.as_str()) else {
            // Not ours; leave it in place.
            continue;
        };
        let value = context.get(field).ok_or(TemplateError::MissingField {
            field,
            position: whole.start(),
        })?;

        result.push_str(&template[last..whole.start()]);
        push_escaped(&mut result, value);
        last = whole.end();
    }

    result.push_str(&template[last..]);
    Ok(result)
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
