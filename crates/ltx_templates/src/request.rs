//! Request records built by the command layer and consumed by the generator.
//!
//! Every field mirrors a command-line option. Optional fields are resolved
//! into concrete values by [`crate::metadata`]; nothing here touches the
//! filesystem or the environment.

use std::fmt;
use std::path::PathBuf;

/// Template selector: the built-in text or a named file in the template root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateId {
    #[default]
    Builtin,
    Named(String),
}

impl TemplateId {
    /// Identifier that selects the built-in template.
    pub const BUILTIN: &'static str = "default";

    pub fn parse(identifier: &str) -> Self {
        if identifier == Self::BUILTIN {
            TemplateId::Builtin
        } else {
            TemplateId::Named(identifier.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TemplateId::Builtin => Self::BUILTIN,
            TemplateId::Named(name) => name,
        }
    }
}

impl From<&str> for TemplateId {
    fn from(identifier: &str) -> Self {
        TemplateId::parse(identifier)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of float fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Figure,
    Table,
}

impl FragmentKind {
    /// Conventional project subdirectory used as base path when present.
    pub fn conventional_dir(self) -> &'static str {
        match self {
            FragmentKind::Figure => "img/",
            FragmentKind::Table => "table/",
        }
    }

    /// Label prefix used in `\label` and `\ref` directives.
    pub fn ref_prefix(self) -> &'static str {
        match self {
            FragmentKind::Figure => "fig",
            FragmentKind::Table => "tab",
        }
    }

    pub fn default_output(self) -> &'static str {
        match self {
            FragmentKind::Figure => "new_img.tex",
            FragmentKind::Table => "new_table.tex",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentKind::Figure => write!(f, "figure"),
            FragmentKind::Table => write!(f, "table"),
        }
    }
}

/// Request for a new document directory and base document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    /// Output file name, written inside `directory`.
    pub output: String,
    /// Document directory, relative to the working directory.
    pub directory: PathBuf,
    pub template: TemplateId,
    pub title: String,
    pub subtitle: String,
    /// Defaults to the login name.
    pub author: Option<String>,
    /// Defaults to today's local date.
    pub date: Option<String>,
    /// Compiler command run on the written document, if any.
    pub compiler: Option<String>,
}

impl Default for DocumentRequest {
    fn default() -> Self {
        Self {
            output: "new_document.tex".to_string(),
            directory: PathBuf::from("new_document"),
            template: TemplateId::Builtin,
            title: "title".to_string(),
            subtitle: "subtitle".to_string(),
            author: None,
            date: None,
            compiler: None,
        }
    }
}

impl DocumentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_template(mut self, template: impl Into<TemplateId>) -> Self {
        self.template = template.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Request for a figure or table fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRequest {
    pub kind: FragmentKind,
    pub output: String,
    /// Subdirectory below the effective base path; may be empty.
    pub directory: String,
    pub template: TemplateId,
    pub caption: Option<String>,
    pub toc_caption: Option<String>,
    pub label: Option<String>,
    /// Image file extension, only used by figures.
    pub ext: String,
    /// Append the fragment to the aggregate list files.
    pub update: bool,
}

impl FragmentRequest {
    pub fn new(kind: FragmentKind) -> Self {
        Self {
            kind,
            output: kind.default_output().to_string(),
            directory: String::new(),
            template: TemplateId::Builtin,
            caption: None,
            toc_caption: None,
            label: None,
            ext: "png".to_string(),
            update: false,
        }
    }

    pub fn figure() -> Self {
        Self::new(FragmentKind::Figure)
    }

    pub fn table() -> Self {
        Self::new(FragmentKind::Table)
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    /// Output file name up to its first `.`.
    pub fn stem(&self) -> &str {
        self.output.split('.').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_id_parse() {
        assert_eq!(TemplateId::parse("default"), TemplateId::Builtin);
        assert_eq!(
            TemplateId::parse("report"),
            TemplateId::Named("report".to_string())
        );
        assert_eq!(TemplateId::parse("report").as_str(), "report");
    }

    #[test]
    fn test_stem_stops_at_first_dot() {
        let request = FragmentRequest::figure().with_output("diagram.tex");
        assert_eq!(request.stem(), "diagram");

        let request = FragmentRequest::figure().with_output("plot.v2.tex");
        assert_eq!(request.stem(), "plot");

        let request = FragmentRequest::table().with_output("noext");
        assert_eq!(request.stem(), "noext");
    }

    #[test]
    fn test_fragment_defaults() {
        let figure = FragmentRequest::figure();
        assert_eq!(figure.output, "new_img.tex");
        assert_eq!(figure.ext, "png");
        assert!(!figure.update);

        let table = FragmentRequest::table();
        assert_eq!(table.output, "new_table.tex");
        assert_eq!(table.kind.ref_prefix(), "tab");
    }
}
