//! Built-in templates shipped with each tool.

use crate::request::FragmentKind;

/// Which tool a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Document,
    Figure,
    Table,
}

impl From<FragmentKind> for TemplateKind {
    fn from(kind: FragmentKind) -> Self {
        match kind {
            FragmentKind::Figure => TemplateKind::Figure,
            FragmentKind::Table => TemplateKind::Table,
        }
    }
}

impl TemplateKind {
    /// The built-in template text.
    pub fn builtin(self) -> &'static str {
        match self {
            TemplateKind::Document => DOCUMENT,
            TemplateKind::Figure => FIGURE,
            TemplateKind::Table => TABLE,
        }
    }

    /// Placeholder names understood by this tool.
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            TemplateKind::Document => &["TIMESTAMP", "author", "title", "subtitle", "date"],
            TemplateKind::Figure => &[
                "TIMESTAMP",
                "imgname",
                "dir",
                "caption",
                "toc_caption",
                "ext",
                "label",
            ],
            TemplateKind::Table => &["TIMESTAMP", "caption", "toc_caption", "label"],
        }
    }
}

const DOCUMENT: &str = r"% $TIMESTAMP

\documentclass{article}

\begin{document}
\author{$author}
\title{$title}
\subtitle{$subtitle}
\date{$date}
\end{document}
";

const FIGURE: &str = r"% $TIMESTAMP
\begin{figure}[!htbp]
    \centering
    \includegraphics[width=\textwidth]{$dir$imgname.$ext}
    \caption[$toc_caption]{$caption}
    \label{fig:$label}
\end{figure}
";

const TABLE: &str = r"% $TIMESTAMP
\begin{table}[!htbp]
    \centering
    \begin{tabular}{|c|c|}
        \hline
        Header 1 & Header 2 \\
        \hline
    \end{tabular}
    \caption[$toc_caption]{$caption}
    \label{tab:$label}
\end{table}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_only_use_their_vocabulary() {
        for kind in [TemplateKind::Document, TemplateKind::Figure, TemplateKind::Table] {
            let renderer = crate::renderer::TemplateRenderer::new();
            for name in renderer.unresolved(kind.builtin()) {
                assert!(
                    kind.vocabulary().contains(&name.as_str()),
                    "{:?} uses unknown placeholder {}",
                    kind,
                    name
                );
            }
        }
    }

    #[test]
    fn test_fragment_labels_use_kind_prefix() {
        assert!(TemplateKind::Figure.builtin().contains("\\label{fig:$label}"));
        assert!(TemplateKind::Table.builtin().contains("\\label{tab:$label}"));
    }
}
