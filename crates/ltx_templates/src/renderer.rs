//! Placeholder substitution.

use regex::Regex;
use tracing::debug;

/// Character that introduces a placeholder token in template text.
pub const TOKEN_SIGIL: char = '$';

/// A resolved metadata record exposed as placeholder name/value pairs.
pub trait Bindings {
    /// Placeholder names (without the sigil) and their values.
    fn bindings(&self) -> Vec<(&'static str, &str)>;
}

/// Replace every known placeholder in `template` with its value.
///
/// Substitution is a single left-to-right pass over the template text, so
/// values are copied verbatim and never scanned again. Where two names share
/// a prefix the longer one wins. Unknown `$` tokens are kept as-is.
pub fn substitute<B: Bindings + ?Sized>(template: &str, metadata: &B) -> String {
    let mut bindings = metadata.bindings();
    bindings.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find(TOKEN_SIGIL) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + TOKEN_SIGIL.len_utf8()..];
        match bindings.iter().find(|(name, _)| after.starts_with(name)) {
            Some((name, value)) => {
                out.push_str(value);
                rest = &after[name.len()..];
            }
            None => {
                out.push(TOKEN_SIGIL);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Template renderer that reports placeholders it could not fill.
pub struct TemplateRenderer {
    token_pattern: Regex,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self {
            // Match $name tokens
            token_pattern: Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap(),
        }
    }

    /// Substitute `metadata` into `template`.
    pub fn render<B: Bindings + ?Sized>(&self, template: &str, metadata: &B) -> String {
        let rendered = substitute(template, metadata);
        let leftover = self.unresolved(&rendered);
        if !leftover.is_empty() {
            debug!("Leaving unknown placeholders untouched: {}", leftover.join(", "));
        }
        rendered
    }

    /// Names of `$name` tokens present in `text`, in order of appearance.
    pub fn unresolved(&self, text: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in self.token_pattern.captures_iter(text) {
            let name = caps[1].to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pairs(Vec<(&'static str, String)>);

    impl Bindings for Pairs {
        fn bindings(&self) -> Vec<(&'static str, &str)> {
            self.0.iter().map(|(k, v)| (*k, v.as_str())).collect()
        }
    }

    fn pairs(list: &[(&'static str, &str)]) -> Pairs {
        Pairs(list.iter().map(|(k, v)| (*k, v.to_string())).collect())
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let meta = pairs(&[("label", "x")]);
        let out = substitute("$label/$label/$label", &meta);
        assert_eq!(out, "x/x/x");
    }

    #[test]
    fn test_absent_token_is_noop() {
        let meta = pairs(&[("caption", "Hello")]);
        let text = "\\begin{table}\n\\end{table}\n";
        assert_eq!(substitute(text, &meta), text);
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let meta = pairs(&[("title", "Report")]);
        let out = substitute("\\title{$title} $unknown costs $5", &meta);
        assert_eq!(out, "\\title{Report} $unknown costs $5");
    }

    #[test]
    fn test_adjacent_tokens() {
        let meta = pairs(&[("dir", "./img/"), ("imgname", "plot"), ("ext", "pdf")]);
        assert_eq!(substitute("{$dir$imgname.$ext}", &meta), "{./img/plot.pdf}");
    }

    #[test]
    fn test_values_are_not_resubstituted() {
        let meta = pairs(&[("caption", "see $label"), ("label", "L")]);
        assert_eq!(substitute("$caption|$label", &meta), "see $label|L");
    }

    #[test]
    fn test_longest_name_wins() {
        let meta = pairs(&[("toc", "short"), ("toc_caption", "long")]);
        assert_eq!(substitute("$toc_caption $toc", &meta), "long short");
    }

    #[test]
    fn test_second_pass_is_noop() {
        let meta = pairs(&[("author", "alice"), ("title", "T"), ("subtitle", "S")]);
        let once = substitute("$author $title $subtitle $other", &meta);
        let twice = substitute(&once, &meta);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unresolved_names() {
        let renderer = TemplateRenderer::new();
        let meta = pairs(&[("title", "T")]);
        let out = renderer.render("$title $foo $bar $foo", &meta);
        assert_eq!(out, "T $foo $bar $foo");
        assert_eq!(renderer.unresolved(&out), vec!["foo", "bar"]);
    }
}
