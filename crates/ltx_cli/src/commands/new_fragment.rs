//! New-img and new-table commands - Create figure and table fragments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use ltx_templates::{Ambient, FragmentKind, FragmentRequest, TemplateId};

use super::Session;

/// Options shared by figure and table fragments.
#[derive(Args)]
pub struct FragmentArgs {
    /// Output file (defaults to new_img.tex / new_table.tex)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Output directory, below img/ or table/ when present
    #[arg(short, long, value_name = "DIR")]
    directory: Option<String>,

    /// Caption (defaults to the output file name without extension)
    #[arg(short, long)]
    caption: Option<String>,

    /// Table of contents caption (defaults to the caption)
    #[arg(short, long = "toc", value_name = "TOC_CAPTION")]
    toc: Option<String>,

    /// Reference label (defaults to the output file name without extension)
    #[arg(short, long)]
    label: Option<String>,

    /// Template to use
    #[arg(short = 'T', long, default_value = TemplateId::BUILTIN)]
    template: String,

    /// Update listoffloats.tex and listofrefs.tex
    #[arg(short, long)]
    update: bool,
}

impl FragmentArgs {
    fn into_request(self, kind: FragmentKind) -> FragmentRequest {
        let defaults = FragmentRequest::new(kind);
        FragmentRequest {
            output: self.output.unwrap_or(defaults.output),
            directory: self.directory.unwrap_or_default(),
            template: TemplateId::parse(&self.template),
            caption: self.caption,
            toc_caption: self.toc,
            label: self.label,
            update: self.update,
            ..defaults
        }
    }
}

#[derive(Args)]
pub struct NewImgArgs {
    #[command(flatten)]
    common: FragmentArgs,

    /// Image file extension
    #[arg(short, long, default_value = "png")]
    ext: String,
}

#[derive(Args)]
pub struct NewTableArgs {
    #[command(flatten)]
    common: FragmentArgs,
}

impl NewImgArgs {
    fn into_request(self) -> FragmentRequest {
        FragmentRequest {
            ext: self.ext,
            ..self.common.into_request(FragmentKind::Figure)
        }
    }
}

pub fn execute_figure(args: NewImgArgs, template_dir: Option<PathBuf>) -> Result<()> {
    run(args.into_request(), template_dir)
}

pub fn execute_table(args: NewTableArgs, template_dir: Option<PathBuf>) -> Result<()> {
    run(args.common.into_request(FragmentKind::Table), template_dir)
}

fn run(request: FragmentRequest, template_dir: Option<PathBuf>) -> Result<()> {
    let session = Session::open(template_dir)?;
    let ambient = Ambient::capture()?;

    info!("Creating {} {:?}", request.kind, request.output);

    let outcome = session
        .generator
        .fragment(&request, &ambient)
        .with_context(|| format!("Failed to create {}", request.kind))?;

    println!("✅ {} created: {:?}", capitalize(&request.kind.to_string()), outcome.path);
    if outcome.lists_updated {
        println!(
            "   Recorded \\input{{{}}} and \\ref{{{}:{}}}",
            outcome.reference,
            request.kind.ref_prefix(),
            outcome.label
        );
    }

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct ImgCli {
        #[command(flatten)]
        args: NewImgArgs,
    }

    #[derive(Parser)]
    struct TableCli {
        #[command(flatten)]
        args: NewTableArgs,
    }

    fn figure(argv: &[&str]) -> FragmentRequest {
        ImgCli::parse_from(std::iter::once("ltx").chain(argv.iter().copied()))
            .args
            .into_request()
    }

    fn table(argv: &[&str]) -> FragmentRequest {
        TableCli::parse_from(std::iter::once("ltx").chain(argv.iter().copied()))
            .args
            .common
            .into_request(FragmentKind::Table)
    }

    #[test]
    fn test_figure_defaults() {
        let request = figure(&[]);
        assert_eq!(request.kind, FragmentKind::Figure);
        assert_eq!(request.output, "new_img.tex");
        assert_eq!(request.ext, "png");
        assert_eq!(request.directory, "");
        assert_eq!(request.caption, None);
        assert!(!request.update);
    }

    #[test]
    fn test_figure_options() {
        let request = figure(&[
            "-o", "diagram.tex", "-d", "arch", "-c", "Architecture", "-t", "Arch", "-l",
            "arch", "-e", "pdf", "-u",
        ]);
        assert_eq!(request.output, "diagram.tex");
        assert_eq!(request.directory, "arch");
        assert_eq!(request.caption.as_deref(), Some("Architecture"));
        assert_eq!(request.toc_caption.as_deref(), Some("Arch"));
        assert_eq!(request.label.as_deref(), Some("arch"));
        assert_eq!(request.ext, "pdf");
        assert!(request.update);
    }

    #[test]
    fn test_table_defaults() {
        let request = table(&["-u", "-T", "booktabs"]);
        assert_eq!(request.kind, FragmentKind::Table);
        assert_eq!(request.output, "new_table.tex");
        assert_eq!(request.template, TemplateId::Named("booktabs".to_string()));
        assert!(request.update);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("figure"), "Figure");
        assert_eq!(capitalize(""), "");
    }
}
