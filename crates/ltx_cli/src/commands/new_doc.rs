//! New-doc command - Create a document directory and base document.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use ltx_templates::{Ambient, DocumentRequest, TemplateId};

use super::Session;

/// Compiler used when `--compile` is given without a command.
const DEFAULT_COMPILER: &str = "pdflatex";

#[derive(Args)]
pub struct NewDocArgs {
    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = "new_document.tex")]
    output: String,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "new_document/")]
    directory: PathBuf,

    /// Document title
    #[arg(short, long, default_value = "title")]
    title: String,

    /// Document subtitle
    #[arg(short, long, default_value = "subtitle")]
    subtitle: String,

    /// Document author (defaults to the login name)
    #[arg(short, long)]
    author: Option<String>,

    /// Document date (defaults to today, MM/DD/YYYY)
    #[arg(short = 'D', long)]
    date: Option<String>,

    /// Template to use
    #[arg(short = 'T', long, default_value = TemplateId::BUILTIN)]
    template: String,

    /// Compile the document afterwards, optionally naming the compiler with args
    #[arg(short, long, value_name = "COMPILER", num_args = 0..=1)]
    compile: Option<Option<String>>,
}

impl NewDocArgs {
    fn into_request(self, session: &Session) -> DocumentRequest {
        let compiler = self.compile.map(|cmd| {
            cmd.or_else(|| session.config.compiler.clone())
                .unwrap_or_else(|| DEFAULT_COMPILER.to_string())
        });

        DocumentRequest {
            output: self.output,
            directory: self.directory,
            template: TemplateId::parse(&self.template),
            title: self.title,
            subtitle: self.subtitle,
            author: self.author.or_else(|| session.config.author.clone()),
            date: self.date,
            compiler,
        }
    }
}

pub fn execute(args: NewDocArgs, template_dir: Option<PathBuf>) -> Result<()> {
    let session = Session::open(template_dir)?;
    let request = args.into_request(&session);
    let ambient = Ambient::capture()?;

    info!("Creating document {:?} in {:?}", request.output, request.directory);

    let outcome = session
        .generator
        .document(&request, &ambient)
        .context("Failed to create document")?;

    for existing in &outcome.bootstrap.existing {
        println!("directory {:?} already exists! skipping creation", existing);
    }
    println!("✅ Document created: {:?}", outcome.path);

    if let Some(compiler) = &request.compiler {
        compile(compiler, &request.output, &outcome.directory);
    }

    Ok(())
}

/// Run the compiler on the written document. The exit status is logged only.
///
/// The compiler string goes through `sh -c`; the file name is passed as
/// `$1` so it reaches the compiler as a single argument.
fn compile(compiler: &str, output: &str, directory: &Path) -> Option<ExitStatus> {
    info!("Running `{} {}` in {:?}", compiler, output, directory);

    match Command::new("sh")
        .arg("-c")
        .arg(format!("{} \"$1\"", compiler))
        .arg("sh")
        .arg(output)
        .current_dir(directory)
        .status()
    {
        Ok(status) => {
            info!("Compiler exited with {}", status);
            Some(status)
        }
        Err(e) => {
            warn!("Could not run compiler `{}`: {}", compiler, e);
            None
        }
    }
}
