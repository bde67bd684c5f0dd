//! Templates command - List available templates.

use std::path::PathBuf;

use anyhow::Result;

use super::Session;

pub fn execute(template_dir: Option<PathBuf>) -> Result<()> {
    let session = Session::open(template_dir)?;
    let loader = session.generator.loader();

    println!("Templates in {:?}:", loader.templates_path());
    for name in loader.list_available() {
        if name == ltx_templates::TemplateId::BUILTIN {
            println!("  {} (built-in)", name);
        } else {
            println!("  {}", name);
        }
    }
    Ok(())
}
