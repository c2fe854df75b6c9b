//! `starter templates` command

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};

use starter::util::shell::{Shell, Status};
use starter::util::GlobalContext;

pub fn execute(templates: Option<PathBuf>, shell: &Shell) -> Result<()> {
    let ctx = GlobalContext::from_env(templates)?;
    let root = ctx.templates();

    if !root.path().is_dir() {
        bail!(
            "template root `{}` does not exist\n\
             \n\
             Pass `--templates <DIR>` or set STARTER_TEMPLATES.",
            root.path().display()
        );
    }

    shell.note(format!("templates in {}", root.path().display()));

    let mut stdout = io::stdout().lock();
    for entry in root.entries() {
        if entry.present {
            writeln!(stdout, "{}/{}", entry.kind, entry.name)?;
        } else {
            shell.status(Status::Missing, format!("{}/{}", entry.kind, entry.name));
        }
    }

    Ok(())
}
