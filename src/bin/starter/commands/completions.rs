//! `starter completions` command

use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};
use starter::util::shell::{Shell, Status};

/// Completion script for `shell`, as bytes.
pub fn render(shell: clap_complete::Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();

    let mut script = Vec::new();
    generate(shell, &mut cmd, bin, &mut script);
    script
}

pub fn execute(args: CompletionsArgs, shell: &Shell) -> Result<()> {
    let script = render(args.shell);

    match args.output {
        Some(path) => {
            File::create(&path)
                .and_then(|mut file| file.write_all(&script))
                .with_context(|| format!("failed to write completions to {}", path.display()))?;
            shell.status(
                Status::Created,
                format!("{} completions at {}", args.shell, path.display()),
            );
        }
        None => io::stdout().lock().write_all(&script)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mentions_subcommands() {
        let script = String::from_utf8(render(clap_complete::Shell::Bash)).unwrap();
        assert!(script.contains("starter"));
        assert!(script.contains("includes"));
    }
}
