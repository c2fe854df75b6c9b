//! `starter includes` command

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::IncludesArgs;
use starter::ops::codegen::{codegen_config, CodegenOptions, Plugin};
use starter::util::shell::{Shell, Status};

pub fn codegen_options(args: &IncludesArgs) -> CodegenOptions {
    CodegenOptions {
        project: args.project.clone(),
        src: args.src.clone(),
        artifacts: args.artifacts.clone(),
        out: args.out.clone(),
    }
}

pub fn execute(args: IncludesArgs, shell: &Shell) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let opts = codegen_options(&args);

    let src_dir = cwd.join(opts.src_dir());
    if !src_dir.is_dir() {
        shell.warn(format!("no contract sources at {}", src_dir.display()));
    }
    shell.status(Status::Scanning, src_dir.display());

    let config = codegen_config(&cwd, &opts);
    let include = config
        .plugins
        .iter()
        .find_map(|plugin| match plugin {
            Plugin::Foundry { include, .. } => Some(include.clone()),
            Plugin::React => None,
        })
        .unwrap_or_default();

    let mut stdout = io::stdout().lock();
    if args.config {
        let json = serde_json::to_string_pretty(&config)
            .context("failed to serialize code generator config")?;
        writeln!(stdout, "{}", json)?;
    } else {
        for path in &include {
            writeln!(stdout, "{}", path)?;
        }
    }

    shell.status(
        Status::Finished,
        format!("{} compiled contracts included", include.len()),
    );

    Ok(())
}
