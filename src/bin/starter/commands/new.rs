//! `starter` / `starter new` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::NewArgs;
use starter::ops::starter_new::{initialize, resolve_request, NewOptions, RequestInputs};
use starter::util::shell::{Shell, Status};
use starter::util::{GlobalContext, Prompter};

/// Collects what was given on the command line; the rest is prompted for.
pub fn request_inputs(args: &NewArgs) -> RequestInputs {
    RequestInputs {
        name: args.name.clone(),
        contracts: args.contracts,
        frontend: args.frontend,
        use_defaults: args.yes,
    }
}

/// Whether any question will be asked.
pub fn needs_prompt(inputs: &RequestInputs) -> bool {
    !inputs.use_defaults
        && (inputs.name.is_none() || inputs.contracts.is_none() || inputs.frontend.is_none())
}

/// The line telling the user how to start working in the new project.
pub fn next_steps(name: &str) -> String {
    format!("cd {} && code .", name)
}

pub fn execute(args: NewArgs, templates: Option<PathBuf>, shell: &Shell) -> Result<()> {
    let ctx = GlobalContext::from_env(templates)?;
    let inputs = request_inputs(&args);

    if needs_prompt(&inputs) {
        shell.print("\nWelcome to Starter Kit!\n");
    }

    let mut prompter = Prompter::stdio();
    let request = resolve_request(inputs, &ctx.config().defaults, &mut prompter)?;

    let opts = NewOptions {
        staged: args.staged || ctx.config().new.staged.unwrap_or(false),
    };

    let layout = match initialize(&ctx, &request, &opts) {
        Ok(layout) => layout,
        Err(e) => {
            if !e.is_side_effect_free() && !opts.staged {
                shell.warn(format!(
                    "`{}` was left partially created",
                    request.target_path(ctx.working_directory()).display()
                ));
            }
            return Err(e.into());
        }
    };

    let files = layout.contracts.1.files + layout.frontend.1.files;
    shell.status(
        Status::Created,
        format!(
            "project `{}` from {} contracts and {} frontend templates ({} files)",
            request.name, request.contract_framework, request.frontend_framework, files
        ),
    );
    shell.status(Status::Finished, "project setup complete");
    shell.print(format!("\n  {}\n", next_steps(&request.name)));

    Ok(())
}
