//! `eclipath classpath`: output folders then archives, joined.

use tracing::instrument;

use eclipath_core::application::ClasspathResolver;

use crate::{
    cli::{ClasspathArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

/// Path-list separator of the platform `java -cp` runs on.
const DEFAULT_SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(
    args: ClasspathArgs,
    resolver: &ClasspathResolver,
    output: &OutputManager,
) -> CliResult<()> {
    let project = resolver.resolve(&args.project)?;
    let entries: Vec<String> = project
        .classpath()
        .iter()
        .map(|path| path.display().to_string())
        .collect();

    if output.format() == OutputFormat::Json {
        output.json(&entries)?;
    } else {
        let separator = args.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
        output.data(&entries.join(separator))?;
    }
    Ok(())
}
