//! `eclipath deps`: transitive project references.

use tracing::instrument;

use eclipath_core::application::ClasspathResolver;

use crate::{
    cli::{DepsArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(args: DepsArgs, resolver: &ClasspathResolver, output: &OutputManager) -> CliResult<()> {
    let projects = resolver.dependent_projects_of(&args.project)?;

    if output.format() == OutputFormat::Json {
        output.json(&projects)?;
        return Ok(());
    }
    for name in &projects {
        output.data(name)?;
    }
    Ok(())
}
