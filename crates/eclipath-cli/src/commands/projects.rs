//! `eclipath projects`: every project the registry knows.

use serde_json::json;

use eclipath_core::application::ClasspathResolver;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

pub fn execute(resolver: &ClasspathResolver, output: &OutputManager) -> CliResult<()> {
    let mut names = resolver.registry().project_names();
    names.sort();
    let uses_ivy = resolver.uses_external_dependency_manager()?;

    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "projects": names,
            "uses_external_dependency_manager": uses_ivy,
        }))?;
        return Ok(());
    }

    if names.is_empty() {
        output.warning("No projects found")?;
        return Ok(());
    }
    for name in &names {
        output.data(name)?;
    }
    if uses_ivy {
        output.info("Some projects declare Ivy dependencies; run Ivy resolution before building.")?;
    }
    Ok(())
}
