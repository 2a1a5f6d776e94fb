//! `eclipath resolve`: full report of one resolved project.

use std::path::Path;

use tracing::instrument;

use eclipath_core::{application::ClasspathResolver, domain::ResolvedProject};

use crate::{
    cli::{OutputFormat, ReportFormat, ResolveArgs},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(
    args: ResolveArgs,
    resolver: &ClasspathResolver,
    output: &OutputManager,
) -> CliResult<()> {
    let project = resolver.resolve(&args.project)?;

    if args.format == ReportFormat::Json || output.format() == OutputFormat::Json {
        output.json(project.as_ref())?;
        return Ok(());
    }

    report(&project, output)?;
    Ok(())
}

fn report(project: &ResolvedProject, output: &OutputManager) -> std::io::Result<()> {
    output.header(project.name())?;
    output.field("Root", &display(project.root_folder()))?;

    list(output, "Source folders", project.source_folders().iter().map(String::as_str))?;

    output.field("Output folders", "")?;
    for (name, folder) in project.output_folders() {
        output.data(&format!("  {name:<20} {}", folder.display()))?;
    }

    let archives: Vec<String> = project.archive_files().iter().map(|a| display(a)).collect();
    list(output, "Archives", archives.iter().map(String::as_str))?;
    list(
        output,
        "Dependent projects",
        project.dependent_project_names().iter().map(String::as_str),
    )?;

    if let Some(descriptor) = project.external_dependency_descriptor() {
        output.field("Ivy descriptor", &display(descriptor))?;
    }
    if !project.transitive_build_dependency_projects().is_empty() {
        list(
            output,
            "Ivy projects reached",
            project
                .transitive_build_dependency_projects()
                .iter()
                .map(String::as_str),
        )?;
    }
    if let Some(commands) = project.commands_file() {
        output.field("Commands file", &display(commands))?;
    }
    Ok(())
}

fn list<'a>(
    output: &OutputManager,
    label: &str,
    items: impl Iterator<Item = &'a str>,
) -> std::io::Result<()> {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return output.field(label, "(none)");
    }
    output.field(label, "")?;
    for item in items {
        output.data(&format!("  {item}"))?;
    }
    Ok(())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
