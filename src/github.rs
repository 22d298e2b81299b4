//! GitHub release publishing through the `gh` CLI.
//!
//! The passthrough options mirror the flags of `gh release create`; see
//! <https://cli.github.com/manual/gh_release_create>. They exist only to be
//! projected into the release command line, not for this tool's own logic.

use std::path::Path;

use crate::error::{ReleaseError, Result, ToolError};
use crate::process::CommandRunner;
use crate::settings::{OptionSpec, SettingsRecord};
use crate::version::SemVer;

/// Declare the `gh release create` passthrough options
pub fn release_create_options() -> SettingsRecord {
    SettingsRecord::new(vec![
        OptionSpec::text(
            "discussion_category",
            None,
            "Start a discussion in the given category",
        ),
        OptionSpec::flag("draft", true, "Save the release as a draft"),
        OptionSpec::flag(
            "fail_on_no_commits",
            true,
            "Fail if there are no commits since the last release",
        ),
        OptionSpec::flag(
            "generate_notes",
            true,
            "Automatically generate title and notes",
        ),
        OptionSpec::flag("latest", true, "Mark this release as latest"),
        OptionSpec::text("notes", None, "Release notes"),
        OptionSpec::path("notes_file", None, "Read release notes from a file"),
        OptionSpec::flag(
            "notes_from_tag",
            false,
            "Use the annotated tag message as notes",
        ),
        OptionSpec::text(
            "notes_start_tag",
            None,
            "Tag to use as the starting point for generated notes",
        ),
        OptionSpec::flag("prerelease", false, "Mark the release as a prerelease"),
        OptionSpec::text("target", Some("main"), "Target branch or commit SHA"),
        OptionSpec::text("title", None, "Release title"),
        OptionSpec::flag(
            "verify_tag",
            true,
            "Abort if the tag does not already exist remotely",
        ),
    ])
}

/// Verify the `gh` CLI is installed and authenticated.
///
/// Any failure here is fatal for the pipeline and reported as a dedicated
/// tool-unavailable error with remediation guidance.
pub async fn check_auth(runner: &CommandRunner) -> Result<()> {
    let command: Vec<String> = ["gh", "auth", "status"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    match runner.run(&command).await {
        Ok(_) => {
            log::debug!("gh CLI is installed and authenticated");
            Ok(())
        }
        Err(ReleaseError::Command(source)) => Err(ToolError::GhUnavailable {
            reason: source.to_string(),
        }
        .into()),
        Err(other) => Err(other),
    }
}

/// Publish a release for `tag`, uploading the zip as its artifact and
/// forwarding every generated passthrough flag.
pub async fn create_release(
    runner: &CommandRunner,
    tag: SemVer,
    zip_file: &Path,
    options: &SettingsRecord,
) -> Result<()> {
    log::info!("Uploading release {tag}");

    let mut command = vec![
        "gh".to_string(),
        "release".to_string(),
        "create".to_string(),
        tag.to_string(),
        zip_file.display().to_string(),
    ];
    command.extend(options.long_flags());

    let output = runner.run(&command).await?;
    log::info!("Release created successfully: {}", output.stdout_text().trim());
    Ok(())
}
