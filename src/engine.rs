//! Unity editor build invocation.
//!
//! The editor takes single-hyphen flags in its own camelCase convention; see
//! <https://docs.unity3d.com/Manual/PlayerCommandLineArguments.html>. The
//! option names below are declared in that convention so the flag derivation
//! is a plain first-character lowercase.

use std::path::PathBuf;

use crate::error::Result;
use crate::process::CommandRunner;
use crate::settings::{OptionSpec, SettingsRecord};

/// Name of the option holding the editor executable itself. It heads the
/// command line and is never projected as a flag.
pub const UNITY_PATH_OPTION: &str = "unityPath";

const DEFAULT_UNITY_PATH: &str = "Unity.exe";

/// Declare the Unity editor passthrough options
pub fn editor_options() -> SettingsRecord {
    SettingsRecord::new(vec![
        OptionSpec::path(
            UNITY_PATH_OPTION,
            Some(DEFAULT_UNITY_PATH),
            "Unity editor executable",
        ),
        OptionSpec::path(
            "activeBuildProfile",
            Some("Assets/Settings/Build Profiles/Windows.asset"),
            "Build profile asset to activate",
        ),
        OptionSpec::path("build", Some("dist/Game.exe"), "Player output path"),
        OptionSpec::text(
            "buildTarget",
            Some("standalonewindows64"),
            "Target platform for the build",
        ),
        OptionSpec::path("projectPath", Some("."), "Unity project directory"),
        OptionSpec::text("logFile", Some("-"), "Editor log destination"),
        OptionSpec::flag(
            "skipMissingProjectId",
            true,
            "Do not prompt when the project has no Unity services id",
        ),
        OptionSpec::flag(
            "skipMissingUpid",
            true,
            "Do not prompt when the project id file is missing",
        ),
        OptionSpec::flag("batchmode", true, "Run the editor without UI"),
        OptionSpec::flag("quit", true, "Quit the editor after the build"),
    ])
}

/// Assemble the editor command line: the executable followed by the derived
/// flags of every other option.
pub fn build_command(options: &SettingsRecord) -> Vec<String> {
    let executable = options
        .path(UNITY_PATH_OPTION)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_UNITY_PATH));

    let mut command = vec![executable.display().to_string()];
    command.extend(options.engine_flags(&[UNITY_PATH_OPTION]));
    command
}

/// Run the editor build. A non-zero exit aborts the whole pipeline.
pub async fn run_build(runner: &CommandRunner, options: &SettingsRecord) -> Result<()> {
    let command = build_command(options);
    log::info!("Building project with: {}", command.join(" "));
    runner.run(&command).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_starts_with_the_editor_executable() {
        let command = build_command(&editor_options());
        assert_eq!(command[0], DEFAULT_UNITY_PATH);
        assert!(!command.contains(&"-unityPath".to_string()));
    }

    #[test]
    fn command_carries_editor_convention_flags() {
        let command = build_command(&editor_options());
        assert!(command.contains(&"-batchmode".to_string()));
        assert!(command.contains(&"-quit".to_string()));
        assert!(command.contains(&"-skipMissingProjectId".to_string()));

        let target_pos = command
            .iter()
            .position(|t| t == "-buildTarget")
            .expect("buildTarget flag missing");
        assert_eq!(command[target_pos + 1], "standalonewindows64");
    }
}
