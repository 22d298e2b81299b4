//! Command line interface.
//!
//! The parser is assembled from the three option records — release control,
//! GitHub passthrough and Unity passthrough — all registered on a single
//! `clap` command, so their flag names must not collide. Arguments are
//! parsed once at startup and resolved into immutable settings records.

mod output;

pub use output::OutputManager;

use clap::Command;

use crate::engine;
use crate::error::Result;
use crate::github;
use crate::pipeline::Pipeline;
use crate::settings::ReleaseSettings;

/// Build the outer command: metadata only, options come from the records
fn base_command() -> Command {
    Command::new("unity-release")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tag, zip, and publish Unity builds to GitHub releases")
        .long_about(
            "Create a new release: optionally build the project with the Unity \
             editor, tag the current commit, zip the build output (skipping \
             DoNotShip debug payloads) and publish it via the gh CLI.\n\n\
             Boolean flags support a negating --no- form, e.g. --no-latest.\n\n\
             Requires the GitHub CLI installed and authenticated: \
             https://cli.github.com/",
        )
}

/// Parse arguments, configure logging and run the release pipeline.
///
/// Returns the process exit code on success.
pub async fn run() -> Result<i32> {
    let release_options = ReleaseSettings::options();
    let github_options = github::release_create_options();
    let unity_options = engine::editor_options();

    let mut cmd = base_command();
    cmd = release_options.register(cmd);
    cmd = github_options.register(cmd);
    cmd = unity_options.register(cmd);
    let matches = cmd.get_matches();

    let release_record = release_options.resolve(&matches)?;
    let github_record = github_options.resolve(&matches)?;
    let unity_record = unity_options.resolve(&matches)?;

    let settings = ReleaseSettings::from_record(&release_record);
    init_logging(&settings.log);
    log::debug!("Resolved settings: {settings:?}");

    let pipeline = Pipeline::new(settings, github_record, unity_record, OutputManager::new());
    pipeline.run().await?;
    Ok(0)
}

/// Initialize the logger from the `--log` verbosity filter. `RUST_LOG`
/// still wins when set.
fn init_logging(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
