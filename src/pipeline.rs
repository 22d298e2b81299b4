//! Release pipeline orchestration.
//!
//! Setup always runs; the build, tag and publish stages are each gated by
//! their control flag and run strictly sequentially. Any stage failure
//! aborts everything after it — there are no retries and no rollback of
//! stages that already completed.

use std::path::Path;

use crate::archive;
use crate::cli::OutputManager;
use crate::engine;
use crate::error::Result;
use crate::git;
use crate::github;
use crate::process::CommandRunner;
use crate::settings::{ReleaseSettings, SettingsRecord};
use crate::version::SemVer;

/// The release pipeline: resolved settings plus the two passthrough records
pub struct Pipeline {
    settings: ReleaseSettings,
    github: SettingsRecord,
    unity: SettingsRecord,
    runner: CommandRunner,
    output: OutputManager,
}

impl Pipeline {
    /// Assemble a pipeline from resolved settings
    pub fn new(
        settings: ReleaseSettings,
        github: SettingsRecord,
        unity: SettingsRecord,
        output: OutputManager,
    ) -> Self {
        let runner = CommandRunner::new(settings.dry_run);
        Self {
            settings,
            github,
            unity,
            runner,
            output,
        }
    }

    /// Run every configured stage to completion
    pub async fn run(mut self) -> Result<()> {
        if self.settings.dry_run {
            self.output.info("Dry run: no commands will be executed");
        }

        self.setup().await?;
        let tag = self.settings.tag;

        if self.settings.compile {
            self.output.info("Building project with the Unity editor...");
            engine::run_build(&self.runner, &self.unity).await?;
            self.output.success("Build finished");
        }

        if self.settings.create_tag {
            self.output.info(&format!("Tagging release {tag}..."));
            git::create_tag(&self.runner, tag).await?;
            git::push_tag(&self.runner, tag).await?;
            self.output.success(&format!("Tag {tag} created and pushed"));
        }

        if self.settings.upload_release {
            self.output.info(&format!(
                "Packaging {} into {}...",
                self.settings.dist_dir.display(),
                self.settings.zip_file.display()
            ));
            archive::zip_build_output(
                self.settings.dry_run,
                &self.settings.dist_dir,
                &self.settings.zip_file,
            )?;
            github::create_release(&self.runner, tag, &self.settings.zip_file, &self.github)
                .await?;
            self.output.success(&format!("Release {tag} published"));
        }

        Ok(())
    }

    /// Setup stage: resolve version defaults, verify the gh CLI and ensure
    /// the build output directory exists — all three concurrently. A failure
    /// in any of them means no later stage runs.
    async fn setup(&mut self) -> Result<()> {
        let (tag, (), ()) = tokio::try_join!(
            resolve_tag(&self.runner, self.settings.tag),
            github::check_auth(&self.runner),
            ensure_dist_dir(self.settings.dry_run, &self.settings.dist_dir),
        )?;

        self.settings.tag = tag;
        if self.github.text("title").is_none() {
            self.github.set_text("title", format!("Release {tag}"));
        }
        if self.github.text("notes").is_none() {
            self.github
                .set_text("notes", format!("Automated release of version {tag}."));
        }

        log::info!("Successfully set up context for release {tag}");
        Ok(())
    }
}

/// Resolve the effective release tag: an explicit tag is used as-is, the
/// sentinel [`SemVer::ZERO`] derives a minor bump of the latest reachable
/// tag.
async fn resolve_tag(runner: &CommandRunner, requested: SemVer) -> Result<SemVer> {
    if requested != SemVer::ZERO {
        log::info!("Using explicit tag {requested}");
        return Ok(requested);
    }
    let latest = git::latest_tag(runner).await?;
    Ok(latest.bump_minor())
}

async fn ensure_dist_dir(dry_run: bool, dist_dir: &Path) -> Result<()> {
    if dist_dir.is_dir() {
        return Ok(());
    }
    if dry_run {
        log::info!(
            "Dry run: would create build output directory {}",
            dist_dir.display()
        );
        return Ok(());
    }
    log::info!("Creating build output directory {}", dist_dir.display());
    tokio::fs::create_dir_all(dist_dir).await?;
    Ok(())
}
