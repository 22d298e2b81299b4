//! Git tag management through the `git` binary.

use crate::error::Result;
use crate::process::CommandRunner;
use crate::version::SemVer;

fn tokens(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Read the latest tag reachable from the current commit.
///
/// Empty output (no tags yet, or dry-run) resolves to [`SemVer::ZERO`].
pub async fn latest_tag(runner: &CommandRunner) -> Result<SemVer> {
    let output = runner
        .run(&tokens(&["git", "describe", "--tags", "--abbrev=0"]))
        .await?;

    let stdout = output.stdout_text();
    let raw = stdout.trim();
    if raw.is_empty() {
        return Ok(SemVer::ZERO);
    }

    log::info!("Current tag: {raw}");
    Ok(raw.parse()?)
}

/// Create a local tag at the current commit
pub async fn create_tag(runner: &CommandRunner, tag: SemVer) -> Result<()> {
    log::info!("Creating git tag {tag}");
    runner.run(&tokens(&["git", "tag", &tag.to_string()])).await?;
    Ok(())
}

/// Push a tag to the origin remote. Must only run after [`create_tag`]
/// succeeded.
pub async fn push_tag(runner: &CommandRunner, tag: SemVer) -> Result<()> {
    log::info!("Pushing git tag {tag} to origin");
    runner
        .run(&tokens(&["git", "push", "origin", &tag.to_string()]))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dry_run_latest_tag_falls_back_to_zero() {
        // Dry-run returns empty output, which must resolve to the sentinel.
        let runner = CommandRunner::new(true);
        assert_eq!(latest_tag(&runner).await.unwrap(), SemVer::ZERO);
    }
}
