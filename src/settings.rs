//! Declarative option descriptors and settings records.
//!
//! Each logical option is declared once as an [`OptionSpec`] — name, typed
//! default, help text — in an ordered list. The same list drives three
//! things: registration with the command-line parser, resolution of the
//! parsed arguments into a typed [`SettingsRecord`], and projection of a
//! record into flag tokens for an external CLI.
//!
//! Boolean options get a complementary `--no-` switch; whichever of the
//! pair appears last on the command line wins, and absence keeps the
//! declared default.

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::error::Result;
use crate::version::SemVer;

/// A typed option value. Resolved once at startup; the variant is fixed by
/// the declaration, so flag generation is a per-variant match rather than a
/// runtime type probe.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Boolean switch
    Flag(bool),
    /// Free text
    Text(Option<String>),
    /// Filesystem path
    Path(Option<PathBuf>),
    /// Release version
    Version(Option<SemVer>),
}

/// Declaration of a single option: identifier, typed default, help text
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Option identifier; underscores become hyphens in the long flag
    pub name: &'static str,
    /// Declared default value; also fixes the option's type
    pub default: OptionValue,
    /// Help text shown by the parser
    pub help: &'static str,
}

impl OptionSpec {
    /// Declare a boolean option. Registers both `--name` and `--no-name`.
    pub fn flag(name: &'static str, default: bool, help: &'static str) -> Self {
        Self {
            name,
            default: OptionValue::Flag(default),
            help,
        }
    }

    /// Declare a free-text option
    pub fn text(name: &'static str, default: Option<&str>, help: &'static str) -> Self {
        Self {
            name,
            default: OptionValue::Text(default.map(str::to_string)),
            help,
        }
    }

    /// Declare a filesystem path option
    pub fn path(name: &'static str, default: Option<&str>, help: &'static str) -> Self {
        Self {
            name,
            default: OptionValue::Path(default.map(PathBuf::from)),
            help,
        }
    }

    /// Declare a version option
    pub fn version(name: &'static str, default: SemVer, help: &'static str) -> Self {
        Self {
            name,
            default: OptionValue::Version(Some(default)),
            help,
        }
    }

    /// Long flag name: the identifier with underscores replaced by hyphens
    pub fn flag_name(&self) -> String {
        self.name.replace('_', "-")
    }

    fn negation_id(&self) -> String {
        format!("no_{}", self.name)
    }
}

/// An ordered collection of options with their current values
#[derive(Debug, Clone)]
pub struct SettingsRecord {
    options: Vec<(OptionSpec, OptionValue)>,
}

impl SettingsRecord {
    /// Create a record from declarations, with every value at its default
    pub fn new(specs: Vec<OptionSpec>) -> Self {
        let options = specs
            .into_iter()
            .map(|spec| {
                let value = spec.default.clone();
                (spec, value)
            })
            .collect();
        Self { options }
    }

    /// Register every declared option with the parser.
    ///
    /// Boolean options register an overridable `--name` / `--no-name` pair,
    /// so the last occurrence on the command line wins.
    pub fn register(&self, mut cmd: Command) -> Command {
        for (spec, _) in &self.options {
            let long = spec.flag_name();
            match &spec.default {
                OptionValue::Flag(_) => {
                    cmd = cmd.arg(
                        Arg::new(spec.name)
                            .long(long.clone())
                            .action(ArgAction::SetTrue)
                            .help(spec.help),
                    );
                    cmd = cmd.arg(
                        Arg::new(spec.negation_id())
                            .long(format!("no-{long}"))
                            .action(ArgAction::SetTrue)
                            .overrides_with(spec.name)
                            .help("Negated form of the matching switch"),
                    );
                }
                OptionValue::Text(_) => {
                    cmd = cmd.arg(
                        Arg::new(spec.name)
                            .long(long)
                            .action(ArgAction::Set)
                            .value_name("TEXT")
                            .help(spec.help),
                    );
                }
                OptionValue::Path(_) => {
                    cmd = cmd.arg(
                        Arg::new(spec.name)
                            .long(long)
                            .action(ArgAction::Set)
                            .value_name("PATH")
                            .help(spec.help),
                    );
                }
                OptionValue::Version(_) => {
                    cmd = cmd.arg(
                        Arg::new(spec.name)
                            .long(long)
                            .action(ArgAction::Set)
                            .value_name("VERSION")
                            .help(spec.help),
                    );
                }
            }
        }
        cmd
    }

    /// Resolve parsed arguments into this record's values
    pub fn resolve(mut self, matches: &ArgMatches) -> Result<Self> {
        for (spec, value) in &mut self.options {
            *value = match &spec.default {
                OptionValue::Flag(default) => {
                    let resolved = if matches.get_flag(&spec.negation_id()) {
                        false
                    } else if matches.get_flag(spec.name) {
                        true
                    } else {
                        *default
                    };
                    OptionValue::Flag(resolved)
                }
                OptionValue::Text(default) => OptionValue::Text(
                    matches
                        .get_one::<String>(spec.name)
                        .cloned()
                        .or_else(|| default.clone()),
                ),
                OptionValue::Path(default) => OptionValue::Path(
                    matches
                        .get_one::<String>(spec.name)
                        .map(PathBuf::from)
                        .or_else(|| default.clone()),
                ),
                OptionValue::Version(default) => {
                    OptionValue::Version(match matches.get_one::<String>(spec.name) {
                        Some(raw) => Some(raw.parse()?),
                        None => *default,
                    })
                }
            };
        }
        Ok(self)
    }

    /// Current boolean value of a flag option; false for non-flag options
    pub fn flag(&self, name: &str) -> bool {
        match self.value(name) {
            Some(OptionValue::Flag(b)) => *b,
            _ => false,
        }
    }

    /// Current value of a text option
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.value(name) {
            Some(OptionValue::Text(Some(s))) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Current value of a path option
    pub fn path(&self, name: &str) -> Option<&Path> {
        match self.value(name) {
            Some(OptionValue::Path(Some(p))) => Some(p.as_path()),
            _ => None,
        }
    }

    /// Current value of a version option
    pub fn version(&self, name: &str) -> Option<SemVer> {
        match self.value(name) {
            Some(OptionValue::Version(v)) => *v,
            _ => None,
        }
    }

    /// Overwrite a text option with a computed default
    pub fn set_text(&mut self, name: &str, value: String) {
        self.set(name, OptionValue::Text(Some(value)));
    }

    fn set(&mut self, name: &str, value: OptionValue) {
        match self.options.iter_mut().find(|(spec, _)| spec.name == name) {
            Some((_, slot)) => *slot = value,
            None => log::warn!("Ignoring unknown setting: {name}"),
        }
    }

    fn value(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, value)| value)
    }

    /// Project this record into long flag tokens for an external CLI.
    ///
    /// Options are emitted in declaration order: a true flag becomes
    /// `--name`, a non-empty text or path becomes `--name value`, and
    /// false/empty/absent values are omitted. Any other value shape is
    /// logged and skipped, never an error.
    pub fn long_flags(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        for (spec, value) in &self.options {
            let flag = format!("--{}", spec.flag_name());
            match value {
                OptionValue::Flag(true) => tokens.push(flag),
                OptionValue::Flag(false)
                | OptionValue::Text(None)
                | OptionValue::Path(None) => {}
                OptionValue::Text(Some(text)) => {
                    if !text.is_empty() {
                        tokens.push(flag);
                        tokens.push(text.clone());
                    }
                }
                OptionValue::Path(Some(path)) => {
                    if !path.as_os_str().is_empty() {
                        tokens.push(flag);
                        tokens.push(path.display().to_string());
                    }
                }
                other => {
                    log::warn!("Unused setting type or value: {}={other:?}", spec.name);
                }
            }
        }
        tokens
    }

    /// Project this record into Unity-style flag tokens.
    ///
    /// The Unity editor takes single-hyphen flags whose first character is
    /// lower-cased (`-batchmode`, `-projectPath <p>`). Options named in
    /// `skip` are not emitted; the same true/false/absent rules as
    /// [`Self::long_flags`] apply.
    pub fn engine_flags(&self, skip: &[&str]) -> Vec<String> {
        let mut tokens = Vec::new();
        for (spec, value) in &self.options {
            if skip.contains(&spec.name) {
                continue;
            }
            let flag = engine_flag_name(spec.name);
            match value {
                OptionValue::Flag(true) => tokens.push(flag),
                OptionValue::Flag(false)
                | OptionValue::Text(None)
                | OptionValue::Path(None) => {}
                OptionValue::Text(Some(text)) => {
                    if !text.is_empty() {
                        tokens.push(flag);
                        tokens.push(text.clone());
                    }
                }
                OptionValue::Path(Some(path)) => {
                    if !path.as_os_str().is_empty() {
                        tokens.push(flag);
                        tokens.push(path.display().to_string());
                    }
                }
                other => {
                    log::warn!(
                        "Unused editor argument type or value: {}={other:?}",
                        spec.name
                    );
                }
            }
        }
        tokens
    }
}

/// Default build output directory
pub const DEFAULT_DIST_DIR: &str = "dist";
/// Default archive path
pub const DEFAULT_ZIP_FILE: &str = "release.zip";
/// Default log verbosity filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Typed projection of the release-control settings record
#[derive(Debug, Clone)]
pub struct ReleaseSettings {
    /// Build the project with the Unity editor first
    pub compile: bool,
    /// Create and push a git tag
    pub create_tag: bool,
    /// Zip the build output and publish a GitHub release
    pub upload_release: bool,
    /// Requested tag; [`SemVer::ZERO`] means "derive from the latest tag"
    pub tag: SemVer,
    /// Build output directory
    pub dist_dir: PathBuf,
    /// Archive path to create
    pub zip_file: PathBuf,
    /// Log external commands and file operations without running them
    pub dry_run: bool,
    /// Log verbosity filter
    pub log: String,
}

impl ReleaseSettings {
    /// Declare the release-control options
    pub fn options() -> SettingsRecord {
        SettingsRecord::new(vec![
            OptionSpec::flag(
                "compile",
                false,
                "Build the project with the Unity editor before packaging",
            ),
            OptionSpec::flag(
                "create_tag",
                false,
                "Create a git tag for the release and push it to origin",
            ),
            OptionSpec::flag(
                "upload_release",
                false,
                "Zip the build output and publish it as a GitHub release",
            ),
            OptionSpec::version(
                "tag",
                SemVer::ZERO,
                "Tag for the release; derived from the latest git tag when omitted",
            ),
            OptionSpec::path(
                "dist_dir",
                Some(DEFAULT_DIST_DIR),
                "Build output directory to package",
            ),
            OptionSpec::path(
                "zip_file",
                Some(DEFAULT_ZIP_FILE),
                "Path of the zip archive to create",
            ),
            OptionSpec::flag(
                "dry_run",
                false,
                "Log external commands and file operations without running them",
            ),
            OptionSpec::text(
                "log",
                Some(DEFAULT_LOG_FILTER),
                "Log verbosity filter: error, warn, info, debug or trace",
            ),
        ])
    }

    /// Build the typed settings from a resolved record
    pub fn from_record(record: &SettingsRecord) -> Self {
        Self {
            compile: record.flag("compile"),
            create_tag: record.flag("create_tag"),
            upload_release: record.flag("upload_release"),
            tag: record.version("tag").unwrap_or(SemVer::ZERO),
            dist_dir: record
                .path("dist_dir")
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
            zip_file: record
                .path("zip_file")
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ZIP_FILE)),
            dry_run: record.flag("dry_run"),
            log: record
                .text("log")
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
        }
    }
}

fn engine_flag_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("-{}{}", first.to_lowercase(), chars.as_str()),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SettingsRecord {
        SettingsRecord::new(vec![
            OptionSpec::flag("draft", false, "draft"),
            OptionSpec::text("notes", None, "notes"),
            OptionSpec::text("target", Some("main"), "target"),
        ])
    }

    fn resolve(record: SettingsRecord, argv: &[&str]) -> SettingsRecord {
        let cmd = record.register(Command::new("test"));
        let mut full = vec!["test"];
        full.extend(argv);
        let matches = cmd.try_get_matches_from(full).unwrap();
        record.resolve(&matches).unwrap()
    }

    #[test]
    fn absent_flags_keep_their_default() {
        let resolved = resolve(record(), &[]);
        assert!(!resolved.flag("draft"));
        assert_eq!(resolved.text("target"), Some("main"));
        assert_eq!(resolved.text("notes"), None);
    }

    #[test]
    fn positive_switch_forces_true() {
        let resolved = resolve(record(), &["--draft"]);
        assert!(resolved.flag("draft"));
    }

    #[test]
    fn negating_switch_forces_false() {
        let specs = vec![OptionSpec::flag("latest", true, "latest")];
        let resolved = resolve(SettingsRecord::new(specs), &["--no-latest"]);
        assert!(!resolved.flag("latest"));
    }

    #[test]
    fn last_switch_on_the_command_line_wins() {
        let resolved = resolve(record(), &["--draft", "--no-draft"]);
        assert!(!resolved.flag("draft"));

        let resolved = resolve(record(), &["--no-draft", "--draft"]);
        assert!(resolved.flag("draft"));
    }

    #[test]
    fn long_flags_emit_declared_order_and_skip_absent() {
        let mut record = record();
        record.set("draft", OptionValue::Flag(true));
        assert_eq!(record.long_flags(), vec!["--draft", "--target", "main"]);
    }

    #[test]
    fn long_flags_hyphenate_underscored_names() {
        let record = SettingsRecord::new(vec![OptionSpec::flag(
            "generate_notes",
            true,
            "generate notes",
        )]);
        assert_eq!(record.long_flags(), vec!["--generate-notes"]);
    }

    #[test]
    fn long_flags_skip_empty_text() {
        let mut record = record();
        record.set_text("target", String::new());
        assert!(record.long_flags().is_empty());
    }

    #[test]
    fn long_flags_skip_unsupported_shapes() {
        let record = SettingsRecord::new(vec![OptionSpec::version(
            "tag",
            SemVer::new(1, 0, 0),
            "tag",
        )]);
        // Versions are not passthrough material; logged and skipped.
        assert!(record.long_flags().is_empty());
    }

    #[test]
    fn engine_flags_use_single_hyphen_lowered_first_char() {
        let record = SettingsRecord::new(vec![
            OptionSpec::flag("batchmode", true, "batch mode"),
            OptionSpec::text("buildTarget", Some("standalonewindows64"), "target"),
            OptionSpec::path("projectPath", Some("."), "project"),
            OptionSpec::flag("quit", false, "quit"),
        ]);
        assert_eq!(
            record.engine_flags(&[]),
            vec![
                "-batchmode",
                "-buildTarget",
                "standalonewindows64",
                "-projectPath",
                ".",
            ]
        );
    }

    #[test]
    fn engine_flags_honor_the_skip_list() {
        let record = SettingsRecord::new(vec![
            OptionSpec::path("unityPath", Some("Unity.exe"), "editor"),
            OptionSpec::flag("batchmode", true, "batch mode"),
        ]);
        assert_eq!(record.engine_flags(&["unityPath"]), vec!["-batchmode"]);
    }

    #[test]
    fn release_settings_project_from_record() {
        let record = ReleaseSettings::options();
        let resolved = resolve(record, &["--create-tag", "--tag", "v2.0.0", "--dry-run"]);
        let settings = ReleaseSettings::from_record(&resolved);
        assert!(settings.create_tag);
        assert!(settings.dry_run);
        assert!(!settings.compile);
        assert_eq!(settings.tag, SemVer::new(2, 0, 0));
        assert_eq!(settings.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(settings.log, "info");
    }

    #[test]
    fn malformed_tag_value_is_rejected() {
        let record = ReleaseSettings::options();
        let cmd = record.register(Command::new("test"));
        let matches = cmd
            .try_get_matches_from(["test", "--tag", "not-a-version"])
            .unwrap();
        assert!(record.resolve(&matches).is_err());
    }
}
