//! Scaffold service tests against the in-memory adapters.

use std::path::{Path, PathBuf};

use plugsmith_adapters::{MemoryFilesystem, RecordingReporter};
use plugsmith_core::{
    application::{ApplicationError, ScaffoldService, ports::Filesystem},
    domain::{ComponentKind, ComponentSelection, PluginName},
    error::{ScaffoldError, ScaffoldResult},
};

fn service(fs: &MemoryFilesystem, reporter: &RecordingReporter) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()), Box::new(reporter.clone()))
}

fn name(raw: &str) -> PluginName {
    PluginName::parse(raw).unwrap()
}

#[test]
fn default_selection_writes_all_artifacts() {
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();

    let plugin_dir = service(&fs, &reporter)
        .scaffold(&name("my-plugin"), Path::new("/plugins"), &ComponentSelection::all())
        .unwrap();
    assert_eq!(plugin_dir, PathBuf::from("/plugins/my-plugin"));

    let expected_files = [
        ".claude-plugin/plugin.json",
        "commands/example.md",
        "agents/my-plugin-agent.md",
        "skills/my-plugin-skill/SKILL.md",
        "hooks/hooks.json",
        "hooks/scripts/example-hook.sh",
        ".mcp.json",
        ".lsp.json",
    ];
    for rel in expected_files {
        assert!(
            fs.read_file(&plugin_dir.join(rel)).is_some(),
            "missing: {rel}"
        );
    }
    assert_eq!(fs.list_files().len(), expected_files.len());
    assert!(fs.has_directory(&plugin_dir.join("scripts")));
}

#[test]
fn only_the_hook_script_is_executable() {
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();

    let plugin_dir = service(&fs, &reporter)
        .scaffold(&name("my-plugin"), Path::new("/plugins"), &ComponentSelection::all())
        .unwrap();

    for file in fs.list_files() {
        let is_hook_script = file.ends_with("hooks/scripts/example-hook.sh");
        assert_eq!(
            fs.is_executable(&file),
            is_hook_script,
            "wrong bit on: {}",
            file.display()
        );
    }
    assert!(fs.is_executable(&plugin_dir.join("hooks/scripts/example-hook.sh")));
}

#[test]
fn existing_directory_short_circuits_before_any_write() {
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();
    fs.create_dir_all(Path::new("/plugins/my-plugin")).unwrap();

    let err = service(&fs, &reporter)
        .scaffold(&name("my-plugin"), Path::new("/plugins"), &ComponentSelection::all())
        .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Application(ApplicationError::PluginExists { .. })
    ));
    assert!(fs.list_files().is_empty());
    assert!(reporter.lines().is_empty());
}

#[test]
fn manifest_is_written_before_any_component() {
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();

    service(&fs, &reporter)
        .scaffold(
            &name("my-plugin"),
            Path::new("/plugins"),
            &ComponentSelection::parse("commands,agents"),
        )
        .unwrap();

    let created = reporter.created_lines();
    assert_eq!(created[0], "Created plugin directory: /plugins/my-plugin");
    assert_eq!(created[1], "Created .claude-plugin/plugin.json");
    assert_eq!(created[2], "Created commands/ with example command");
    assert_eq!(created[3], "Created agents/my-plugin-agent.md");
}

#[test]
fn scaffold_order_is_canonical_regardless_of_input_order() {
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();

    service(&fs, &reporter)
        .scaffold(
            &name("my-plugin"),
            Path::new("/plugins"),
            &ComponentSelection::parse("lsp,hooks,commands"),
        )
        .unwrap();

    let created = reporter.created_lines();
    // Directory + manifest first, then commands before hooks before lsp.
    assert_eq!(created[2], "Created commands/ with example command");
    assert_eq!(created[3], "Created hooks/ with hooks.json and example script");
    assert_eq!(created[4], "Created .lsp.json");
}

#[test]
fn unknown_kinds_warn_without_failing() {
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();

    let result = service(&fs, &reporter).scaffold(
        &name("my-plugin"),
        Path::new("/plugins"),
        &ComponentSelection::parse("commands,bogus"),
    );

    assert!(result.is_ok());
    assert!(
        fs.read_file(Path::new("/plugins/my-plugin/commands/example.md"))
            .is_some()
    );
    assert_eq!(
        reporter.warning_lines(),
        vec!["Unknown component 'bogus', skipping"]
    );
}

#[test]
fn unknown_only_selection_still_creates_manifest() {
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();

    service(&fs, &reporter)
        .scaffold(
            &name("my-plugin"),
            Path::new("/plugins"),
            &ComponentSelection::parse("bogus"),
        )
        .unwrap();

    assert_eq!(
        fs.list_files(),
        vec![PathBuf::from("/plugins/my-plugin/.claude-plugin/plugin.json")]
    );
}

/// Filesystem wrapper that rejects writes to one path, for partial-failure
/// tests.
#[derive(Clone)]
struct FailingWrites {
    inner: MemoryFilesystem,
    deny_suffix: &'static str,
}

impl Filesystem for FailingWrites {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        self.inner.create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        if path.to_string_lossy().ends_with(self.deny_suffix) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        self.inner.write_file(path, content)
    }

    fn set_executable(&self, path: &Path) -> ScaffoldResult<()> {
        self.inner.set_executable(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }
}

#[test]
fn component_write_failure_aborts_remaining_kinds_without_rollback() {
    let memory = MemoryFilesystem::new();
    let fs = FailingWrites {
        inner: memory.clone(),
        deny_suffix: ".mcp.json",
    };
    let reporter = RecordingReporter::new();
    let service = ScaffoldService::new(Box::new(fs), Box::new(reporter.clone()));

    let err = service
        .scaffold(&name("my-plugin"), Path::new("/plugins"), &ComponentSelection::all())
        .unwrap_err();

    match err {
        ScaffoldError::Application(ApplicationError::ComponentWrite { kind, .. }) => {
            assert_eq!(kind, ComponentKind::Mcp);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Earlier components stay on disk; later ones were never attempted.
    assert!(
        memory
            .read_file(Path::new("/plugins/my-plugin/hooks/hooks.json"))
            .is_some()
    );
    assert!(
        memory
            .read_file(Path::new("/plugins/my-plugin/.lsp.json"))
            .is_none()
    );
    assert!(!memory.has_directory(Path::new("/plugins/my-plugin/scripts")));
}

#[test]
fn manifest_write_failure_is_reported_distinctly() {
    let memory = MemoryFilesystem::new();
    let fs = FailingWrites {
        inner: memory,
        deny_suffix: "plugin.json",
    };
    let reporter = RecordingReporter::new();
    let service = ScaffoldService::new(Box::new(fs), Box::new(reporter.clone()));

    let err = service
        .scaffold(&name("my-plugin"), Path::new("/plugins"), &ComponentSelection::all())
        .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Application(ApplicationError::ManifestWrite { .. })
    ));
    // The base directory was created and reported before the failure.
    assert_eq!(
        reporter.created_lines(),
        vec!["Created plugin directory: /plugins/my-plugin"]
    );
}
