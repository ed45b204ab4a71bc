//! Scaffold service - the application orchestrator.
//!
//! One public use case: create `<destination>/<plugin-name>/` with the
//! mandatory manifest and the requested component kinds, in canonical
//! order, through the driven ports.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter},
    },
    domain::{ComponentKind, ComponentSelection, PluginName, RenderContext, plan},
    error::ScaffoldResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>, reporter: Box<dyn Reporter>) -> Self {
        Self {
            filesystem,
            reporter,
        }
    }

    /// Create the plugin directory tree and return its path.
    ///
    /// Ordering guarantees: the existence check precedes any creation, and
    /// the manifest is written before any component. On a component write
    /// failure the remaining loop is abandoned and files already written
    /// stay on disk; there is no rollback.
    #[instrument(skip_all, fields(plugin = %name, destination = %destination.display()))]
    pub fn scaffold(
        &self,
        name: &PluginName,
        destination: &Path,
        selection: &ComponentSelection,
    ) -> ScaffoldResult<PathBuf> {
        let plugin_dir = destination.join(name.as_str());
        let ctx = RenderContext::new(name);

        // Best-effort guard, not a transactional guarantee: a concurrent
        // invocation can still win the race and make a later write fail.
        if self.filesystem.exists(&plugin_dir) {
            return Err(ApplicationError::PluginExists { path: plugin_dir }.into());
        }

        self.filesystem
            .create_dir_all(&plugin_dir.join(".claude-plugin"))
            .map_err(|e| ApplicationError::CreateDirFailed {
                path: plugin_dir.clone(),
                reason: e.to_string(),
            })?;
        self.reporter
            .created(&format!("Created plugin directory: {}", plugin_dir.display()));

        self.write_manifest(&plugin_dir, &ctx)?;

        for kind in &selection.kinds {
            self.create_component(*kind, &plugin_dir, &ctx)?;
            self.reporter.created(&plan::success_line(*kind, &ctx));
        }

        for unknown in &selection.unknown {
            warn!(component = %unknown, "unknown component requested");
            self.reporter
                .warning(&format!("Unknown component '{unknown}', skipping"));
        }

        info!("Scaffold completed");
        Ok(plugin_dir)
    }

    fn write_manifest(&self, plugin_dir: &Path, ctx: &RenderContext) -> ScaffoldResult<()> {
        self.apply(plugin_dir, &plan::manifest_entry(ctx))
            .map_err(|e| ApplicationError::ManifestWrite {
                path: plugin_dir.join(plan::MANIFEST_PATH),
                reason: e.to_string(),
            })?;
        self.reporter.created("Created .claude-plugin/plugin.json");
        Ok(())
    }

    fn create_component(
        &self,
        kind: ComponentKind,
        plugin_dir: &Path,
        ctx: &RenderContext,
    ) -> ScaffoldResult<()> {
        for entry in plan::component_plan(kind, ctx) {
            self.apply(plugin_dir, &entry)
                .map_err(|e| ApplicationError::ComponentWrite {
                    kind,
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }

    /// Materialize one planned entry under `root`.
    fn apply(&self, root: &Path, entry: &plan::FsEntry) -> ScaffoldResult<()> {
        match entry {
            plan::FsEntry::Dir(rel) => self.filesystem.create_dir_all(&root.join(rel)),
            plan::FsEntry::File {
                path,
                content,
                executable,
            } => {
                let full = root.join(path);
                if let Some(parent) = full.parent() {
                    self.filesystem.create_dir_all(parent)?;
                }
                self.filesystem.write_file(&full, content)?;
                if *executable {
                    self.filesystem.set_executable(&full)?;
                }
                Ok(())
            }
        }
    }
}
