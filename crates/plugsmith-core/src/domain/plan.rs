//! Table-driven mapping from component kind to filesystem entries.
//!
//! Every path is relative to the plugin root. Adding a new component kind
//! means one new arm in [`component_plan`] and one in [`success_line`]; the
//! scaffold service loop stays untouched.

use std::path::PathBuf;

use crate::domain::{component::ComponentKind, templates, templates::RenderContext};

/// Relative path of the mandatory manifest.
pub const MANIFEST_PATH: &str = ".claude-plugin/plugin.json";

/// A single filesystem action produced by planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    /// Create a directory (and parents).
    Dir(PathBuf),
    /// Write a file, creating parent directories as needed.
    File {
        path: PathBuf,
        content: String,
        executable: bool,
    },
}

impl FsEntry {
    fn file(path: impl Into<PathBuf>, content: String) -> Self {
        Self::File {
            path: path.into(),
            content,
            executable: false,
        }
    }
}

/// Plan the mandatory manifest file.
pub fn manifest_entry(ctx: &RenderContext) -> FsEntry {
    FsEntry::file(MANIFEST_PATH, ctx.render(templates::MANIFEST))
}

/// Plan the entries for one component kind.
pub fn component_plan(kind: ComponentKind, ctx: &RenderContext) -> Vec<FsEntry> {
    match kind {
        ComponentKind::Commands => vec![FsEntry::file(
            "commands/example.md",
            ctx.render(templates::COMMAND),
        )],
        ComponentKind::Agents => vec![FsEntry::file(
            format!("agents/{}-agent.md", ctx.plugin_name()),
            ctx.render(templates::AGENT),
        )],
        ComponentKind::Skills => vec![FsEntry::file(
            format!("skills/{}/SKILL.md", ctx.skill_name()),
            ctx.render_skill(templates::SKILL),
        )],
        ComponentKind::Hooks => vec![
            FsEntry::file("hooks/hooks.json", ctx.render(templates::HOOKS_JSON)),
            FsEntry::File {
                path: "hooks/scripts/example-hook.sh".into(),
                content: ctx.render(templates::HOOK_SCRIPT),
                executable: true,
            },
        ],
        ComponentKind::Mcp => vec![FsEntry::file(".mcp.json", ctx.render(templates::MCP))],
        ComponentKind::Lsp => vec![FsEntry::file(".lsp.json", ctx.render(templates::LSP))],
        // No starter file; users drop their own helper scripts here.
        ComponentKind::Scripts => vec![FsEntry::Dir("scripts".into())],
    }
}

/// One-line confirmation for a completed kind.
pub fn success_line(kind: ComponentKind, ctx: &RenderContext) -> String {
    match kind {
        ComponentKind::Commands => "Created commands/ with example command".into(),
        ComponentKind::Agents => format!("Created agents/{}-agent.md", ctx.plugin_name()),
        ComponentKind::Skills => format!("Created skills/{}/SKILL.md", ctx.skill_name()),
        ComponentKind::Hooks => "Created hooks/ with hooks.json and example script".into(),
        ComponentKind::Mcp => "Created .mcp.json".into(),
        ComponentKind::Lsp => "Created .lsp.json".into(),
        ComponentKind::Scripts => "Created scripts/".into(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::name::PluginName;

    fn ctx() -> RenderContext {
        RenderContext::new(&PluginName::parse("my-plugin").unwrap())
    }

    fn paths(entries: &[FsEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|e| match e {
                FsEntry::Dir(p) => p.display().to_string(),
                FsEntry::File { path, .. } => path.display().to_string(),
            })
            .collect()
    }

    #[test]
    fn manifest_path_is_inside_metadata_dir() {
        match manifest_entry(&ctx()) {
            FsEntry::File {
                path, executable, ..
            } => {
                assert_eq!(path, PathBuf::from(".claude-plugin/plugin.json"));
                assert!(!executable);
            }
            other => panic!("unexpected entry: {other:?}"),
        }
    }

    #[test]
    fn agent_filename_embeds_plugin_name() {
        let entries = component_plan(ComponentKind::Agents, &ctx());
        assert_eq!(paths(&entries), vec!["agents/my-plugin-agent.md"]);
    }

    #[test]
    fn skill_lives_in_derived_directory() {
        let entries = component_plan(ComponentKind::Skills, &ctx());
        assert_eq!(paths(&entries), vec!["skills/my-plugin-skill/SKILL.md"]);
    }

    #[test]
    fn hooks_plan_marks_only_the_script_executable() {
        let entries = component_plan(ComponentKind::Hooks, &ctx());
        assert_eq!(
            paths(&entries),
            vec!["hooks/hooks.json", "hooks/scripts/example-hook.sh"]
        );
        let flags: Vec<bool> = entries
            .iter()
            .map(|e| matches!(e, FsEntry::File { executable: true, .. }))
            .collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn scripts_plan_is_a_bare_directory() {
        let entries = component_plan(ComponentKind::Scripts, &ctx());
        assert_eq!(entries, vec![FsEntry::Dir("scripts".into())]);
    }

    #[test]
    fn root_level_configs_have_no_subdirectory() {
        assert_eq!(
            paths(&component_plan(ComponentKind::Mcp, &ctx())),
            vec![".mcp.json"]
        );
        assert_eq!(
            paths(&component_plan(ComponentKind::Lsp, &ctx())),
            vec![".lsp.json"]
        );
    }

    #[test]
    fn no_kind_ever_marks_a_non_hook_file_executable() {
        for kind in ComponentKind::ALL {
            if kind == ComponentKind::Hooks {
                continue;
            }
            for entry in component_plan(kind, &ctx()) {
                if let FsEntry::File { executable, path, .. } = entry {
                    assert!(!executable, "unexpected executable: {}", path.display());
                }
            }
        }
    }

    #[test]
    fn success_lines_name_what_was_created() {
        let c = ctx();
        assert_eq!(
            success_line(ComponentKind::Agents, &c),
            "Created agents/my-plugin-agent.md"
        );
        assert_eq!(
            success_line(ComponentKind::Skills, &c),
            "Created skills/my-plugin-skill/SKILL.md"
        );
        assert_eq!(success_line(ComponentKind::Scripts, &c), "Created scripts/");
    }
}
