//! Static file templates and the substitution context.
//!
//! Rendering is plain token replacement with no conditional logic. Tokens
//! are `{{PLUGIN_NAME}}`, `{{PLUGIN_TITLE}}`, and `{{SKILL_TITLE}}` (skill
//! template only). Since a token is only replaced on an exact match, the
//! JSON braces and `${CLAUDE_PLUGIN_ROOT}` references in the output need no
//! escaping.
//!
//! Each generated file holds TODO placeholder text rather than runnable
//! configuration; filling it in is the user's next step.

use crate::domain::name::{PluginName, title_case};

/// Mandatory plugin manifest.
pub const MANIFEST: &str = r#"{
  "name": "{{PLUGIN_NAME}}",
  "version": "0.1.0",
  "description": "TODO: Brief description of {{PLUGIN_TITLE}}"
}
"#;

/// Starter command prompt, written to `commands/example.md`.
pub const COMMAND: &str = r#"---
description: TODO: What this command does (shown in /help listing)
argument-hint: TODO: Expected arguments description
allowed-tools: ["Read", "Write", "Glob", "Grep", "Bash"]
---

# {{PLUGIN_TITLE}} Command

TODO: Replace with command implementation for {{PLUGIN_NAME}}.

Write instructions FOR Claude to execute when the user invokes this command.
Commands are prompts: Claude follows these instructions, they are not shown to the user.

Use $ARGUMENTS to reference what the user passes after the command name.

Example real commands from other plugins:
- code-review: Analyzes staged changes for quality, security, and best practices
- deploy: Runs deployment pipeline with environment selection
- test-runner: Executes test suites with coverage reporting

$ARGUMENTS
"#;

/// Starter agent definition, written to `agents/<name>-agent.md`.
pub const AGENT: &str = r#"---
name: {{PLUGIN_NAME}}-agent
description: |
  TODO: Describe what this agent specializes in and when Claude should invoke it.
  Include 2-4 <example> blocks showing realistic user messages that trigger this agent.

  <example>
  user: TODO: Example user message that should trigger this agent
  assistant: (uses {{PLUGIN_NAME}}-agent)
  </example>

  <example>
  user: TODO: Another triggering scenario
  assistant: (uses {{PLUGIN_NAME}}-agent)
  </example>
---

# {{PLUGIN_TITLE}} Agent

TODO: Write the system prompt for this agent.

Define the agent's role, expertise, constraints, and output format.
This prompt is what the agent sees as its instructions when invoked.

Example real agent system prompts follow patterns:
- **Analysis agent**: Define what to analyze, criteria, output format
- **Generation agent**: Define what to create, constraints, quality standards
- **Validation agent**: Define what to check, pass/fail criteria, reporting format
- **Orchestration agent**: Define workflow steps, decision points, delegation rules
"#;

/// Starter skill, written to `skills/<name>-skill/SKILL.md`.
///
/// Its `{{SKILL_TITLE}}` token is derived from the skill directory name,
/// not from the plugin title.
pub const SKILL: &str = r#"---
name: {{SKILL_TITLE}}
description: "TODO: This skill should be used when the user asks to \"do X\", \"perform Y\", or mentions Z. Include specific trigger phrases and scenarios that should activate this skill."
---

# {{SKILL_TITLE}}

TODO: Replace with skill content for {{PLUGIN_NAME}}.

Use the skill-creator skill (/skill-creator) for the complete methodology:
- Understanding use cases with concrete examples
- Planning reusable contents (scripts, references, assets)
- Writing effective SKILL.md with strong triggers
- Progressive disclosure design

Key requirements:
- Description must use third person ("This skill should be used when...")
- Body must use imperative/infinitive form ("Configure the server" not "You should configure")
- Keep SKILL.md lean (1,500-2,000 words), move detailed content to references/
"#;

/// Hook event wiring, written to `hooks/hooks.json`.
pub const HOOKS_JSON: &str = r#"{
  "hooks": {
    "TODO: Replace with event name (PreToolUse, PostToolUse, Stop, etc.)": [
      {
        "matcher": "TODO: Tool name pattern (e.g., Write|Edit)",
        "hooks": [
          {
            "type": "command",
            "command": "${CLAUDE_PLUGIN_ROOT}/hooks/scripts/TODO-rename.sh"
          }
        ]
      }
    ]
  }
}
"#;

/// Example hook script, written to `hooks/scripts/example-hook.sh` and
/// marked executable.
pub const HOOK_SCRIPT: &str = r#"#!/usr/bin/env bash
# Hook script for {{PLUGIN_NAME}}
#
# This script is called by Claude Code when a hook event fires.
# Input: JSON via stdin with tool_name, tool_input, etc.
# Output: JSON to stdout with decision and reason.
#
# Example real hook scripts:
# - validate-write.sh: Checks file writes for security issues
# - validate-bash.sh: Blocks dangerous shell commands
# - load-context.sh: Injects additional context on session start

set -euo pipefail

# Read hook input from stdin
INPUT=$(cat)

# TODO: Implement hook logic here
# Parse input with jq: echo "$INPUT" | jq -r '.tool_name'

# Output decision (allow or block)
echo '{"decision": "allow", "reason": "TODO: Implement validation logic"}'
"#;

/// MCP server stub, written to `.mcp.json` at the plugin root.
pub const MCP: &str = r#"{
  "mcpServers": {
    "{{PLUGIN_NAME}}-server": {
      "command": "TODO: server binary or runtime (e.g., node, python3)",
      "args": ["${CLAUDE_PLUGIN_ROOT}/servers/TODO-server.js"],
      "env": {
        "TODO_API_KEY": "${TODO_API_KEY}"
      }
    }
  }
}
"#;

/// LSP server stub, written to `.lsp.json` at the plugin root.
pub const LSP: &str = r#"{
  "TODO-language-name": {
    "command": "TODO: language-server-binary",
    "args": ["--stdio"],
    "extensionToLanguage": {
      ".TODO": "TODO-language-id"
    }
  }
}
"#;

/// Substitution context for one scaffold run.
///
/// Immutable after creation; both variables derive from the validated
/// plugin name, so rendering cannot fail.
#[derive(Debug, Clone)]
pub struct RenderContext {
    plugin_name: String,
    plugin_title: String,
}

impl RenderContext {
    pub fn new(name: &PluginName) -> Self {
        Self {
            plugin_name: name.as_str().to_string(),
            plugin_title: name.title(),
        }
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn plugin_title(&self) -> &str {
        &self.plugin_title
    }

    /// The derived skill identifier, `<plugin-name>-skill`.
    pub fn skill_name(&self) -> String {
        format!("{}-skill", self.plugin_name)
    }

    /// Substitute the two standard tokens.
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{{PLUGIN_NAME}}", &self.plugin_name)
            .replace("{{PLUGIN_TITLE}}", &self.plugin_title)
    }

    /// Render the skill template. The skill's own title comes from
    /// title-casing [`Self::skill_name`], independent of the plugin title.
    pub fn render_skill(&self, template: &str) -> String {
        let skill_title = title_case(&self.skill_name());
        self.render(template).replace("{{SKILL_TITLE}}", &skill_title)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
