//! Component kinds and selection parsing.

use std::fmt;

/// The seven recognized categories of plugin sub-content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Commands,
    Agents,
    Skills,
    Hooks,
    Mcp,
    Lsp,
    Scripts,
}

impl ComponentKind {
    /// Canonical scaffolding order. Selection input order never changes it.
    pub const ALL: [ComponentKind; 7] = [
        Self::Commands,
        Self::Agents,
        Self::Skills,
        Self::Hooks,
        Self::Mcp,
        Self::Lsp,
        Self::Scripts,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commands => "commands",
            Self::Agents => "agents",
            Self::Skills => "skills",
            Self::Hooks => "hooks",
            Self::Mcp => "mcp",
            Self::Lsp => "lsp",
            Self::Scripts => "scripts",
        }
    }

    /// Look up a kind by its exact lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of parsing a `--components` value.
///
/// Recognized kinds are held in canonical order with duplicates collapsed;
/// unrecognized entries are kept verbatim so the scaffold run can warn about
/// them without failing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentSelection {
    pub kinds: Vec<ComponentKind>,
    pub unknown: Vec<String>,
}

impl ComponentSelection {
    /// All seven kinds, the default when `--components` is omitted.
    pub fn all() -> Self {
        Self {
            kinds: ComponentKind::ALL.to_vec(),
            unknown: Vec::new(),
        }
    }

    /// Parse a comma-separated kind list.
    ///
    /// Whitespace around each entry is trimmed and empty entries are
    /// dropped, so `"commands, hooks,"` selects exactly two kinds.
    pub fn parse(list: &str) -> Self {
        let mut requested = Vec::new();
        let mut unknown = Vec::new();

        for entry in list.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match ComponentKind::from_name(entry) {
                Some(kind) if !requested.contains(&kind) => requested.push(kind),
                Some(_) => {}
                None => unknown.push(entry.to_string()),
            }
        }

        let kinds = ComponentKind::ALL
            .into_iter()
            .filter(|k| requested.contains(k))
            .collect();

        Self { kinds, unknown }
    }

    /// Human-readable list of everything that was requested, recognized or
    /// not, for the preamble line.
    pub fn summary(&self) -> String {
        self.kinds
            .iter()
            .map(|k| k.as_str().to_string())
            .chain(self.unknown.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
