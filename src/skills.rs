//! Skill files: the Markdown reference documents that back resources,
//! generation prompts and the local documentation search.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, warn};

pub const DOMQL_REFERENCE: &str = "CLAUDE.md";
pub const PROJECT_STRUCTURE: &str = "SYMBOLS_LOCAL_INSTRUCTIONS.md";
pub const DESIGN_DIRECTION: &str = "DESIGN_DIRECTION.md";
pub const MIGRATION_GUIDE: &str = "MIGRATE_TO_SYMBOLS.md";
pub const V2_V3_MIGRATION: &str = "DOMQL_v2-v3_MIGRATION.md";
pub const QUICKSTART: &str = "QUICKSTART.md";
pub const AGENT_INSTRUCTIONS: &str = "AGENT_INSTRUCTIONS.md";

/// Files concatenated into the shared generation context, in order.
const CONTEXT_FILES: [&str; 3] = [DOMQL_REFERENCE, PROJECT_STRUCTURE, DESIGN_DIRECTION];

const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

const FALLBACK_INSTRUCTIONS: &str = "AI-powered assistant for the Symbols design-system framework. \
Generates DOMQL v3 components, pages, and full projects; converts React/Angular/Vue code to \
Symbols; searches Symbols documentation; and provides comprehensive framework reference.";

/// Read access to the skills directory plus the memoized shared context.
#[derive(Debug)]
pub struct SkillLibrary {
    root: PathBuf,
    context: OnceLock<String>,
}

impl SkillLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            context: OnceLock::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a skill file, or `None` when it is missing or unreadable.
    pub fn load(&self, name: &str) -> Option<String> {
        let path = self.root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Skill file {} not found", path.display());
                None
            }
            Err(e) => {
                warn!("Cannot read skill file {}: {e}", path.display());
                None
            }
        }
    }

    /// Read a skill file, substituting a "not found" notice for missing files.
    pub fn read(&self, name: &str) -> String {
        self.load(name).unwrap_or_else(|| {
            format!(
                "Skill file '{name}' not found at {}",
                self.root.join(name).display()
            )
        })
    }

    /// The shared context injected into every generation prompt.
    ///
    /// Built on first access and never rebuilt.
    pub fn symbols_context(&self) -> &str {
        self.context.get_or_init(|| {
            let parts: Vec<String> = CONTEXT_FILES
                .iter()
                .filter_map(|name| self.load(name))
                .collect();
            debug!("Built shared context from {} skill files", parts.len());
            parts.join(CONTEXT_SEPARATOR)
        })
    }

    /// Instructions handed to clients on `initialize` and by `get_project_rules`.
    pub fn agent_instructions(&self) -> String {
        self.load(AGENT_INSTRUCTIONS)
            .unwrap_or_else(|| FALLBACK_INSTRUCTIONS.to_string())
    }
}
