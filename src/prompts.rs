//! Reusable MCP prompt templates.

use std::collections::HashMap;

use crate::protocol::{PromptArgument, PromptDescriptor};

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Component,
    Migration,
    Project,
    Review,
}

impl PromptKind {
    pub const ALL: [PromptKind; 4] = [
        PromptKind::Component,
        PromptKind::Migration,
        PromptKind::Project,
        PromptKind::Review,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Component => "symbols_component_prompt",
            Self::Migration => "symbols_migration_prompt",
            Self::Project => "symbols_project_prompt",
            Self::Review => "symbols_review_prompt",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Component => "Prompt template for generating a Symbols/DOMQL v3 component.",
            Self::Migration => "Prompt template for migrating code to Symbols/DOMQL v3.",
            Self::Project => "Prompt template for scaffolding a complete Symbols project.",
            Self::Review => "Prompt template for reviewing Symbols/DOMQL code.",
        }
    }

    pub fn arguments(self) -> Vec<PromptArgument> {
        match self {
            Self::Component => vec![
                PromptArgument {
                    name: "description",
                    description: "What the component should do",
                    required: true,
                },
                PromptArgument {
                    name: "component_name",
                    description: "PascalCase component name (default MyComponent)",
                    required: false,
                },
            ],
            Self::Migration => vec![PromptArgument {
                name: "source_framework",
                description: "Framework being migrated from (default React)",
                required: false,
            }],
            Self::Project => vec![PromptArgument {
                name: "description",
                description: "What the project should be",
                required: true,
            }],
            Self::Review => Vec::new(),
        }
    }

    pub fn descriptor(self) -> PromptDescriptor {
        PromptDescriptor {
            name: self.name(),
            description: self.description(),
            arguments: self.arguments(),
        }
    }

    pub fn render(self, args: &HashMap<String, String>) -> Result<String, PromptError> {
        let text = match self {
            Self::Component => {
                let description = required(args, "description")?;
                let component_name = optional(args, "component_name", "MyComponent");
                format!(
                    "Generate a Symbols/DOMQL v3 component with these requirements:

Component Name: {component_name}
Description: {description}

Follow these strict rules:
- Use DOMQL v3 syntax ONLY (extends, childExtends, flattened props, onX events)
- Components are plain objects with named exports: export const {component_name} = {{ ... }}
- Use design-system tokens for spacing (A, B, C), colors, typography
- NO imports between files - reference components by PascalCase key name
- All folders flat - no subfolders
- Include responsive breakpoints (@mobile, @tablet) where appropriate
- Follow modern UI/UX: visual hierarchy, minimal cognitive load, confident typography

Output ONLY the JavaScript code."
                )
            }
            Self::Migration => {
                let source_framework = optional(args, "source_framework", "React");
                format!(
                    "You are migrating {source_framework} code to Symbols/DOMQL v3.

Key conversion rules for {source_framework}:
- Components become plain objects (never functions)
- NO imports between project files
- All folders are flat - no subfolders
- Use extends/childExtends (v3 plural, never v2 singular)
- Flatten all props directly (no props: {{}} wrapper)
- Events use onX prefix (no on: {{}} wrapper)
- Use design-system tokens for spacing/colors
- State: state: {{ key: val }} + s.update({{ key: newVal }})
- Effects: onRender for mount, onStateUpdate for dependency changes
- Lists: children: (el, s) => s.items, childrenAs: 'state', childExtends: 'Item'

Provide the {source_framework} code to convert and I will output clean DOMQL v3."
                )
            }
            Self::Project => {
                let description = required(args, "description")?;
                format!(
                    "Create a complete Symbols/DOMQL v3 project:

Project Description: {description}

Required structure (smbls/ folder):
- index.js (root export)
- config.js (platform config)
- vars.js (global constants)
- dependencies.js (external packages)
- components/ (PascalCase files, named exports)
- pages/ (dash-case files, camelCase exports, route mapping in index.js)
- functions/ (camelCase, called via el.call())
- designSystem/ (color, spacing, typography, theme, icons)
- state/ (default exports)

Rules:
- v3 syntax only - extends, childExtends, flattened props, onX events
- Design tokens for all spacing/colors (padding: 'A', not padding: '16px')
- Components are plain objects, never functions
- No imports between project files
- All folders completely flat

Generate all files with complete, production-ready code."
                )
            }
            Self::Review => REVIEW_PROMPT.to_string(),
        };

        Ok(text)
    }
}

fn required<'a>(args: &'a HashMap<String, String>, key: &'static str) -> Result<&'a str, PromptError> {
    args.get(key)
        .map(String::as_str)
        .ok_or(PromptError::MissingArgument(key))
}

fn optional(args: &HashMap<String, String>, key: &str, default: &str) -> String {
    args.get(key).cloned().unwrap_or_else(|| default.to_string())
}

pub fn descriptors() -> Vec<PromptDescriptor> {
    PromptKind::ALL.into_iter().map(PromptKind::descriptor).collect()
}

const REVIEW_PROMPT: &str = "Review this Symbols/DOMQL code for v3 compliance and best practices.

Check for these violations:
1. v2 syntax: extend->extends, childExtend->childExtends, props:{}, on:{}
2. Imports between project files (FORBIDDEN)
3. Function-based components (must be plain objects)
4. Subfolders (must be flat)
5. Hardcoded pixels instead of design tokens
6. Wrong event handler signatures
7. Default exports for components (should be named)

Provide:
- Issues found with line references
- Corrected code for each issue
- Overall v3 compliance score (1-10)
- Improvement suggestions

Paste your code below:";
