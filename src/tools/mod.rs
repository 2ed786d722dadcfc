//! The fixed set of MCP tools.
//!
//! Every tool takes a JSON argument object and produces a string. Generation
//! tools interpolate their arguments and the shared skill context into a
//! template, send it through [`CompletionClient`](crate::llm::CompletionClient)
//! and post-process the reply.

pub mod postprocess;
pub mod templates;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::app_state::AppState;
use crate::llm::LlmError;
use crate::protocol::{
    ConvertParams, DesignSystemParams, ExplainConceptParams, GenerateComponentParams,
    GeneratePageParams, GenerateProjectParams, McpErrorCode, McpErrorResponse, ReviewCodeParams,
    SearchDocsParams, ToolDefinition,
};
use crate::search;
use crate::skills;

use self::postprocess::{clean_code_response, pretty_json_or_raw};

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
    #[error(transparent)]
    Completion(#[from] LlmError),
}

impl From<ToolError> for McpErrorResponse {
    fn from(err: ToolError) -> Self {
        let code = match &err {
            ToolError::InvalidArguments(_) => McpErrorCode::InvalidArguments,
            ToolError::Completion(LlmError::NotConfigured) => McpErrorCode::ConfigurationError,
            ToolError::Completion(_) => McpErrorCode::UpstreamError,
        };
        McpErrorResponse::new(code, err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    GetProjectRules,
    GenerateComponent,
    GeneratePage,
    GenerateProject,
    ConvertToSymbols,
    SearchSymbolsDocs,
    ExplainSymbolsConcept,
    ReviewSymbolsCode,
    CreateDesignSystem,
}

impl ToolKind {
    pub const ALL: [ToolKind; 9] = [
        ToolKind::GetProjectRules,
        ToolKind::GenerateComponent,
        ToolKind::GeneratePage,
        ToolKind::GenerateProject,
        ToolKind::ConvertToSymbols,
        ToolKind::SearchSymbolsDocs,
        ToolKind::ExplainSymbolsConcept,
        ToolKind::ReviewSymbolsCode,
        ToolKind::CreateDesignSystem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GetProjectRules => "get_project_rules",
            Self::GenerateComponent => "generate_component",
            Self::GeneratePage => "generate_page",
            Self::GenerateProject => "generate_project",
            Self::ConvertToSymbols => "convert_to_symbols",
            Self::SearchSymbolsDocs => "search_symbols_docs",
            Self::ExplainSymbolsConcept => "explain_symbols_concept",
            Self::ReviewSymbolsCode => "review_symbols_code",
            Self::CreateDesignSystem => "create_design_system",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::GetProjectRules => {
                "ALWAYS call this first before any generate_* tool. Returns the mandatory \
                 Symbols/DOMQL v3 rules; violations cause silent failures (black page, nothing renders)."
            }
            Self::GenerateComponent => {
                "Generate a Symbols/DOMQL v3 component from a natural-language description."
            }
            Self::GeneratePage => "Generate a Symbols/DOMQL v3 page with routing support.",
            Self::GenerateProject => {
                "Generate a complete multi-file Symbols/DOMQL v3 project structure as JSON."
            }
            Self::ConvertToSymbols => {
                "Convert React, Angular, Vue, or HTML code to Symbols/DOMQL v3 format."
            }
            Self::SearchSymbolsDocs => {
                "Search the Symbols documentation knowledge base for relevant information."
            }
            Self::ExplainSymbolsConcept => {
                "Explain a Symbols/DOMQL concept with examples (state, routing, events, design tokens, etc.)."
            }
            Self::ReviewSymbolsCode => {
                "Review Symbols/DOMQL code for correctness, best practices, and v3 compliance."
            }
            Self::CreateDesignSystem => {
                "Generate Symbols design system files (colors, spacing, typography, theme, icons)."
            }
        }
    }

    pub fn input_schema(self) -> Value {
        match self {
            Self::GetProjectRules => json!({ "type": "object", "properties": {} }),
            Self::GenerateComponent => json!({
                "type": "object",
                "required": ["description"],
                "properties": {
                    "description": {
                        "type": "string",
                        "description": "What the component should do/look like (e.g. \"a pricing card with 3 tiers\")"
                    },
                    "component_name": {
                        "type": "string",
                        "description": "PascalCase name for the component export",
                        "default": "GeneratedComponent"
                    },
                    "interactive": {
                        "type": "boolean",
                        "description": "Include event handlers and state management",
                        "default": false
                    }
                }
            }),
            Self::GeneratePage => json!({
                "type": "object",
                "required": ["description"],
                "properties": {
                    "description": {
                        "type": "string",
                        "description": "What the page should contain"
                    },
                    "page_name": {
                        "type": "string",
                        "description": "camelCase name for the page export",
                        "default": "main"
                    },
                    "route": {
                        "type": "string",
                        "description": "URL route for this page (e.g. \"/dashboard\")",
                        "default": "/"
                    }
                }
            }),
            Self::GenerateProject => json!({
                "type": "object",
                "required": ["description"],
                "properties": {
                    "description": {
                        "type": "string",
                        "description": "What the application should be"
                    },
                    "project_name": {
                        "type": "string",
                        "description": "Name for the project",
                        "default": "my-symbols-app"
                    }
                }
            }),
            Self::ConvertToSymbols => json!({
                "type": "object",
                "required": ["code"],
                "properties": {
                    "code": {
                        "type": "string",
                        "description": "Source code to convert (React JSX, Angular template, Vue SFC, or HTML)"
                    },
                    "source_framework": {
                        "type": "string",
                        "description": "Source framework: auto, react, angular, vue, or html",
                        "default": "auto"
                    }
                }
            }),
            Self::SearchSymbolsDocs => json!({
                "type": "object",
                "required": ["query"],
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Natural language search query about Symbols/DOMQL"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results to return (1-5, values outside are clamped)",
                        "default": 3
                    }
                }
            }),
            Self::ExplainSymbolsConcept => json!({
                "type": "object",
                "required": ["concept"],
                "properties": {
                    "concept": {
                        "type": "string",
                        "description": "The concept to explain (e.g. \"state management\", \"routing\", \"design tokens\")"
                    }
                }
            }),
            Self::ReviewSymbolsCode => json!({
                "type": "object",
                "required": ["code"],
                "properties": {
                    "code": {
                        "type": "string",
                        "description": "The Symbols/DOMQL code to review"
                    }
                }
            }),
            Self::CreateDesignSystem => json!({
                "type": "object",
                "required": ["description"],
                "properties": {
                    "description": {
                        "type": "string",
                        "description": "Design direction (e.g. \"dark modern SaaS dashboard\")"
                    },
                    "include_theme": {
                        "type": "boolean",
                        "description": "Include theme definitions",
                        "default": true
                    },
                    "include_icons": {
                        "type": "boolean",
                        "description": "Include a basic icon set",
                        "default": true
                    }
                }
            }),
        }
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.name(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }

    /// Run the tool. `arguments` must already satisfy [`Self::input_schema`].
    pub async fn call(self, arguments: Value, state: &AppState) -> Result<String, ToolError> {
        let skills = &state.skills;

        match self {
            Self::GetProjectRules => Ok(skills.agent_instructions()),

            Self::GenerateComponent => {
                let p: GenerateComponentParams = parse(arguments)?;
                let prompt = templates::component(
                    skills.symbols_context(),
                    &p.component_name,
                    &p.description,
                    p.interactive,
                );
                let reply = state.llm.complete(&prompt, 4000).await?;
                Ok(clean_code_response(&reply))
            }

            Self::GeneratePage => {
                let p: GeneratePageParams = parse(arguments)?;
                let prompt =
                    templates::page(skills.symbols_context(), &p.page_name, &p.route, &p.description);
                let reply = state.llm.complete(&prompt, 4000).await?;
                Ok(clean_code_response(&reply))
            }

            Self::GenerateProject => {
                let p: GenerateProjectParams = parse(arguments)?;
                let structure = skills.read(skills::PROJECT_STRUCTURE);
                let prompt = templates::project(
                    skills.symbols_context(),
                    &structure,
                    &p.project_name,
                    &p.description,
                );
                let reply = state.llm.complete(&prompt, 16000).await?;
                Ok(pretty_json_or_raw(clean_code_response(&reply)))
            }

            Self::ConvertToSymbols => {
                let p: ConvertParams = parse(arguments)?;
                let guide = skills.read(skills::MIGRATION_GUIDE);
                let v3 = skills.read(skills::V2_V3_MIGRATION);
                let prompt = templates::convert(
                    skills.symbols_context(),
                    &guide,
                    &v3,
                    &p.source_framework,
                    &p.code,
                );
                let reply = state.llm.complete(&prompt, 12000).await?;
                Ok(clean_code_response(&reply))
            }

            Self::SearchSymbolsDocs => {
                let p: SearchDocsParams = parse(arguments)?;
                let max_results = search::clamp_max_results(p.max_results);
                let results = search::search_docs(
                    skills.root(),
                    &state.remote_search,
                    &p.query,
                    max_results,
                )
                .await;
                Ok(search::render(&results, &p.query))
            }

            Self::ExplainSymbolsConcept => {
                let p: ExplainConceptParams = parse(arguments)?;
                let prompt = templates::explain(skills.symbols_context(), &p.concept);
                Ok(state.llm.complete(&prompt, 4000).await?)
            }

            Self::ReviewSymbolsCode => {
                let p: ReviewCodeParams = parse(arguments)?;
                let prompt = templates::review(skills.symbols_context(), &p.code);
                Ok(state.llm.complete(&prompt, 6000).await?)
            }

            Self::CreateDesignSystem => {
                let p: DesignSystemParams = parse(arguments)?;
                let direction = skills.read(skills::DESIGN_DIRECTION);
                let prompt = templates::design_system(
                    skills.symbols_context(),
                    &direction,
                    &p.description,
                    p.include_theme,
                    p.include_icons,
                );
                let reply = state.llm.complete(&prompt, 10000).await?;
                Ok(pretty_json_or_raw(clean_code_response(&reply)))
            }
        }
    }
}

/// Definitions for `tools/list`, in registration order.
pub fn definitions() -> Vec<ToolDefinition> {
    ToolKind::ALL.into_iter().map(ToolKind::definition).collect()
}

fn parse<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    Ok(serde_json::from_value(arguments)?)
}
