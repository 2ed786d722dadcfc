//! MCP server and chat gateway for the Symbols/DOMQL v3 frontend framework.
//!
//! Exposes code-generation, migration, review and documentation-search tools,
//! reference resources and prompt templates over JSON-RPC 2.0 stdio, plus an
//! HTTP surface that proxies chat completions to an upstream LLM API.

pub mod app_state;
pub mod config;
pub mod gateway;
pub mod handlers;
pub mod http;
pub mod llm;
pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod search;
pub mod server;
pub mod skills;
pub mod tools;

pub mod schema;
