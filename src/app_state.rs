use std::sync::Arc;

use crate::config::ServerConfig;
use crate::gateway::Gateway;
use crate::llm::CompletionClient;
use crate::search::RemoteSearch;
use crate::skills::SkillLibrary;

/// Everything a request handler needs, shared by the stdio and HTTP transports.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub skills: Arc<SkillLibrary>,
    pub gateway: Arc<Gateway>,
    pub llm: Arc<CompletionClient>,
    pub remote_search: Arc<RemoteSearch>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let gateway = Arc::new(Gateway::new(&config)?);
        let llm = Arc::new(CompletionClient::new(&config, gateway.clone())?);
        let remote_search = Arc::new(RemoteSearch::new(config.vector_search.clone())?);
        let skills = Arc::new(SkillLibrary::new(config.skills_dir.clone()));

        Ok(Self {
            config: Arc::new(config),
            skills,
            gateway,
            llm,
            remote_search,
        })
    }
}
