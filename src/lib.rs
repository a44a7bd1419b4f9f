mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, samples, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes, views};
pub use infrastructure::{store, utils};

use errors::StoreError;
use repositories::rest_repo::{
    RestAdminUserRepo, RestContactMessageRepo, RestProjectRepo, RestSessionRepo, RestSkillRepo,
};
use store::client::StoreClient;
use use_cases::{auth::AuthHandler, contact::ContactHandler, project::ProjectHandler, skill::SkillHandler};

pub struct AppState {
    pub config: settings::AppConfig,
    pub store: StoreClient,
    pub auth_handler: AppAuthHandler,
    pub project_handler: AppProjectHandler,
    pub skill_handler: AppSkillHandler,
    pub contact_handler: AppContactHandler,
}

pub type AppAuthHandler = AuthHandler<RestSessionRepo, RestAdminUserRepo>;
pub type AppProjectHandler = ProjectHandler<RestProjectRepo>;
pub type AppSkillHandler = SkillHandler<RestSkillRepo>;
pub type AppContactHandler = ContactHandler<RestContactMessageRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Result<Self, StoreError> {
        Ok(Self::with_store(config, StoreClient::new(config)?))
    }

    /// Wires every handler to one shared store client.
    pub fn with_store(config: &settings::AppConfig, store: StoreClient) -> Self {
        AppState {
            config: config.clone(),
            auth_handler: AuthHandler::new(
                RestSessionRepo::new(store.clone()),
                RestAdminUserRepo::new(store.clone()),
            ),
            project_handler: ProjectHandler::new(RestProjectRepo::new(store.clone())),
            skill_handler: SkillHandler::new(RestSkillRepo::new(store.clone())),
            contact_handler: ContactHandler::new(RestContactMessageRepo::new(store.clone())),
            store,
        }
    }
}
