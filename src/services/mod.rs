pub mod clients_service;
pub mod projects_service;

pub use clients_service::{ClientResolver, ClientsService, ResolvedClient};
pub use projects_service::ProjectsService;
