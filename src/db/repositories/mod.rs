pub mod clients;
pub mod projects;

pub use clients::ClientsRepo;
pub use projects::ProjectsRepo;
