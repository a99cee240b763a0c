use serde_json::{Map, Value};
use tracing::{error, info};

use crate::{
    db::models::client::Client,
    db::store::ClientStore,
    error::{AppError, AppResult},
    validation::client::validate_create_client,
    validation::project::ClientSelection,
};

/// Client fields copied onto a project row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedClient {
    pub client_id: Option<i64>,
    pub client_name: Option<String>,
}

pub struct ClientResolver;

impl ClientResolver {
    /// Turns a validated selection into the `(client_id, client_name)` pair
    /// stored on the project, creating the client for `ClientSelection::New`.
    ///
    /// An existing client that can no longer be found is an integrity failure:
    /// validation already saw it, so it was removed in between.
    pub fn resolve<S>(store: &mut S, selection: &ClientSelection) -> AppResult<ResolvedClient>
    where
        S: ClientStore + ?Sized,
    {
        match selection {
            ClientSelection::None => Ok(ResolvedClient::default()),
            ClientSelection::New(details) => {
                let client = store.insert_client(details)?;
                info!(client_id = client.id, "Client created for new project");
                Ok(ResolvedClient {
                    client_id: Some(client.id),
                    client_name: Some(client.name),
                })
            }
            ClientSelection::Existing(client_id) => match store.find_client(*client_id)? {
                Some(client) => Ok(ResolvedClient {
                    client_id: Some(client.id),
                    client_name: Some(client.name),
                }),
                None => {
                    error!(client_id, "Client disappeared after validation");
                    Err(AppError::integrity(format!(
                        "client {} no longer exists",
                        client_id
                    )))
                }
            },
        }
    }
}

pub struct ClientsService;

impl ClientsService {
    pub fn list<S>(store: &mut S) -> AppResult<Vec<Client>>
    where
        S: ClientStore + ?Sized,
    {
        store.list_clients()
    }

    pub fn get<S>(store: &mut S, client_id: i64) -> AppResult<Client>
    where
        S: ClientStore + ?Sized,
    {
        store
            .find_client(client_id)?
            .ok_or_else(|| AppError::not_found("Client"))
    }

    pub fn create<S>(store: &mut S, input: &Map<String, Value>) -> AppResult<Client>
    where
        S: ClientStore + ?Sized,
    {
        let new_client = validate_create_client(input)?;
        let client = store.insert_client(&new_client)?;
        info!(client_id = client.id, "Client created");
        Ok(client)
    }
}
