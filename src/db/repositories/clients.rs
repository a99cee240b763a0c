use diesel::prelude::*;

use crate::db::models::client::{Client, NewClient};

pub struct ClientsRepo;

impl ClientsRepo {
    pub fn exists(conn: &mut PgConnection, client_id: i64) -> Result<bool, diesel::result::Error> {
        use crate::schema::clients::dsl::*;
        diesel::select(diesel::dsl::exists(clients.filter(id.eq(client_id)))).get_result(conn)
    }

    pub fn insert(conn: &mut PgConnection, new_client: &NewClient) -> Result<Client, diesel::result::Error> {
        diesel::insert_into(crate::schema::clients::table)
            .values(new_client)
            .returning(Client::as_returning())
            .get_result(conn)
    }

    pub fn find_by_id(conn: &mut PgConnection, client_id: i64) -> Result<Option<Client>, diesel::result::Error> {
        use crate::schema::clients::dsl::*;
        clients
            .filter(id.eq(client_id))
            .select(Client::as_select())
            .first::<Client>(conn)
            .optional()
    }

    pub fn list_by_name(conn: &mut PgConnection) -> Result<Vec<Client>, diesel::result::Error> {
        use crate::schema::clients::dsl::*;
        clients
            .select(Client::as_select())
            .order((name.asc(), id.asc()))
            .load::<Client>(conn)
    }
}
