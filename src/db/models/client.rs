use diesel::prelude::*;
use serde::{Deserialize, Serialize};

// Client models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub address: String,
    pub phone: String,
    pub country: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::clients)]
pub struct NewClient {
    pub name: String,
    pub company: String,
    pub address: String,
    pub phone: String,
    pub country: String,
}
