use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// User row as exposed to the rest of the application. The password column
/// is never part of the SELECT list, so credential material cannot leak past
/// the store boundary.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}
