use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::UserRecord;

/// Look up a user by primary key. The SELECT list deliberately excludes the
/// password column.
pub async fn find_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<UserRecord>, DatabaseError> {
    let row = sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT id, email, name
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
