use pin_reset_core::{
    PhoneNumber, UserDirectory, UserDirectoryError, UserId, UserRecord, UserRole, Username,
};
use secrecy::Secret;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserDirectory { pool }
    }
}

#[async_trait::async_trait]
impl UserDirectory for PostgresUserDirectory {
    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, UserDirectoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, phone_number, role, first_name, last_name
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserDirectoryError::UnexpectedError(e.to_string()))?;

        row.map(UserRecord::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    phone_number: String,
    role: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = UserDirectoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let unexpected = |e: &dyn std::fmt::Display| UserDirectoryError::UnexpectedError(e.to_string());

        let username = Username::parse(row.username).map_err(|e| unexpected(&e))?;
        let phone_number =
            PhoneNumber::parse(Secret::from(row.phone_number)).map_err(|e| unexpected(&e))?;
        let role = row.role.parse::<UserRole>().map_err(|e| unexpected(&e))?;

        Ok(UserRecord::new(
            UserId::new(row.id),
            username,
            phone_number,
            role,
            row.first_name.unwrap_or_default(),
            row.last_name.unwrap_or_default(),
        ))
    }
}
