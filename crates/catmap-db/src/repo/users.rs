use super::prelude::*;

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        query_as!(
            User,
            r#"
            SELECT
                id,
                user_name,
                email,
                password_hash,
                role,
                created_at,
                updated_at
            FROM users
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find_by_user_name(&self, user_name: &str) -> StoreResult<Option<User>> {
        query_as!(
            User,
            r#"
            SELECT
                id,
                user_name,
                email,
                password_hash,
                role,
                created_at,
                updated_at
            FROM users
            WHERE user_name = $1
            "#,
            user_name
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        query_as!(
            User,
            r#"
            SELECT
                id,
                user_name,
                email,
                password_hash,
                role,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
            email
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        query_as!(
            User,
            r#"
            SELECT
                id,
                user_name,
                email,
                password_hash,
                role,
                created_at,
                updated_at
            FROM users
            ORDER BY created_at
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn create(&self, user: User) -> StoreResult<User> {
        query!(
            r#"
            INSERT INTO users (
                id,
                user_name,
                email,
                password_hash,
                role,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
            user.id,
            user.user_name.as_str(),
            user.email.as_str(),
            user.password_hash.as_str(),
            user.role.as_str(),
            user.created_at,
            user.updated_at
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(user)
    }

    async fn update_by_id(&self, id: Uuid, changes: UserChanges) -> StoreResult<Option<User>> {
        let now = Utc::now();
        query_as!(
            User,
            r#"
            UPDATE users
            SET user_name = COALESCE($2, user_name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                role = COALESCE($5, role),
                updated_at = $6
            WHERE id = $1
            RETURNING
                id,
                user_name,
                email,
                password_hash,
                role,
                created_at,
                updated_at
            "#,
            id,
            changes.user_name,
            changes.email,
            changes.password_hash,
            changes.role.map(|role| role.as_str()),
            now
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        query_as!(
            User,
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING
                id,
                user_name,
                email,
                password_hash,
                role,
                created_at,
                updated_at
            "#,
            id
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }
}
