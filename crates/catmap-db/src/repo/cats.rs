use super::prelude::*;
use catmap_core::BoundingBox;

pub struct PgCatStore {
    pool: PgPool,
}

impl PgCatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatStore for PgCatStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Cat>> {
        query_as!(
            Cat,
            r#"
            SELECT
                id,
                name,
                weight,
                birthdate,
                filename,
                lat,
                lng,
                owner_id,
                created_at,
                updated_at
            FROM cats
            WHERE id = $1
            "#,
            id
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn list_all(&self) -> StoreResult<Vec<Cat>> {
        query_as!(
            Cat,
            r#"
            SELECT
                id,
                name,
                weight,
                birthdate,
                filename,
                lat,
                lng,
                owner_id,
                created_at,
                updated_at
            FROM cats
            ORDER BY created_at
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<Cat>> {
        query_as!(
            Cat,
            r#"
            SELECT
                id,
                name,
                weight,
                birthdate,
                filename,
                lat,
                lng,
                owner_id,
                created_at,
                updated_at
            FROM cats
            WHERE owner_id = $1
            ORDER BY created_at
            "#,
            owner_id
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn list_within(&self, area: BoundingBox) -> StoreResult<Vec<Cat>> {
        // Bounds are inclusive on every edge, matching BoundingBox::contains.
        query_as!(
            Cat,
            r#"
            SELECT
                id,
                name,
                weight,
                birthdate,
                filename,
                lat,
                lng,
                owner_id,
                created_at,
                updated_at
            FROM cats
            WHERE lat >= $1 AND lat <= $2
              AND lng >= $3 AND lng <= $4
            ORDER BY created_at
            "#,
            area.min_lat,
            area.max_lat,
            area.min_lng,
            area.max_lng
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn create(&self, cat: Cat) -> StoreResult<Cat> {
        query!(
            r#"
            INSERT INTO cats (
                id,
                name,
                weight,
                birthdate,
                filename,
                lat,
                lng,
                owner_id,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
            cat.id,
            cat.name.as_str(),
            cat.weight,
            cat.birthdate,
            cat.filename.as_deref(),
            cat.location.lat,
            cat.location.lng,
            cat.owner_id,
            cat.created_at,
            cat.updated_at
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;
        Ok(cat)
    }

    async fn update_by_id(&self, id: Uuid, changes: CatChanges) -> StoreResult<Option<Cat>> {
        // Single statement, so a racing delete leaves this returning None
        // instead of resurrecting the row.
        let now = Utc::now();
        query_as!(
            Cat,
            r#"
            UPDATE cats
            SET name = COALESCE($2, name),
                weight = COALESCE($3, weight),
                birthdate = COALESCE($4, birthdate),
                filename = COALESCE($5, filename),
                lat = COALESCE($6, lat),
                lng = COALESCE($7, lng),
                owner_id = COALESCE($8, owner_id),
                updated_at = $9
            WHERE id = $1
            RETURNING
                id,
                name,
                weight,
                birthdate,
                filename,
                lat,
                lng,
                owner_id,
                created_at,
                updated_at
            "#,
            id,
            changes.name,
            changes.weight,
            changes.birthdate,
            changes.filename,
            changes.location.map(|point| point.lat),
            changes.location.map(|point| point.lng),
            changes.owner_id,
            now
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<Cat>> {
        query_as!(
            Cat,
            r#"
            DELETE FROM cats
            WHERE id = $1
            RETURNING
                id,
                name,
                weight,
                birthdate,
                filename,
                lat,
                lng,
                owner_id,
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
