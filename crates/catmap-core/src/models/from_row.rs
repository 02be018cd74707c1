#[cfg(feature = "postgres")]
use sqlx_core::from_row::FromRow;
#[cfg(feature = "postgres")]
use sqlx_core::row::Row;
#[cfg(feature = "postgres")]
use sqlx_postgres::PgRow;

#[cfg(feature = "postgres")]
use super::*;
#[cfg(feature = "postgres")]
use crate::geo::GeoPoint;

#[cfg(feature = "postgres")]
fn parse_enum<T: std::str::FromStr<Err = EnumParseError>>(
    value: &str,
) -> Result<T, sqlx_core::Error> {
    value
        .parse()
        .map_err(|err: EnumParseError| sqlx_core::Error::Decode(Box::new(err)))
}

#[cfg(feature = "postgres")]
impl FromRow<'_, PgRow> for User {
    fn from_row(row: &PgRow) -> Result<Self, sqlx_core::Error> {
        let role: String = row.try_get("role")?;
        Ok(Self {
            id: row.try_get("id")?,
            user_name: row.try_get("user_name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            role: parse_enum(&role)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[cfg(feature = "postgres")]
impl FromRow<'_, PgRow> for Cat {
    fn from_row(row: &PgRow) -> Result<Self, sqlx_core::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            weight: row.try_get("weight")?,
            birthdate: row.try_get("birthdate")?,
            filename: row.try_get("filename")?,
            location: GeoPoint {
                lat: row.try_get("lat")?,
                lng: row.try_get("lng")?,
            },
            owner_id: row.try_get("owner_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
