use sqlx::FromRow;

/// Database row for a registered user.
///
/// `password` holds the bcrypt hash, never the plaintext. Timestamps
/// are RFC 3339 text so the row shape is identical on both dialects.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub nama: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: String,
    pub updated_at: String,
}
