//! Shared data contracts for the Lampung Go client.
//!
//! Everything here mirrors what the REST backend produces or consumes. The
//! client treats these as plain DTOs; the server stays authoritative for all
//! of it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod koordinat;

pub use koordinat::Koordinat;

// =========================================================
// Constants
// =========================================================

/// Production backend, used when no base URL is supplied at build time.
pub const DEFAULT_BASE_URL: &str = "https://admin.lampunggo.my.id";

// =========================================================
// Domain models
// =========================================================

/// The signed-in account as returned by `/api/user` and the auth endpoints.
///
/// The backend sends more fields (id, timestamps, verification state); the
/// client only ever reads the display name and the email, so everything else
/// is dropped at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// A signed-in identity: the bearer token plus the profile it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Destination category (`kategori`). Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kategori {
    pub id: u32,
    pub nama: String,
    pub kategori_image: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A tourism destination (`wisata`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wisata {
    pub id: u32,
    pub nama: String,
    pub kategori_id: u32,
    pub image: String,
    pub deskripsi: String,
    pub alamat: String,
    /// Tolerant of both object and JSON-string encodings; see [`Koordinat`].
    #[serde(default)]
    pub kordinat: Koordinat,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Embedded category record; older rows may miss it.
    #[serde(default)]
    pub kategori: Option<Kategori>,
    /// Only present on endpoints that know the requesting user.
    #[serde(default)]
    pub is_favorit: Option<bool>,
}

impl Wisata {
    /// Display name of the embedded category, when present.
    pub fn kategori_nama(&self) -> Option<&str> {
        self.kategori.as_ref().map(|k| k.nama.as_str())
    }
}

// =========================================================
// Request payloads
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Partial profile update; only the supplied fields travel over the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password_confirmation: Option<String>,
}

impl UpdateProfileRequest {
    /// Nothing to send?
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.new_password.is_none()
            && self.new_password_confirmation.is_none()
    }
}

// =========================================================
// Response envelopes
// =========================================================

/// `/api/login` and `/api/register` reply with the token and the profile
/// side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(res: AuthResponse) -> Self {
        Session {
            token: res.token,
            user: res.user,
        }
    }
}

/// `GET /api/kategori` wraps the list under a `kategori` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KategoriListResponse {
    pub kategori: Vec<Kategori>,
}

/// The destination list endpoints wrap their payload under `wisata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WisataListResponse {
    pub wisata: Vec<Wisata>,
}

/// `GET /api/wisata/{id}` wraps the single record the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WisataDetailResponse {
    pub wisata: Wisata,
}

/// Generic acknowledgement used by the favorite and profile endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests;
