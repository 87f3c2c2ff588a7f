//! REST gateway client.
//!
//! Single point of contact with the backend: every call goes through one
//! configured base URL, carries JSON content negotiation headers, and
//! attaches the bearer token from the session store when one is present.
//! Failures are logged for diagnostics and handed back to the caller
//! untouched; each screen decides its own user-facing copy. No retries, no
//! backoff: this is a thin pass-through, not a resilience layer.

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use lampunggo_shared::{
    AuthResponse, DEFAULT_BASE_URL, Kategori, KategoriListResponse, LoginRequest, MessageResponse,
    RegisterRequest, Session, UpdateProfileRequest, User, Wisata, WisataDetailResponse,
    WisataListResponse,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session::SessionStore;

// =========================================================
// Error type
// =========================================================

/// What can go wrong talking to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, connection reset).
    Network(String),
    /// The backend answered with a non-2xx status.
    Status { status: u16, message: Option<String> },
    /// The body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Backend-provided message, when one was extractable.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "kesalahan jaringan: {msg}"),
            ApiError::Status { status, message } => match message {
                Some(m) => write!(f, "{m}"),
                None => write!(f, "server menjawab dengan status {status}"),
            },
            ApiError::Decode(msg) => write!(f, "respons tidak dapat dibaca: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Log-and-rethrow helper; diagnostics go to the browser console.
fn report(op: &'static str, err: ApiError) -> ApiError {
    web_sys::console::error_1(&format!("[api] {op} failed: {err}").into());
    err
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =========================================================
// Gateway client
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct WisataApi {
    base_url: String,
    session: SessionStore,
}

impl WisataApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            session: SessionStore::default(),
        }
    }

    /// Base URL baked in at build time, with the production fallback.
    pub fn from_env() -> Self {
        Self::new(
            option_env!("LAMPUNGGO_API_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        )
    }

    /// The session store this client reads its bearer token from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// JSON negotiation plus bearer attachment. The token is re-read from
    /// storage on every request, so a logout elsewhere in the app is picked
    /// up immediately; without a token the request goes out anonymous.
    fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        match self.session.token() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.decorate(Request::get(&self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.decorate(Request::post(&self.url(path)))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.decorate(Request::put(&self.url(path)))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.decorate(Request::delete(&self.url(path)))
    }

    // ---- authentication ----

    /// `POST /api/login`; persists the returned session on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let res = send_json(self.post("/api/login"), &payload)
            .await
            .map_err(|e| report("login", e))?;
        let auth: AuthResponse = decode(res).await.map_err(|e| report("login", e))?;
        let session = Session::from(auth);
        self.session.set(&session);
        Ok(session)
    }

    /// `POST /api/register`; same response contract as login.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<Session, ApiError> {
        let payload = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password_confirmation: password_confirmation.to_string(),
        };
        let res = send_json(self.post("/api/register"), &payload)
            .await
            .map_err(|e| report("register", e))?;
        let auth: AuthResponse = decode(res).await.map_err(|e| report("register", e))?;
        let session = Session::from(auth);
        self.session.set(&session);
        Ok(session)
    }

    /// `POST /api/logout`. The server call is best-effort: whatever it
    /// answers, the local session is gone afterwards. A token the server
    /// already rejected is useless to keep around.
    pub async fn logout(&self) {
        if let Err(e) = send(self.post("/api/logout")).await {
            // Logged only; logout must not fail the client.
            let _ = report("logout", e);
        }
        self.session.clear();
    }

    // ---- profile ----

    pub async fn fetch_user(&self) -> Result<User, ApiError> {
        let res = send(self.get("/api/user"))
            .await
            .map_err(|e| report("fetch_user", e))?;
        decode(res).await.map_err(|e| report("fetch_user", e))
    }

    pub async fn update_profile(
        &self,
        payload: &UpdateProfileRequest,
    ) -> Result<MessageResponse, ApiError> {
        let res = send_json(self.put("/api/update-profile"), payload)
            .await
            .map_err(|e| report("update_profile", e))?;
        decode(res).await.map_err(|e| report("update_profile", e))
    }

    // ---- catalogue ----

    pub async fn fetch_categories(&self) -> Result<Vec<Kategori>, ApiError> {
        let res = send(self.get("/api/kategori"))
            .await
            .map_err(|e| report("fetch_categories", e))?;
        let body: KategoriListResponse =
            decode(res).await.map_err(|e| report("fetch_categories", e))?;
        Ok(body.kategori)
    }

    pub async fn fetch_top_destinations(&self) -> Result<Vec<Wisata>, ApiError> {
        let res = send(self.get("/api/top-wisata"))
            .await
            .map_err(|e| report("fetch_top_destinations", e))?;
        let body: WisataListResponse = decode(res)
            .await
            .map_err(|e| report("fetch_top_destinations", e))?;
        Ok(body.wisata)
    }

    pub async fn fetch_destinations(&self) -> Result<Vec<Wisata>, ApiError> {
        let res = send(self.get("/api/wisata"))
            .await
            .map_err(|e| report("fetch_destinations", e))?;
        let body: WisataListResponse =
            decode(res).await.map_err(|e| report("fetch_destinations", e))?;
        Ok(body.wisata)
    }

    pub async fn fetch_destination_by_id(&self, id: u32) -> Result<Wisata, ApiError> {
        let res = send(self.get(&format!("/api/wisata/{id}")))
            .await
            .map_err(|e| report("fetch_destination_by_id", e))?;
        let body: WisataDetailResponse = decode(res)
            .await
            .map_err(|e| report("fetch_destination_by_id", e))?;
        Ok(body.wisata)
    }

    // ---- favorites ----

    pub async fn fetch_favorites(&self) -> Result<Vec<Wisata>, ApiError> {
        let res = send(self.get("/api/wisata/favorit"))
            .await
            .map_err(|e| report("fetch_favorites", e))?;
        let body: WisataListResponse =
            decode(res).await.map_err(|e| report("fetch_favorites", e))?;
        Ok(body.wisata)
    }

    pub async fn add_to_favorites(&self, id: u32) -> Result<MessageResponse, ApiError> {
        let res = send(self.post(&format!("/api/wisata/{id}/favorit")))
            .await
            .map_err(|e| report("add_to_favorites", e))?;
        decode(res).await.map_err(|e| report("add_to_favorites", e))
    }

    pub async fn remove_from_favorites(&self, id: u32) -> Result<MessageResponse, ApiError> {
        let res = send(self.delete(&format!("/api/wisata/{id}/favorit")))
            .await
            .map_err(|e| report("remove_from_favorites", e))?;
        decode(res)
            .await
            .map_err(|e| report("remove_from_favorites", e))
    }
}

// =========================================================
// Transport helpers
// =========================================================

/// Send a body-less request; fail on transport errors or non-2xx statuses.
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let res = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    error_for_status(res).await
}

/// Send a request with a JSON body.
async fn send_json<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<Response, ApiError> {
    let req = builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let res = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    error_for_status(res).await
}

/// Non-2xx: pull the optional backend message out of the body, keep the
/// status code.
async fn error_for_status(res: Response) -> Result<Response, ApiError> {
    if res.ok() {
        return Ok(res);
    }
    let status = res.status();
    let message = res
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|b| b.message);
    Err(ApiError::Status { status, message })
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_value_is_prefixed() {
        assert_eq!(bearer("1|abcdef"), "Bearer 1|abcdef");
    }

    #[test]
    fn url_join_normalizes_slashes() {
        let api = WisataApi::new("https://example.test/".to_string());
        assert_eq!(api.url("/api/wisata"), "https://example.test/api/wisata");
        assert_eq!(api.url("api/wisata"), "https://example.test/api/wisata");
    }
}
