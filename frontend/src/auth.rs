//! Authentication state.
//!
//! Keeps the session in a reactive signal so the router and the screens stay
//! in sync, decoupled from the routing system: the router only receives a
//! derived `is_authenticated` signal. The session store remains the durable
//! source of truth; this module mirrors it into signal-land and keeps both
//! sides consistent on login, register, logout and profile updates.

use lampunggo_shared::{Session, User};
use leptos::prelude::*;

use crate::api::{ApiError, WisataApi};

/// Reactive authentication state.
#[derive(Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Display name with the historical fallback.
    pub fn display_name(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.user.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "User".to_string())
    }

    pub fn email(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.user.email.clone())
            .filter(|email| !email.is_empty())
            .unwrap_or_else(|| "Tidak tersedia".to_string())
    }
}

/// Authentication context, shared through Leptos `Context`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Read side.
    pub state: ReadSignal<AuthState>,
    /// Write side.
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// Derived signal handed to the router for guard checks.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Restore a persisted session, if storage holds a complete one.
pub fn init_auth(ctx: &AuthContext, api: &WisataApi) {
    if let Some(session) = api.session().get() {
        ctx.set_state.update(|state| state.session = Some(session));
    }
}

/// Sign in and publish the session. Storage is written by the API client
/// before the signal flips, so the guard never observes a signed-in state
/// without a persisted token behind it.
pub async fn login(
    ctx: &AuthContext,
    api: &WisataApi,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let session = api.login(email, password).await?;
    ctx.set_state.update(|state| state.session = Some(session));
    Ok(())
}

/// Create an account; the response contract mirrors login, so a successful
/// registration signs the user in directly.
pub async fn register(
    ctx: &AuthContext,
    api: &WisataApi,
    name: &str,
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<(), ApiError> {
    let session = api
        .register(name, email, password, password_confirmation)
        .await?;
    ctx.set_state.update(|state| state.session = Some(session));
    Ok(())
}

/// Client-authoritative logout: local state dies even when the server call
/// does not land. Navigation is handled by the router's auth listener.
pub async fn logout(ctx: &AuthContext, api: &WisataApi) {
    api.logout().await;
    ctx.set_state.update(|state| state.session = None);
}

/// Keep signal and storage in step after a successful profile update.
pub fn apply_profile_update(ctx: &AuthContext, api: &WisataApi, user: &User) {
    api.session().update_user(user);
    ctx.set_state.update(|state| {
        if let Some(session) = &mut state.session {
            session.user = user.clone();
        }
    });
}
