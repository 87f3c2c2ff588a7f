//! Router service - navigation engine.
//!
//! All `window.history` access is concentrated here. Every navigation runs
//! the same pipeline: parse the target, run the access check, write history,
//! publish the new route through a signal. The authentication state arrives
//! as an injected signal, which keeps this module decoupled from the auth
//! module. The guard is re-evaluated at all four entry points: initial URL,
//! programmatic navigation, browser back/forward, and auth-state changes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::route::{Access, AppRoute, check_access};

/// Current `pathname` + `search` from the browser.
fn current_path() -> String {
    web_sys::window()
        .map(|window| {
            let location = window.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            format!("{path}{search}")
        })
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects, so the rejected URL does not linger in history.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service.
///
/// Drives the UI through a route signal; cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Injected authentication check, for decoupling.
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // The initial URL is guarded too: a guest deep-linking into a
        // protected screen starts at the login screen instead.
        let requested = AppRoute::from_path(&current_path());
        let initial = match check_access(&requested, is_authenticated.get_untracked()) {
            Access::Granted => requested,
            Access::Redirect(redirect) => {
                replace_history_state(&redirect.to_path());
                redirect
            }
        };
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a path string.
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// Navigate straight to a route value, skipping the string round-trip.
    pub fn navigate_to(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();
        let resolved = match check_access(&target, is_auth) {
            Access::Granted => target,
            Access::Redirect(redirect) => {
                web_sys::console::log_1(
                    &format!("[router] access denied for {target}, redirecting to {redirect}")
                        .into(),
                );
                redirect
            }
        };
        let path = resolved.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_route.set(resolved);
    }

    /// Browser back/forward must not bypass the guard either.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            match check_access(&target, is_authenticated.get_untracked()) {
                Access::Granted => set_route.set(target),
                Access::Redirect(redirect) => {
                    replace_history_state(&redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // The listener lives as long as the page; leak it on purpose.
        closure.forget();
    }

    /// Re-check the current screen whenever the auth state flips: a login
    /// moves the user off the auth screens, a logout off the protected ones.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();
            if let Access::Redirect(redirect) = check_access(&route, is_auth) {
                push_history_state(&redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

/// Provide the router service through Context and wire its listeners.
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Navigation closure for event handlers.
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI components
// ============================================================================

/// Router root component; mount once at the top of the app.
#[component]
pub fn Router(
    /// Authentication state signal.
    is_authenticated: Signal<bool>,
    /// Child tree.
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders whatever screen the current route maps to.
#[component]
pub fn RouterOutlet(
    /// Route matching function: current route in, view out.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// Anchor that routes client-side instead of reloading the page.
#[component]
pub fn Link(
    /// Target path.
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let href = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
