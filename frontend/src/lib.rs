//! Lampung Go frontend.
//!
//! Context-driven architecture, high cohesion and low coupling:
//! - `web::route` / `web::router`: route model and navigation engine
//! - `session`: durable session record (token + profile)
//! - `api`: REST gateway client with bearer attachment
//! - `auth`: reactive authentication state
//! - `filter`: in-memory destination filtering
//! - `components`: screens and shared UI

mod api;
mod auth;
mod components {
    mod categories;
    mod destination_card;
    pub mod detail;
    pub mod dock;
    pub mod explore;
    mod favorites;
    pub mod home;
    mod icons;
    pub mod install_prompt;
    pub mod login;
    pub mod maps;
    pub mod navbar;
    mod popular;
    pub mod profile;
    pub mod register;
    pub mod settings;
}
mod filter;
mod session;

// Native browser API wrappers: history, localStorage, request sequencing.
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod sequencer;
    mod storage;

    pub use sequencer::{RequestSequencer, RequestTicket, use_sequencer};
    pub use storage::LocalStorage;
}

use leptos::prelude::*;

use crate::api::WisataApi;
use crate::auth::{AuthContext, init_auth};
use crate::components::detail::DetailPage;
use crate::components::dock::Dock;
use crate::components::explore::ExplorePage;
use crate::components::home::HomePage;
use crate::components::install_prompt::InstallPromptPopup;
use crate::components::login::LoginPage;
use crate::components::maps::MapsPage;
use crate::components::navbar::Navbar;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::components::settings::SettingsPage;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet, use_router};

/// Map a route to its screen.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Explore(kategori) => {
            view! { <ExplorePage initial_kategori=kategori /> }.into_any()
        }
        AppRoute::Maps => view! { <MapsPage /> }.into_any(),
        AppRoute::Detail(id) => view! { <DetailPage id=id /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
    }
}

/// Screen chrome: navbar on top, dock at the bottom, hidden on auth screens.
#[component]
fn AppShell() -> impl IntoView {
    let router = use_router();
    let chrome = move || {
        !matches!(
            router.current_route().get(),
            AppRoute::Login | AppRoute::Register
        )
    };

    view! {
        <div class="min-h-screen bg-base-100 pb-16">
            <Show when=chrome>
                <Navbar />
            </Show>
            <RouterOutlet matcher=route_matcher />
            <Show when=chrome>
                <Dock />
            </Show>
            <InstallPromptPopup />
        </div>
    }
}

/// Boot splash, as the original app shipped it.
#[component]
fn SplashScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gradient-to-br from-blue-600 via-blue-500 to-blue-400 text-white">
            <h1 class="text-4xl font-extrabold mb-4">"Lampung Go!"</h1>
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Auth context first: the router needs its signal.
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. One gateway client for the whole app.
    let api = WisataApi::from_env();
    provide_context(api.clone());

    // 3. Restore a persisted session before anything renders.
    init_auth(&auth_ctx, &api);

    let is_authenticated = auth_ctx.is_authenticated_signal();

    // Short splash before the shell appears.
    let (booting, set_booting) = signal(true);
    set_timeout(
        move || set_booting.set(false),
        std::time::Duration::from_secs(2),
    );

    view! {
        <Show when=move || !booting.get() fallback=|| view! { <SplashScreen /> }>
            <Router is_authenticated=is_authenticated>
                <AppShell />
            </Router>
        </Show>
    }
}
