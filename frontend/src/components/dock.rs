//! Bottom navigation between the four main screens.

use leptos::prelude::*;

use super::icons::{CompassIcon, HomeIcon, MapIcon, UserIcon};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn Dock() -> impl IntoView {
    let router = use_router();
    let current = router.current_route();

    let tab_class = |active: bool| {
        if active {
            "active text-primary"
        } else {
            "text-base-content/60"
        }
    };

    view! {
        <div class="btm-nav btm-nav-sm z-50 shadow">
            <button
                class=move || tab_class(matches!(current.get(), AppRoute::Home))
                on:click=move |_| router.navigate_to(AppRoute::Home)
            >
                <HomeIcon class="h-5 w-5" />
                <span class="btm-nav-label text-xs">"Beranda"</span>
            </button>
            <button
                class=move || tab_class(matches!(current.get(), AppRoute::Explore(_)))
                on:click=move |_| router.navigate_to(AppRoute::Explore(None))
            >
                <CompassIcon class="h-5 w-5" />
                <span class="btm-nav-label text-xs">"Jelajah"</span>
            </button>
            <button
                class=move || tab_class(matches!(current.get(), AppRoute::Maps))
                on:click=move |_| router.navigate_to(AppRoute::Maps)
            >
                <MapIcon class="h-5 w-5" />
                <span class="btm-nav-label text-xs">"Peta"</span>
            </button>
            <button
                class=move || tab_class(matches!(current.get(), AppRoute::Profile))
                on:click=move |_| router.navigate_to(AppRoute::Profile)
            >
                <UserIcon class="h-5 w-5" />
                <span class="btm-nav-label text-xs">"Profil"</span>
            </button>
        </div>
    }
}
