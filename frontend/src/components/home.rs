//! Landing screen: greeting, search shortcut, popular destinations,
//! category tiles, favorites.

use leptos::prelude::*;

use super::categories::ExploreCategories;
use super::favorites::FavoritList;
use super::icons::SearchIcon;
use super::popular::PopularDestinations;
use crate::auth::use_auth;
use crate::web::router::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth_ctx = use_auth();
    let navigate = use_navigate();

    let greeting = move || format!("Halo, {}!", auth_ctx.state.get().display_name());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // The explore screen owns the actual filtering.
        navigate("/explore");
    };

    view! {
        <div class="p-4 pb-24 space-y-8">
            <div>
                <h2 class="text-2xl font-bold mb-4">{greeting}</h2>
                <form on:submit=on_search>
                    <label class="input input-bordered flex items-center gap-2 w-full max-w-md">
                        <SearchIcon class="h-4 w-4 opacity-50" />
                        <input
                            type="search"
                            class="grow"
                            placeholder="Cari destinasi atau kategori..."
                        />
                    </label>
                </form>
            </div>

            <PopularDestinations />
            <ExploreCategories />
            <FavoritList />
        </div>
    }
}
