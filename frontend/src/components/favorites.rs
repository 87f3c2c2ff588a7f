//! Favorites section (`/api/wisata/favorit`) with remove-in-place.

use lampunggo_shared::Wisata;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::destination_card::kategori_badge_class;
use super::icons::HeartSolidIcon;
use crate::api::WisataApi;
use crate::web::router::Link;
use crate::web::use_sequencer;

#[component]
pub fn FavoritList() -> impl IntoView {
    let api = expect_context::<WisataApi>();

    let (destinations, set_destinations) = signal(Vec::<Wisata>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    // Id of the favorite currently being removed, to disable its button.
    let (removing, set_removing) = signal(Option::<u32>::None);

    let sequencer = use_sequencer();
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let ticket = sequencer.begin();
            set_loading.set(true);
            spawn_local(async move {
                let result = api.fetch_favorites().await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(list) => set_destinations.set(list),
                    Err(_) => set_error.set(Some("Gagal memuat favorit".to_string())),
                }
                set_loading.set(false);
            });
        }
    });

    let stored_api = StoredValue::new(api);
    let remove_favorite = move |id: u32| {
        let api = stored_api.get_value();
        set_removing.set(Some(id));
        spawn_local(async move {
            if api.remove_from_favorites(id).await.is_ok() {
                set_destinations.update(|list| list.retain(|wisata| wisata.id != id));
            }
            set_removing.set(None);
        });
    };

    view! {
        <div class="my-8">
            <h3 class="text-2xl font-bold mb-4">"Favoritmu"</h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="grid py-5 grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {(0..3).map(|_| view! {
                            <div class="card bg-base-200 shadow-md rounded-lg overflow-hidden animate-pulse">
                                <div class="w-full h-48 bg-gray-300"></div>
                                <div class="card-body p-4">
                                    <div class="h-5 bg-gray-300 rounded w-3/4 mb-2"></div>
                                    <div class="h-4 bg-gray-200 rounded w-1/2"></div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                }
            >
                <Show
                    when=move || error.get().is_none()
                    fallback=move || view! {
                        <div class="text-center text-error">{move || error.get().unwrap_or_default()}</div>
                    }
                >
                    <Show
                        when=move || !destinations.get().is_empty()
                        fallback=|| view! {
                            <p class="text-base-content/60">
                                "Belum ada favorit. Tandai destinasi dengan ikon hati."
                            </p>
                        }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <For
                                each=move || destinations.get()
                                key=|wisata| wisata.id
                                children=move |wisata: Wisata| {
                                    let id = wisata.id;
                                    let badge = kategori_badge_class(wisata.kategori_id);
                                    let kategori_nama = wisata
                                        .kategori_nama()
                                        .unwrap_or("Tidak diketahui")
                                        .to_string();
                                    let remove_favorite = remove_favorite.clone();
                                    view! {
                                        <div class="card bg-base-200 shadow-md hover:shadow-xl transition-all duration-300 rounded-lg overflow-hidden">
                                            <figure>
                                                <img
                                                    src=wisata.image.clone()
                                                    alt=wisata.nama.clone()
                                                    class="w-full h-48 object-cover"
                                                />
                                            </figure>
                                            <div class="card-body p-4">
                                                <h2 class="card-title text-lg font-semibold">{wisata.nama.clone()}</h2>
                                                <div class=format!("badge capitalize text-white {badge}")>
                                                    {kategori_nama}
                                                </div>
                                                <div class="card-actions justify-between items-center mt-auto">
                                                    <Link to=format!("/detail/{id}") class="btn btn-primary btn-sm">
                                                        "Jelajahi"
                                                    </Link>
                                                    <button
                                                        class="btn btn-ghost btn-sm text-red-500"
                                                        aria-label="Hapus dari Favorit"
                                                        disabled=move || removing.get() == Some(id)
                                                        on:click=move |_| remove_favorite(id)
                                                    >
                                                        <HeartSolidIcon class="w-6 h-6" />
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
