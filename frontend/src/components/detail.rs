//! Destination detail screen: record by id, favorite toggle, location.

use lampunggo_shared::Wisata;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::destination_card::kategori_badge_class;
use super::icons::{ArrowLeftIcon, HeartOutlineIcon, HeartSolidIcon, MapPinIcon};
use super::maps::{embed_url, route_url};
use crate::api::WisataApi;
use crate::web::use_sequencer;

#[component]
pub fn DetailPage(id: u32) -> impl IntoView {
    let api = expect_context::<WisataApi>();

    let (wisata, set_wisata) = signal(Option::<Wisata>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_favorit, set_is_favorit) = signal(false);
    let (fav_loading, set_fav_loading) = signal(false);

    let sequencer = use_sequencer();
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let ticket = sequencer.begin();
            set_loading.set(true);
            spawn_local(async move {
                let result = api.fetch_destination_by_id(id).await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(record) => {
                        set_is_favorit.set(record.is_favorit.unwrap_or(false));
                        set_wisata.set(Some(record));
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        }
    });

    let stored_api = StoredValue::new(api);
    let toggle_favorite = move |_| {
        let Some(current) = wisata.get_untracked() else {
            return;
        };
        let api = stored_api.get_value();
        set_fav_loading.set(true);
        spawn_local(async move {
            let result = if is_favorit.get_untracked() {
                api.remove_from_favorites(current.id).await.map(|_| false)
            } else {
                api.add_to_favorites(current.id).await.map(|_| true)
            };
            if let Ok(now_favorit) = result {
                set_is_favorit.set(now_favorit);
            }
            set_fav_loading.set(false);
        });
    };

    let on_back = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    view! {
        <div class="min-h-screen bg-base-100 p-4 pb-24">
            <button on:click=on_back class="btn btn-ghost mb-4 gap-2">
                <ArrowLeftIcon class="h-4 w-4" />
                "Kembali"
            </button>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="text-center p-4">"Loading..."</div> }
            >
                <Show
                    when=move || error.get().is_none()
                    fallback=move || view! {
                        <div class="text-center p-4 text-error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    }
                >
                    {move || wisata.get().map(|record| {
                        let toggle_favorite = toggle_favorite.clone();
                        let badge = kategori_badge_class(record.kategori_id);
                        let kategori_nama = record
                            .kategori_nama()
                            .unwrap_or("Tidak diketahui")
                            .to_string();
                        let maps_link = format!(
                            "https://www.google.com/maps?q={},{}",
                            record.kordinat.lat, record.kordinat.lng
                        );
                        let map_embed = embed_url(&record.kordinat, 0.02);
                        let route = route_url(&record.kordinat);

                        view! {
                            <div class="card bg-base-200 shadow-xl">
                                <figure>
                                    <img
                                        src=record.image.clone()
                                        alt=record.nama.clone()
                                        class="w-full h-64 object-cover"
                                    />
                                </figure>
                                <div class="card-body">
                                    <h2 class="card-title text-2xl font-bold">{record.nama.clone()}</h2>
                                    <div class=format!("badge capitalize text-white {badge}")>
                                        {kategori_nama}
                                    </div>
                                    <p class="text-base mb-4">{record.deskripsi.clone()}</p>
                                    <div class="flex items-center gap-2 mb-4">
                                        <MapPinIcon class="w-6 h-6 text-gray-500 shrink-0" />
                                        <p class="text-sm">{record.alamat.clone()}</p>
                                    </div>
                                    <div class="card-actions justify-end">
                                        <a
                                            href=maps_link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="btn btn-primary btn-sm"
                                        >
                                            "Lihat di Maps"
                                        </a>
                                        <button
                                            class=move || {
                                                if is_favorit.get() {
                                                    "btn btn-ghost btn-sm text-red-500"
                                                } else {
                                                    "btn btn-ghost btn-sm text-gray-400"
                                                }
                                            }
                                            aria-label="Tambah ke Favorit"
                                            disabled=move || fav_loading.get()
                                            on:click=toggle_favorite
                                        >
                                            <Show
                                                when=move || is_favorit.get()
                                                fallback=|| view! { <HeartOutlineIcon class="w-6 h-6" /> }
                                            >
                                                <HeartSolidIcon class="w-6 h-6" />
                                            </Show>
                                        </button>
                                    </div>
                                </div>
                            </div>

                            <div class="mt-6">
                                <h3 class="font-semibold mb-2">"Lokasi di Peta"</h3>
                                <div class="rounded-xl overflow-hidden shadow border border-base-200 h-80">
                                    <iframe
                                        src=map_embed
                                        title=record.nama.clone()
                                        class="w-full h-full border-0"
                                    ></iframe>
                                </div>
                                <div class="flex justify-start mt-4">
                                    <a
                                        href=route
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="btn btn-success text-white btn-sm"
                                    >
                                        "Rute ke Lokasi"
                                    </a>
                                </div>
                            </div>
                        }
                    })}
                </Show>
            </Show>
        </div>
    }
}
