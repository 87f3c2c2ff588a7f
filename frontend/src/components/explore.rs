//! Explore screen: the full catalogue with category chips and free-text
//! search, both applied through `filter::filter_wisata`.

use lampunggo_shared::{Kategori, Wisata};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::destination_card::WisataCard;
use super::icons::SearchIcon;
use crate::api::WisataApi;
use crate::filter::{WisataFilter, filter_wisata};
use crate::web::use_sequencer;

#[component]
pub fn ExplorePage(initial_kategori: Option<String>) -> impl IntoView {
    let api = expect_context::<WisataApi>();

    let (categories, set_categories) = signal(Vec::<Kategori>::new());
    let (destinations, set_destinations) = signal(Vec::<Wisata>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (filter, set_filter) = signal(WisataFilter::by_kategori(initial_kategori));

    let sequencer = use_sequencer();
    Effect::new(move |_| {
        let api = api.clone();
        let ticket = sequencer.begin();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let kategori = api.fetch_categories().await;
            let wisata = api.fetch_destinations().await;
            if !ticket.is_current() {
                return;
            }
            match (kategori, wisata) {
                (Ok(k), Ok(w)) => {
                    set_categories.set(k);
                    set_destinations.set(w);
                }
                _ => set_error.set(Some("Gagal memuat kategori & wisata".to_string())),
            }
            set_loading.set(false);
        });
    });

    let visible = move || filter_wisata(&destinations.get(), &filter.get());

    // A chip toggles its category on and off.
    let toggle_kategori = move |nama: String| {
        set_filter.update(|f| {
            f.kategori = match &f.kategori {
                Some(current) if current.eq_ignore_ascii_case(&nama) => None,
                _ => Some(nama),
            };
        });
    };

    let chip_class = move |nama: &str| {
        let selected = filter.with(|f| {
            f.kategori
                .as_deref()
                .is_some_and(|current| current.eq_ignore_ascii_case(nama))
        });
        if selected {
            "btn btn-sm btn-primary"
        } else {
            "btn btn-sm btn-outline"
        }
    };

    view! {
        <div class="min-h-screen bg-base-100 p-4 pb-24">
            <div class="mb-6">
                <label class="input input-bordered input-primary flex items-center gap-2 w-full max-w-md shadow-md">
                    <SearchIcon class="h-4 w-4 opacity-50" />
                    <input
                        type="search"
                        class="grow"
                        placeholder="Cari destinasi atau kategori..."
                        prop:value=move || filter.get().query
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_filter.update(|f| f.query = value);
                        }
                    />
                </label>
            </div>

            <div class="flex flex-wrap gap-2 mb-6">
                <button
                    class=move || {
                        if filter.with(|f| f.kategori.is_none()) {
                            "btn btn-sm btn-primary"
                        } else {
                            "btn btn-sm btn-outline"
                        }
                    }
                    on:click=move |_| set_filter.update(|f| f.kategori = None)
                >
                    "Semua"
                </button>
                <For
                    each=move || categories.get()
                    key=|kategori| kategori.id
                    children=move |kategori: Kategori| {
                        let nama = kategori.nama.clone();
                        let chip_nama = nama.clone();
                        view! {
                            <button
                                class=move || chip_class(&chip_nama)
                                on:click=move |_| toggle_kategori(nama.clone())
                            >
                                {kategori.nama.clone()}
                            </button>
                        }
                    }
                />
            </div>

            <h3 class="text-3xl font-bold mb-6">"Destinasi"</h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {(0..4).map(|_| view! {
                            <div class="card bg-base-200 shadow-md rounded-lg overflow-hidden animate-pulse">
                                <div class="w-full h-48 bg-gray-300"></div>
                                <div class="card-body p-4">
                                    <div class="h-5 bg-gray-300 rounded w-3/4"></div>
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
                        when=move || !visible().is_empty()
                        fallback=|| view! {
                            <p class="text-base-content/60">"Tidak ada destinasi yang cocok."</p>
                        }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <For
                                each=visible
                                key=|wisata| wisata.id
                                children=move |wisata: Wisata| view! { <WisataCard wisata=wisata /> }
                            />
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
