//! Category tiles section (`/api/kategori`), linking into explore.

use lampunggo_shared::Kategori;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::WisataApi;
use crate::web::router::Link;
use crate::web::use_sequencer;

#[component]
pub fn ExploreCategories() -> impl IntoView {
    let api = expect_context::<WisataApi>();

    let (categories, set_categories) = signal(Vec::<Kategori>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let sequencer = use_sequencer();
    Effect::new(move |_| {
        let api = api.clone();
        let ticket = sequencer.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = api.fetch_categories().await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(list) => set_categories.set(list),
                Err(_) => set_error.set(Some("Gagal memuat kategori. Coba lagi nanti.".to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div>
            <h3 class="text-2xl font-bold mb-4">"Jelajahi Kategori"</h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                        {(0..5).map(|_| view! {
                            <div class="relative rounded-lg overflow-hidden shadow-md animate-pulse bg-gray-200 h-28"></div>
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
                    <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                        <For
                            each=move || categories.get()
                            key=|kategori| kategori.id
                            children=move |kategori: Kategori| {
                                let target = format!("/explore?category={}", kategori.nama.to_lowercase());
                                view! {
                                    <div class="relative rounded-lg overflow-hidden shadow-md hover:shadow-lg transition-all duration-300">
                                        <Link to=target>
                                            <img
                                                src=kategori.kategori_image.clone()
                                                alt=kategori.nama.clone()
                                                class="w-full h-28 object-cover"
                                            />
                                            <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent flex items-end p-2">
                                                <h4 class="text-white font-medium text-base">
                                                    {kategori.nama.clone()}
                                                </h4>
                                            </div>
                                        </Link>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
