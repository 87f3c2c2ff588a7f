//! Popular destinations section (`/api/top-wisata`).

use lampunggo_shared::Wisata;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::destination_card::WisataCard;
use crate::api::WisataApi;
use crate::web::use_sequencer;

#[component]
pub fn PopularDestinations() -> impl IntoView {
    let api = expect_context::<WisataApi>();

    let (destinations, set_destinations) = signal(Vec::<Wisata>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let sequencer = use_sequencer();
    Effect::new(move |_| {
        let api = api.clone();
        let ticket = sequencer.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = api.fetch_top_destinations().await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(list) => set_destinations.set(list),
                Err(_) => set_error.set(Some("Gagal memuat destinasi populer".to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div>
            <h3 class="text-2xl font-bold mb-4">"Destinasi Populer"</h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {(0..6).map(|_| view! {
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
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || destinations.get()
                            key=|wisata| wisata.id
                            children=move |wisata: Wisata| view! { <WisataCard wisata=wisata /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
