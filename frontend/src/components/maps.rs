//! Region map screen.
//!
//! Tiles come from OpenStreetMap's public embed, consumed read-only; the
//! destination list below links each point out to an external route planner.

use lampunggo_shared::{Koordinat, Wisata};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::MapPinIcon;
use crate::api::WisataApi;
use crate::web::router::Link;
use crate::web::use_sequencer;

const OSM_EMBED_URL: &str = "https://www.openstreetmap.org/export/embed.html";

/// Center of the Lampung region.
const LAMPUNG_CENTER: Koordinat = Koordinat::new(-5.3, 105.2);

/// Embed viewport around a point, `span` degrees in each direction, with a
/// marker on the point itself.
pub(super) fn embed_url(point: &Koordinat, span: f64) -> String {
    format!(
        "{OSM_EMBED_URL}?bbox={:.4}%2C{:.4}%2C{:.4}%2C{:.4}&layer=mapnik&marker={:.4}%2C{:.4}",
        point.lng - span,
        point.lat - span,
        point.lng + span,
        point.lat + span,
        point.lat,
        point.lng
    )
}

/// External route planner for a point.
pub(super) fn route_url(point: &Koordinat) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        point.lat, point.lng
    )
}

#[component]
pub fn MapsPage() -> impl IntoView {
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
            let result = api.fetch_destinations().await;
            if !ticket.is_current() {
                return;
            }
            match result {
                Ok(list) => set_destinations.set(list),
                Err(_) => set_error.set(Some("Gagal memuat peta wisata".to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-base-100 p-4 pb-24">
            <h3 class="text-3xl font-extrabold mb-6 text-accent">"Peta Wisata Lampung"</h3>
            <div class="card bg-base-200 shadow-xl rounded-xl overflow-hidden mb-6">
                <div class="h-96 w-full">
                    <iframe
                        src=embed_url(&LAMPUNG_CENTER, 1.2)
                        title="Peta Lampung"
                        class="w-full h-full border-0"
                    ></iframe>
                </div>
                <div class="p-2 text-xs text-base-content/60">
                    "© OpenStreetMap contributors"
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="text-center text-error mb-4">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="space-y-2">
                        {(0..4).map(|_| view! {
                            <div class="h-16 bg-base-200 rounded-lg animate-pulse"></div>
                        }).collect_view()}
                    </div>
                }
            >
                <div class="space-y-2">
                    <For
                        each=move || destinations.get()
                        key=|wisata| wisata.id
                        children=move |wisata: Wisata| {
                            let route = route_url(&wisata.kordinat);
                            view! {
                                <div class="flex items-center gap-3 bg-base-200 rounded-lg p-3 shadow-sm">
                                    <MapPinIcon class="h-6 w-6 text-primary shrink-0" />
                                    <div class="grow min-w-0">
                                        <h4 class="font-semibold truncate">{wisata.nama.clone()}</h4>
                                        <p class="text-sm text-base-content/60 truncate">
                                            {wisata.alamat.clone()}
                                        </p>
                                    </div>
                                    <a
                                        href=route
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="btn btn-success btn-sm text-white"
                                    >
                                        "Rute"
                                    </a>
                                    <Link to=format!("/detail/{}", wisata.id) class="btn btn-primary btn-sm">
                                        "Lihat Detail"
                                    </Link>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
