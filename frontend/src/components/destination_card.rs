//! Destination card shared by the popular, favorites and explore lists.

use lampunggo_shared::Wisata;
use leptos::prelude::*;

use crate::web::router::Link;

/// Badge color per category id. The ids are the backend's seeded categories;
/// anything newer falls back to neutral gray.
pub fn kategori_badge_class(kategori_id: u32) -> &'static str {
    match kategori_id {
        1 => "bg-green-500",  // Alam
        2 => "bg-yellow-500", // Budaya
        3 => "bg-blue-500",   // Religi
        4 => "bg-red-500",    // Kuliner
        5 => "bg-purple-500", // Hiburan
        _ => "bg-gray-500",
    }
}

#[component]
pub fn WisataCard(wisata: Wisata) -> impl IntoView {
    let badge = kategori_badge_class(wisata.kategori_id);
    let kategori_nama = wisata
        .kategori_nama()
        .unwrap_or("Tidak diketahui")
        .to_string();

    view! {
        <div class="card bg-base-200 shadow-md hover:shadow-xl transition-all duration-300 rounded-lg overflow-hidden">
            <figure>
                <img src=wisata.image.clone() alt=wisata.nama.clone() class="w-full h-48 object-cover" />
            </figure>
            <div class="card-body p-4">
                <h2 class="card-title text-lg font-semibold">{wisata.nama.clone()}</h2>
                <div class=format!("badge capitalize text-white {badge}")>{kategori_nama}</div>
                <div class="card-actions justify-end mt-auto">
                    <Link to=format!("/detail/{}", wisata.id) class="btn btn-primary btn-sm">
                        "Jelajahi"
                    </Link>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::kategori_badge_class;

    #[test]
    fn seeded_ids_map_to_their_colors() {
        assert_eq!(kategori_badge_class(1), "bg-green-500");
        assert_eq!(kategori_badge_class(4), "bg-red-500");
    }

    #[test]
    fn unknown_ids_fall_back_to_gray() {
        for id in [0, 6, 99] {
            assert_eq!(kategori_badge_class(id), "bg-gray-500");
        }
    }
}
