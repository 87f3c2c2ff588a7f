use lampunggo_shared::{Kategori, Koordinat, Wisata};

use super::*;

fn kategori(id: u32, nama: &str) -> Kategori {
    Kategori {
        id,
        nama: nama.to_string(),
        kategori_image: String::new(),
        created_at: None,
        updated_at: None,
    }
}

fn wisata(id: u32, nama: &str, kat: Option<(u32, &str)>, deskripsi: &str, alamat: &str) -> Wisata {
    Wisata {
        id,
        nama: nama.to_string(),
        kategori_id: kat.map(|(kid, _)| kid).unwrap_or_default(),
        image: String::new(),
        deskripsi: deskripsi.to_string(),
        alamat: alamat.to_string(),
        kordinat: Koordinat::default(),
        created_at: None,
        updated_at: None,
        kategori: kat.map(|(kid, nama)| kategori(kid, nama)),
        is_favorit: None,
    }
}

fn sample() -> Vec<Wisata> {
    vec![
        wisata(
            1,
            "Danau Ranau",
            Some((1, "Alam")),
            "Danau vulkanik terbesar kedua di Sumatera",
            "Lumbok Seminung, Lampung Barat",
        ),
        wisata(
            2,
            "Menara Siger",
            Some((2, "Budaya")),
            "Ikon Lampung di gerbang Sumatera",
            "Bakauheni, Lampung Selatan",
        ),
        wisata(
            3,
            "Taman Nasional Way Kambas",
            Some((1, "Alam")),
            "Suaka gajah sumatera",
            "Labuhan Ratu, Lampung Timur",
        ),
        wisata(4, "Pantai Misterius", None, "Tanpa kategori", "Entah di mana"),
    ]
}

fn ids(list: &[Wisata]) -> Vec<u32> {
    list.iter().map(|w| w.id).collect()
}

#[test]
fn empty_filter_returns_everything() {
    let list = sample();
    let result = filter_wisata(&list, &WisataFilter::default());
    assert_eq!(ids(&result), vec![1, 2, 3, 4]);
}

#[test]
fn category_filter_is_exact_and_case_insensitive() {
    let list = sample();
    let filter = WisataFilter::by_kategori(Some("alam".to_string()));
    assert_eq!(ids(&filter_wisata(&list, &filter)), vec![1, 3]);

    let filter = WisataFilter::by_kategori(Some("ALAM".to_string()));
    assert_eq!(ids(&filter_wisata(&list, &filter)), vec![1, 3]);
}

#[test]
fn query_searches_name_description_and_address() {
    let list = sample();

    let by_name = WisataFilter {
        query: "siger".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&filter_wisata(&list, &by_name)), vec![2]);

    let by_description = WisataFilter {
        query: "gajah".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&filter_wisata(&list, &by_description)), vec![3]);

    let by_address = WisataFilter {
        query: "bakauheni".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&filter_wisata(&list, &by_address)), vec![2]);
}

#[test]
fn category_and_query_intersect() {
    let list = sample();
    let filter = WisataFilter {
        kategori: Some("Alam".to_string()),
        query: "danau".to_string(),
    };
    assert_eq!(ids(&filter_wisata(&list, &filter)), vec![1]);
}

#[test]
fn clearing_the_filter_restores_the_full_list() {
    let list = sample();
    let mut filter = WisataFilter {
        kategori: Some("Alam".to_string()),
        query: "danau".to_string(),
    };
    assert_eq!(filter_wisata(&list, &filter).len(), 1);

    filter.kategori = None;
    filter.query.clear();
    assert!(filter.is_empty());
    assert_eq!(filter_wisata(&list, &filter).len(), list.len());
}

#[test]
fn a_record_without_embedded_category_never_matches_a_category_filter() {
    let list = sample();
    let unknown = WisataFilter::by_kategori(Some("Kuliner".to_string()));
    assert!(filter_wisata(&list, &unknown).is_empty());

    // Not even an empty wanted name matches the category-less record.
    let empty = WisataFilter::by_kategori(Some(String::new()));
    assert!(filter_wisata(&list, &empty).is_empty());
}
