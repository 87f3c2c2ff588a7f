use super::*;

const KATEGORI_BODY: &str = r#"{
    "kategori": [
        {
            "id": 1,
            "nama": "Alam",
            "kategori_image": "https://admin.lampunggo.my.id/storage/kategori/alam.jpg",
            "created_at": "2024-11-02T03:14:09.000000Z",
            "updated_at": "2024-11-02T03:14:09.000000Z"
        },
        {
            "id": 2,
            "nama": "Budaya",
            "kategori_image": "https://admin.lampunggo.my.id/storage/kategori/budaya.jpg",
            "created_at": "2024-11-02T03:14:09.000000Z",
            "updated_at": "2024-11-02T03:14:09.000000Z"
        }
    ]
}"#;

#[test]
fn kategori_list_unwraps_its_envelope() {
    let res: KategoriListResponse = serde_json::from_str(KATEGORI_BODY).unwrap();
    assert_eq!(res.kategori.len(), 2);
    assert_eq!(res.kategori[0].nama, "Alam");
    assert!(res.kategori[0].created_at.is_some());
}

#[test]
fn wisata_list_decodes_string_coordinates_and_favorite_flag() {
    let body = r#"{
        "wisata": [
            {
                "id": 42,
                "nama": "Danau Ranau",
                "kategori_id": 1,
                "image": "https://admin.lampunggo.my.id/storage/wisata/ranau.jpg",
                "deskripsi": "Danau vulkanik terbesar kedua di Sumatera.",
                "alamat": "Lumbok Seminung, Lampung Barat",
                "kordinat": "{\"lat\":-5.0417,\"lng\":104.4833}",
                "created_at": "2024-11-02T03:14:09.000000Z",
                "updated_at": "2024-11-02T03:14:09.000000Z",
                "kategori": {
                    "id": 1,
                    "nama": "Alam",
                    "kategori_image": "https://admin.lampunggo.my.id/storage/kategori/alam.jpg",
                    "created_at": "2024-11-02T03:14:09.000000Z",
                    "updated_at": "2024-11-02T03:14:09.000000Z"
                },
                "is_favorit": true
            }
        ]
    }"#;

    let res: WisataListResponse = serde_json::from_str(body).unwrap();
    let wisata = &res.wisata[0];
    assert_eq!(wisata.id, 42);
    assert_eq!(wisata.kordinat, Koordinat::new(-5.0417, 104.4833));
    assert_eq!(wisata.is_favorit, Some(true));
    assert_eq!(wisata.kategori_nama(), Some("Alam"));
    assert_eq!(wisata.kategori.as_ref().unwrap().id, wisata.kategori_id);
}

#[test]
fn wisata_detail_tolerates_missing_optional_fields() {
    let body = r#"{
        "wisata": {
            "id": 7,
            "nama": "Menara Siger",
            "kategori_id": 2,
            "image": "https://admin.lampunggo.my.id/storage/wisata/siger.jpg",
            "deskripsi": "Ikon Lampung di gerbang Sumatera.",
            "alamat": "Bakauheni, Lampung Selatan"
        }
    }"#;

    let res: WisataDetailResponse = serde_json::from_str(body).unwrap();
    assert_eq!(res.wisata.kordinat, Koordinat::default());
    assert!(res.wisata.kategori.is_none());
    assert_eq!(res.wisata.kategori_nama(), None);
    assert_eq!(res.wisata.is_favorit, None);
    assert!(res.wisata.created_at.is_none());
}

#[test]
fn auth_response_becomes_a_session() {
    let body = r#"{"token":"1|abcdef","user":{"name":"Sari","email":"sari@example.com"}}"#;
    let res: AuthResponse = serde_json::from_str(body).unwrap();
    let session = Session::from(res);
    assert_eq!(session.token, "1|abcdef");
    assert_eq!(session.user.name, "Sari");
}

#[test]
fn update_profile_request_serializes_only_set_fields() {
    let payload = UpdateProfileRequest {
        name: Some("Sari Dewi".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["name"], "Sari Dewi");
    assert!(!payload.is_empty());
    assert!(UpdateProfileRequest::default().is_empty());
}

#[test]
fn message_response_tolerates_an_empty_object() {
    let res: MessageResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(res.message, None);
}
