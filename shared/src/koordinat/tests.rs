use serde::Deserialize;

use super::*;

#[derive(Deserialize)]
struct Holder {
    #[serde(default)]
    kordinat: Koordinat,
}

#[test]
fn decodes_plain_object() {
    let k: Koordinat = serde_json::from_str(r#"{"lat":-5.0417,"lng":104.4833}"#).unwrap();
    assert_eq!(k, Koordinat::new(-5.0417, 104.4833));
}

#[test]
fn decodes_string_encoded_object() {
    let k: Koordinat =
        serde_json::from_str(r#""{\"lat\":-5.3986,\"lng\":105.2643}""#).unwrap();
    assert_eq!(k, Koordinat::new(-5.3986, 105.2643));
}

#[test]
fn decodes_stringified_numbers() {
    let k: Koordinat = serde_json::from_str(r#"{"lat":"-5.4171","lng":"105.2641"}"#).unwrap();
    assert_eq!(k, Koordinat::new(-5.4171, 105.2641));
}

#[test]
fn malformed_string_falls_back_to_origin() {
    let k: Koordinat = serde_json::from_str(r#""not a coordinate""#).unwrap();
    assert_eq!(k, Koordinat::default());
}

#[test]
fn unexpected_shapes_fall_back_to_origin() {
    for raw in ["12345", "[1,2]", "true", "null"] {
        let k: Koordinat = serde_json::from_str(raw).unwrap();
        assert_eq!(k, Koordinat::default(), "input: {raw}");
    }
}

#[test]
fn partial_object_defaults_the_missing_axis() {
    let k: Koordinat = serde_json::from_str(r#"{"lat":-4.9167}"#).unwrap();
    assert_eq!(k, Koordinat::new(-4.9167, 0.0));
}

#[test]
fn missing_field_defaults_to_origin() {
    let holder: Holder = serde_json::from_str("{}").unwrap();
    assert_eq!(holder.kordinat, Koordinat::default());
}

#[test]
fn valid_object_round_trips() {
    let original = Koordinat::new(-5.3, 105.2);
    let json = serde_json::to_string(&original).unwrap();
    let back: Koordinat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
}
