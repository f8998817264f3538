use serde_json::json;

use super::*;

#[test]
fn coordinate_from_numbers() {
    let record = json!({ "Latitud": -33.45, "Longitud": -70.66 });
    let c = station_coordinate(&record).expect("coordinate");
    assert!((c.lat() - -33.45).abs() < 1e-12);
    assert!((c.lng() - -70.66).abs() < 1e-12);
}

#[test]
fn coordinate_from_comma_decimal_strings() {
    let record = json!({ "Latitud": " -33,4489 ", "Longitud": "-70,6693" });
    let c = station_coordinate(&record).expect("coordinate");
    assert!((c.lat() - -33.4489).abs() < 1e-12);
    assert!((c.lng() - -70.6693).abs() < 1e-12);
}

#[test]
fn coordinate_accepts_lowercase_keys() {
    let record = json!({ "latitud": "-33.1", "longitud": "-70.2" });
    assert!(station_coordinate(&record).is_some());
}

#[test]
fn coordinate_falls_back_when_capitalised_key_is_null() {
    let record = json!({ "Latitud": null, "latitud": "-33.1", "Longitud": -70.2 });
    assert!(station_coordinate(&record).is_some());
}

#[test]
fn coordinate_missing_or_malformed_is_none() {
    assert!(station_coordinate(&json!({ "Latitud": -33.1 })).is_none());
    assert!(station_coordinate(&json!({ "Latitud": "abc", "Longitud": -70.0 })).is_none());
    assert!(station_coordinate(&json!({ "Latitud": true, "Longitud": -70.0 })).is_none());
    assert!(station_coordinate(&json!({ "Latitud": "NaN", "Longitud": -70.0 })).is_none());
    assert!(station_coordinate(&json!({ "Latitud": 123.0, "Longitud": -70.0 })).is_none());
}

#[test]
fn coordinate_on_non_object_record_is_none() {
    assert!(station_coordinate(&json!("station")).is_none());
    assert!(station_coordinate(&json!(null)).is_none());
    assert!(station_coordinate(&json!([1, 2])).is_none());
}

#[test]
fn price_matches_product_case_insensitively() {
    let record = json!({
        "Prices": [
            { "Producto": "Diesel", "Precio": "950" },
            { "Producto": " GASOLINA 93 ", "Precio": " 1250 " }
        ]
    });
    assert_eq!(station_price(&record, Product::Gasoline93), Some(1250));
    assert_eq!(station_price(&record, Product::Diesel), Some(950));
    assert_eq!(station_price(&record, Product::Kerosene), None);
}

#[test]
fn price_accepts_json_integer() {
    let record = json!({ "Prices": [{ "Producto": "Kerosene", "Precio": 800 }] });
    assert_eq!(station_price(&record, Product::Kerosene), Some(800));
}

#[test]
fn unusable_price_on_matched_entry_is_none() {
    for precio in [json!("n/a"), json!(null), json!("12.5"), json!(12.5), json!([])] {
        let record = json!({ "Prices": [{ "Producto": "Diesel", "Precio": precio }] });
        assert_eq!(station_price(&record, Product::Diesel), None, "precio={precio}");
    }
    let missing = json!({ "Prices": [{ "Producto": "Diesel" }] });
    assert_eq!(station_price(&missing, Product::Diesel), None);
}

#[test]
fn first_matching_entry_decides_price() {
    let record = json!({
        "Prices": [
            { "Producto": "Diesel", "Precio": "" },
            { "Producto": "Diesel", "Precio": "900" }
        ]
    });
    assert_eq!(station_price(&record, Product::Diesel), None);
}

#[test]
fn price_list_of_wrong_shape_is_none() {
    assert_eq!(station_price(&json!({ "Prices": "Diesel" }), Product::Diesel), None);
    assert_eq!(station_price(&json!({ "Prices": null }), Product::Diesel), None);
    assert_eq!(station_price(&json!({}), Product::Diesel), None);
}

#[test]
fn non_object_price_entries_are_skipped() {
    let record = json!({
        "Prices": ["Diesel", 42, null, { "Producto": "Diesel", "Precio": "910" }]
    });
    assert_eq!(station_price(&record, Product::Diesel), Some(910));
}

#[test]
fn store_present_when_any_field_non_blank() {
    let record = json!({ "Tienda": { "CodigoTienda": "", "NombreTienda": "Pronto", "Tipo": null } });
    assert!(has_store(&record));

    let numeric_code = json!({ "Tienda": { "CodigoTienda": 1234 } });
    assert!(has_store(&numeric_code));
}

#[test]
fn store_absent_when_fields_blank_or_placeholder() {
    assert!(!has_store(&json!({})));
    assert!(!has_store(&json!({ "Tienda": null })));
    assert!(!has_store(&json!({ "Tienda": "Pronto" })));
    assert!(!has_store(&json!({ "Tienda": {} })));
    assert!(!has_store(&json!({
        "Tienda": { "CodigoTienda": "  ", "NombreTienda": null, "Tipo": 0 }
    })));
    assert!(!has_store(&json!({ "Tienda": { "Tipo": false } })));
}

#[test]
fn value_as_text_renders_loose_values() {
    assert_eq!(value_as_text(None), "");
    assert_eq!(value_as_text(Some(&json!(null))), "");
    assert_eq!(value_as_text(Some(&json!("Copec"))), "Copec");
    assert_eq!(value_as_text(Some(&json!(10234))), "10234");
    assert_eq!(value_as_text(Some(&json!(0))), "");
    assert_eq!(value_as_text(Some(&json!([]))), "");
}
