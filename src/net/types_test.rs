use super::*;

// =============================================================
// Token endpoint body
// =============================================================

#[test]
fn token_response_parses_access_token() {
    let body: TokenResponse =
        serde_json::from_str(r#"{"access_token":"abc.def.ghi","token_type":"bearer"}"#)
            .expect("token response");
    assert_eq!(body.access_token, "abc.def.ghi");
}

// =============================================================
// Product records
// =============================================================

#[test]
fn product_parses_catalog_fields() {
    let product: Product = serde_json::from_str(
        r#"{"id":7,"product_name":"Sourdough Loaf","price":6.5,"unit":"un","section":"Breads"}"#,
    )
    .expect("product");
    assert_eq!(product.id, 7);
    assert_eq!(product.product_name, "Sourdough Loaf");
    assert!((product.price - 6.5).abs() < f64::EPSILON);
    assert_eq!(product.unit, "un");
    assert_eq!(product.section, "Breads");
}

// =============================================================
// Roles
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).expect("json"), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::User).expect("json"), "\"user\"");
}

#[test]
fn role_rejects_unknown_values() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}
