use std::net::{IpAddr, Ipv4Addr};

use axum::http::HeaderMap;

use axum_booking_api::{
    config::{AppConfig, parse_admin_ips},
    error::AppError,
    middleware::admin_gate::{check_access, resolve_caller_ip},
    services::admin_service::{parse_update_body, validate_update},
};

fn config(admin_ips: &str, admin_token: Option<&str>) -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".into(),
        host: "127.0.0.1".into(),
        port: 3000,
        admin_ips: parse_admin_ips(admin_ips),
        admin_token: admin_token.map(str::to_string),
        owner_phone: "7869072016".into(),
    }
}

fn peer() -> Option<IpAddr> {
    Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 9)))
}

#[test]
fn forwarded_for_takes_first_segment() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", " 203.0.113.7 , 10.0.0.1".parse().unwrap());
    headers.insert("x-real-ip", "198.51.100.2".parse().unwrap());
    assert_eq!(resolve_caller_ip(&headers, peer()), "203.0.113.7");
}

#[test]
fn blank_forwarded_for_falls_through_to_real_ip() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", "  ".parse().unwrap());
    headers.insert("x-real-ip", "198.51.100.2".parse().unwrap());
    assert_eq!(resolve_caller_ip(&headers, peer()), "198.51.100.2");
}

#[test]
fn peer_address_is_the_last_resort_before_unknown() {
    let headers = HeaderMap::new();
    assert_eq!(resolve_caller_ip(&headers, peer()), "10.0.0.9");
    assert_eq!(resolve_caller_ip(&headers, None), "unknown");
}

#[test]
fn ip_outside_allowlist_is_forbidden_even_with_a_good_token() {
    let config = config("203.0.113.7", Some("s3cret"));
    let result = check_access(&config, "10.0.0.9", Some("Bearer s3cret"));
    match result {
        Err(AppError::Forbidden { ip }) => assert_eq!(ip, "10.0.0.9"),
        other => panic!("expected Forbidden, got {other:?}"),
    }
}

#[test]
fn allowlisted_ip_with_exact_token_passes() {
    let config = config("203.0.113.7, 198.51.100.2", Some("s3cret"));
    assert!(check_access(&config, "198.51.100.2", Some("Bearer s3cret")).is_ok());
}

#[test]
fn configured_token_requires_the_header() {
    let config = config("", Some("s3cret"));
    assert!(matches!(
        check_access(&config, "10.0.0.9", None),
        Err(AppError::Unauthorized)
    ));
    assert!(matches!(
        check_access(&config, "10.0.0.9", Some("Bearer wrong")),
        Err(AppError::Unauthorized)
    ));
    // Scheme and spacing must match verbatim.
    assert!(matches!(
        check_access(&config, "10.0.0.9", Some("bearer s3cret")),
        Err(AppError::Unauthorized)
    ));
}

#[test]
fn unconfigured_gate_fails_open() {
    // Documented deployment caveat: no allowlist and no token means the
    // request proceeds to method dispatch unconditionally.
    let config = config("", None);
    assert!(check_access(&config, "anyone", None).is_ok());
}

#[test]
fn patch_body_accepts_object_and_string_encodings() {
    let object = br#"{"id":"4f9d24cc-30f7-4eb8-9866-ac9b46b7a21b","status":"confirmed"}"#;
    let parsed = parse_update_body(object).expect("object body");
    assert_eq!(parsed.status.as_deref(), Some("confirmed"));

    // The same payload arriving as a JSON-encoded string.
    let raw = serde_json::to_vec(&String::from_utf8(object.to_vec()).unwrap()).unwrap();
    let parsed = parse_update_body(&raw).expect("string body");
    assert_eq!(
        parsed.id.as_deref(),
        Some("4f9d24cc-30f7-4eb8-9866-ac9b46b7a21b")
    );
    assert_eq!(parsed.status.as_deref(), Some("confirmed"));
}

#[test]
fn empty_patch_body_reports_missing_fields_not_a_parse_error() {
    let parsed = parse_update_body(b"").expect("empty body decodes");
    match validate_update(&parsed) {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "id and status required"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[test]
fn malformed_patch_body_is_a_bad_request() {
    assert!(matches!(
        parse_update_body(b"{not json"),
        Err(AppError::BadRequest(_))
    ));
    // A string body whose contents are not JSON either.
    assert!(matches!(
        parse_update_body(br#""still not json""#),
        Err(AppError::BadRequest(_))
    ));
}

#[test]
fn update_requires_both_id_and_status() {
    for body in [
        br#"{"status":"confirmed"}"#.as_slice(),
        br#"{"id":"4f9d24cc-30f7-4eb8-9866-ac9b46b7a21b"}"#.as_slice(),
        br#"{"id":"  ","status":"confirmed"}"#.as_slice(),
    ] {
        let parsed = parse_update_body(body).expect("body decodes");
        match validate_update(&parsed) {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "id and status required"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }
}

#[test]
fn update_rejects_a_non_uuid_id() {
    let parsed = parse_update_body(br#"{"id":"42","status":"confirmed"}"#).expect("body decodes");
    match validate_update(&parsed) {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("invalid appointment id")),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}
