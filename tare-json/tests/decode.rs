use std::collections::BTreeMap;
use std::time::Duration;

use indoc::indoc;
use tare::{DecodeErrorKind, Tare};
use tare_testhelpers::test;

#[derive(Tare, Debug, PartialEq)]
struct Tls {
    cert: String,
    handshake: Duration,
}

#[derive(Tare, Debug, PartialEq)]
struct Server {
    name: String,
    port: u16,
    ratio: f64,
    enabled: bool,
    #[tare(rename = "TLS")]
    tls: Option<Tls>,
    tags: Vec<String>,
    limits: BTreeMap<String, u32>,
    ports: BTreeMap<u16, String>,
    #[tare(skip)]
    cache: Vec<u8>,
}

#[test]
fn fills_structs_maps_and_sequences() {
    let server: Server = tare_json::from_str(indoc! {r#"
        {
            "name": "edge",
            "port": 8443,
            "ratio": 0.5,
            "enabled": true,
            "TLS": { "cert": "edge.pem", "handshake": "2s" },
            "tags": ["a", "b"],
            "limits": { "conn": 100 },
            "ports": { "80": "http" }
        }
    "#})
    .unwrap();

    assert_eq!(server.name, "edge");
    assert_eq!(server.port, 8443);
    assert_eq!(server.ratio, 0.5);
    assert!(server.enabled);
    assert_eq!(
        server.tls,
        Some(Tls {
            cert: "edge.pem".to_string(),
            handshake: Duration::from_secs(2),
        })
    );
    assert_eq!(server.tags, ["a", "b"]);
    assert_eq!(server.limits, BTreeMap::from([("conn".to_string(), 100)]));
    assert_eq!(server.ports, BTreeMap::from([(80, "http".to_string())]));
}

#[test]
fn durations_accept_nanosecond_counts() {
    let server: Server =
        tare_json::from_str(r#"{"TLS": {"cert": "a", "handshake": 1500000000}}"#).unwrap();
    assert_eq!(
        server.tls.map(|t| t.handshake),
        Some(Duration::from_millis(1500))
    );

    let err = tare_json::from_str::<Server>(r#"{"TLS": {"handshake": 1.5}}"#).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"expected integer nanoseconds, found number at /TLS/handshake"
    );
}

#[test]
fn keys_match_ignoring_case() {
    let server: Server = tare_json::from_str(r#"{"NAME": "loud", "tls": {"Cert": "x"}}"#).unwrap();
    assert_eq!(server.name, "loud");
    assert_eq!(server.tls.map(|t| t.cert).as_deref(), Some("x"));
}

#[test]
fn unknown_and_skipped_keys_are_ignored() {
    let server: Server =
        tare_json::from_str(r#"{"name": "a", "color": "blue", "cache": [1, 2]}"#).unwrap();
    assert_eq!(server.name, "a");
    assert!(server.cache.is_empty());
}

#[test]
fn null_clears_options_only() {
    let server: Server = tare_json::from_str(r#"{"TLS": null, "name": null}"#).unwrap();
    assert_eq!(server.tls, None);
    assert_eq!(server.name, "");
}

#[test]
fn mismatch_reports_pointer() {
    let err = tare_json::from_str::<Server>(r#"{"tags": ["ok", 1]}"#).unwrap_err();
    assert_eq!(err.pointer, "/tags/1");
    insta::assert_snapshot!(err.to_string(), @"expected string, found number at /tags/1");
}

#[test]
fn container_mismatch() {
    let err = tare_json::from_str::<Server>(r#"{"limits": [1]}"#).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected map, found array at /limits");
}

#[test]
fn invalid_map_key() {
    let err = tare_json::from_str::<Server>(r#"{"ports": {"http": "x"}}"#).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::InvalidKey { .. }));
    insta::assert_snapshot!(
        err.to_string(),
        @r#"invalid map key "http": invalid digit found in string at /ports/http"#
    );
}

#[test]
fn syntax_error() {
    let err = tare_json::from_str::<Server>("{").unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::Syntax(_)));
    assert!(err.pointer.is_empty());
}

#[test]
fn scalar_error_inside_literal() {
    let err = tare_json::from_str::<Server>(r#"{"port": 70000}"#).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::Scalar(_)));
    assert_eq!(err.pointer, "/port");
}
