use std::collections::BTreeMap;
use std::time::Duration;

use tare::Tare;
use tare_testhelpers::test;

#[derive(Tare, Debug, PartialEq, Clone)]
struct Listener {
    #[tare(default = "0.0.0.0")]
    host: String,
    #[tare(default = "80")]
    port: u16,
}

#[derive(Tare, Debug, PartialEq, Clone)]
struct Tls {
    #[tare(default = "cert.pem", unset = "walk")]
    cert: String,
    #[tare(default = "30s")]
    handshake: Duration,
}

#[derive(Tare, Debug, PartialEq, Clone)]
struct Config {
    #[tare(default = "8080", unset = "walk")]
    port: u16,
    #[tare(default = "[{}, {}]", unset = "walk")]
    listeners: Vec<Listener>,
    #[tare(default = "{}", unset = "walk")]
    tls: Option<Box<Tls>>,
    #[tare(default = r#"{"admin": {}}"#, unset = "walk")]
    named: BTreeMap<String, Listener>,
}

fn defaulted() -> Config {
    let mut config = Config::zero();
    tare::apply_defaults(&mut config).unwrap();
    config
}

#[test]
fn zero_instance_gets_everything() {
    let config = defaulted();
    let listener = Listener {
        host: "0.0.0.0".to_string(),
        port: 80,
    };

    assert_eq!(config.port, 8080);
    assert_eq!(config.listeners, [listener.clone(), listener.clone()]);
    assert_eq!(
        config.tls.as_deref(),
        Some(&Tls {
            cert: "cert.pem".to_string(),
            handshake: Duration::from_secs(30),
        })
    );
    assert_eq!(config.named["admin"], listener);
}

#[test]
fn application_is_idempotent() {
    let once = defaulted();
    let mut twice = once.clone();
    tare::apply_defaults(&mut twice).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn caller_values_are_kept() {
    let mut config = Config::zero();
    config.port = 9999;
    config.tls = Some(Box::new(Tls {
        cert: "mine.pem".to_string(),
        handshake: Duration::ZERO,
    }));
    tare::apply_defaults(&mut config).unwrap();

    assert_eq!(config.port, 9999);
    let tls = config.tls.as_deref().unwrap();
    assert_eq!(tls.cert, "mine.pem");
    // sub-fields of a caller-supplied value are still filled
    assert_eq!(tls.handshake, Duration::from_secs(30));
}

#[test]
fn remove_then_apply_restores_defaults() {
    let mut config = defaulted();
    tare::remove_defaults(&mut config).unwrap();

    assert_eq!(config.port, 0);
    assert_eq!(config.listeners.len(), 2);
    assert!(config.listeners.iter().all(tare::is_zero));
    assert_eq!(config.tls.as_deref().map(|t| t.cert.as_str()), Some(""));
    assert_eq!(config.named["admin"].port, 0);

    tare::apply_defaults(&mut config).unwrap();
    assert_eq!(config, defaulted());
}
