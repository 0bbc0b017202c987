#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use p99spike_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "127.0.0.1:5000"
  delay_ms: 100 # the delay is fixed
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "127.0.0.1:5000");
}

#[test]
fn listen_override() {
    let ok = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 8080);
}

#[test]
fn rejects_invalid_listen() {
    let bad = r#"
version: 1
server:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_CONFIG");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn missing_file_yields_defaults() {
    let cfg = config::load_or_default("does-not-exist/p99spike.yaml").expect("defaults");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen_addr().unwrap().to_string(), "127.0.0.1:5000");
}

#[test]
fn load_from_file_requires_the_file() {
    let err = config::load_from_file("does-not-exist/p99spike.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
