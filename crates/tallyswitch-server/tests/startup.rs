//! Listener binding and process startup.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Write;
use std::process::Command;
use std::time::Duration;

use tracing::Instrument;
use tracing_test::traced_test;

use tallyswitch_server::{app_state::AppState, router, server};

#[tokio::test]
async fn bind_fails_when_port_is_taken() {
    let held = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = held.local_addr().unwrap();

    let err = server::bind(addr).await.expect_err("port is in use");
    assert_eq!(err.client_code().as_str(), "BIND_FAILED");
}

#[tokio::test]
async fn bind_succeeds_on_free_port() {
    let listener = server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    assert_ne!(listener.local_addr().unwrap().port(), 0);
}

#[tokio::test]
#[traced_test]
async fn serve_logs_the_listening_port() {
    let listener = server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let app = router::build_router(AppState::default());

    // events are matched by the test's span, so the task must run inside it
    let handle = tokio::spawn(server::serve(listener, app).in_current_span());

    let expected = format!("server is running on port {port}");
    let mut logged = false;
    for _ in 0..100 {
        if logs_contain(&expected) {
            logged = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    handle.abort();

    assert!(logged, "missing startup line: {expected}");
}

#[test]
fn binary_exits_non_zero_when_port_is_taken() {
    let held = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = held.local_addr().unwrap();

    let mut cfg = tempfile::NamedTempFile::new().unwrap();
    write!(cfg, "version: 1\nserver:\n  listen: \"{addr}\"\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_tallyswitch-server"))
        .env("TALLYSWITCH_CONFIG", cfg.path())
        .env("RUST_LOG", "info")
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    let logs = format!(
        "{}{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(logs.contains("BIND_FAILED"), "unexpected output: {logs}");
    drop(held);
}
