//! Probe behaviour against a live local server.

mod common;

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::{Duration, Instant};

use grader_questions::{Expectation, ProbeClient, QuestionError, Target};
use reqwest::StatusCode;

fn client() -> ProbeClient {
    ProbeClient::new(Duration::from_secs(5), "grader-test").expect("client")
}

#[tokio::test]
async fn status_probe_passes_on_exact_code() {
    let base = common::spawn_server(common::correct_server);
    let target = Target::parse(&base).unwrap();

    let ok = client()
        .probe(target.endpoint("/", &[]), &Expectation::Status(StatusCode::OK))
        .await;
    assert!(ok.passed);
    assert!(ok.error.is_none());

    let gated = client()
        .probe(
            target.endpoint("/protected", &[]),
            &Expectation::Status(StatusCode::UNAUTHORIZED),
        )
        .await;
    assert!(gated.passed);
}

#[tokio::test]
async fn status_probe_fails_on_other_code_without_error() {
    let base = common::spawn_server(common::sloppy_server);
    let target = Target::parse(&base).unwrap();

    let result = client()
        .probe(
            target.endpoint("/protected", &[]),
            &Expectation::Status(StatusCode::UNAUTHORIZED),
        )
        .await;
    assert!(!result.passed);
    assert!(result.error.is_none());
}

#[tokio::test]
async fn body_probe_trims_surrounding_whitespace() {
    let base = common::spawn_server(common::correct_server);
    let target = Target::parse(&base).unwrap();

    let result = client()
        .probe(
            target.endpoint("/strings/reverse", &[("value", "abc".to_string())]),
            &Expectation::Body("cba".to_string()),
        )
        .await;
    assert!(result.passed);
}

#[tokio::test]
async fn body_probe_is_exact_match() {
    let base = common::spawn_server(common::correct_server);
    let target = Target::parse(&base).unwrap();

    let result = client()
        .probe(
            target.endpoint("/strings/upper", &[("value", "abc".to_string())]),
            &Expectation::Body("Abc".to_string()),
        )
        .await;
    assert!(!result.passed);
    assert!(result.error.is_none());
}

#[tokio::test]
async fn unreachable_host_is_a_transport_failure() {
    let target = Target::parse(common::UNREACHABLE).unwrap();

    let result = client()
        .probe(target.endpoint("/", &[]), &Expectation::Status(StatusCode::OK))
        .await;
    assert!(!result.passed);
    assert!(matches!(result.error, Some(QuestionError::Transport(_))));
}

/// Accept one connection, consume the request head, then hand the stream to
/// `respond`.
fn spawn_raw_server(respond: fn(TcpStream)) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind raw server");
    let port = listener.local_addr().expect("raw server addr").port();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => head.extend_from_slice(&buf[..n]),
                }
            }
            respond(stream);
        }
    });
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn truncated_body_is_a_body_read_failure() {
    let base = spawn_raw_server(|mut stream| {
        let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nabc");
        let _ = stream.flush();
    });
    let target = Target::parse(&base).unwrap();

    let result = client()
        .probe(
            target.endpoint("/strings/upper", &[("value", "abc".to_string())]),
            &Expectation::Body("ABC".to_string()),
        )
        .await;
    assert!(!result.passed);
    assert!(
        matches!(result.error, Some(QuestionError::BodyRead(_))),
        "{:?}",
        result.error
    );
}

#[tokio::test]
async fn silent_server_times_out_as_transport_failure() {
    let base = spawn_raw_server(|stream| {
        std::thread::sleep(Duration::from_secs(5));
        drop(stream);
    });
    let target = Target::parse(&base).unwrap();
    let client = ProbeClient::new(Duration::from_millis(300), "grader-test").expect("client");

    let started = Instant::now();
    let result = client
        .probe(target.endpoint("/", &[]), &Expectation::Status(StatusCode::OK))
        .await;
    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(!result.passed);
    assert!(
        matches!(&result.error, Some(QuestionError::Transport(e)) if e.is_timeout()),
        "{:?}",
        result.error
    );
}
