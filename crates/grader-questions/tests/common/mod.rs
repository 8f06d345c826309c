//! In-process fake student server backed by `tiny_http`.

#![allow(dead_code)]

use std::collections::HashMap;

/// Maps a request path and its decoded query to `(status, body)`.
pub type Handler = fn(&str, &HashMap<String, String>) -> (u16, String);

/// Serve `handler` on a random local port until the test process exits.
///
/// Returns the base URL (`http://127.0.0.1:<port>`).
pub fn spawn_server(handler: Handler) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("fake server port");

    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let url = reqwest::Url::parse(&format!("http://127.0.0.1{}", request.url()))
                .expect("request url");
            let query: HashMap<String, String> = url.query_pairs().into_owned().collect();
            let (status, body) = handler(url.path(), &query);
            let _ = request.respond(tiny_http::Response::from_string(body).with_status_code(status));
        }
    });

    format!("http://127.0.0.1:{port}")
}

/// A server that implements the whole assignment correctly.
pub fn correct_server(path: &str, query: &HashMap<String, String>) -> (u16, String) {
    let value = query.get("value").cloned().unwrap_or_default();
    match path {
        "/" => (200, String::from("<h1>hello</h1>")),
        "/protected" => (401, String::from("unauthorized")),
        "/strings/upper" => (200, value.to_uppercase()),
        // Trailing whitespace must be ignored by the body comparison.
        "/strings/reverse" => (200, format!("{}\n", value.chars().rev().collect::<String>())),
        "/strings/concatenate" => {
            let times = query
                .get("times")
                .and_then(|t| t.parse::<usize>().ok())
                .unwrap_or(0);
            (200, value.repeat(times))
        }
        _ => (404, String::from("not found")),
    }
}

/// A server that is up but gets every strings endpoint wrong and leaves
/// `/protected` open.
pub fn sloppy_server(path: &str, query: &HashMap<String, String>) -> (u16, String) {
    let value = query.get("value").cloned().unwrap_or_default();
    match path {
        "/" | "/protected" => (200, String::from("welcome")),
        "/strings/upper" => (200, value),
        "/strings/reverse" => (500, String::from("boom")),
        "/strings/concatenate" => (200, value.repeat(6)),
        _ => (404, String::new()),
    }
}

/// Every request answers 503 with an empty body.
pub fn down_server(_path: &str, _query: &HashMap<String, String>) -> (u16, String) {
    (503, String::new())
}

/// A base URL nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";
