//! Folio RPC Server — JSON-RPC over stdin/stdout for headless driving.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"page.scroll", "params":{"scroll_y":750,"layout":{...}}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use folio::app::App;
use folio::logging;
use folio::rpc_handler::handle_method;
use folio::services::settings_engine::SettingsEngineTrait;

use serde_json::{json, Value};

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn send(out: &mut impl Write, response: &Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

/// Answers one request line. Returns `None` for blank lines.
fn respond(app: &Mutex<App>, rate_limiter: &mut RateLimiter, line: &str) -> Option<Value> {
    if line.trim().is_empty() {
        return None;
    }
    let response = match serde_json::from_str::<Value>(line) {
        Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        Ok(req) => {
            let id = req.get("id").cloned().unwrap_or(Value::Null);
            if !rate_limiter.check() {
                json!({"id": id, "error": "rate limit exceeded"})
            } else {
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));
                tracing::debug!(method, "rpc request");
                match handle_method(app, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => json!({"id": id, "error": err}),
                }
            }
        }
    };
    Some(response)
}

/// Serves requests from `input` until EOF or a write failure, then shuts
/// the app down.
fn serve(app: Mutex<App>, input: impl BufRead, out: &mut impl Write) {
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if send(out, &ready).is_ok() {
        let mut rate_limiter = RateLimiter::new(200);
        for line in input.lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            if let Some(response) = respond(&app, &mut rate_limiter, &line) {
                if send(out, &response).is_err() {
                    break;
                }
            }
        }
    }

    let mut app = match app.into_inner() {
        Ok(app) => app,
        Err(poisoned) => poisoned.into_inner(),
    };
    app.shutdown();
}

fn main() {
    let app = match App::new(None) {
        Ok(app) => {
            logging::init(&app.settings_engine.get_settings().logging.filter);
            app
        }
        Err(e) => {
            logging::init("folio=info");
            tracing::error!(error = %e, "failed to initialize Folio");
            std::process::exit(1);
        }
    };
    app.startup();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serve(Mutex::new(app), stdin.lock(), &mut out);
}
