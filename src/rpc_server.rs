//! simbrowser RPC server: newline-delimited JSON over stdin/stdout.
//!
//! Request:  {"id":1, "method":"tab.navigate", "params":{"input":"wikipedia.org"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Event:    {"event":"state", "result":{...}} after a reload pulse completes.
//!
//! One task owns the `App`. It waits on either the next request line or the
//! next reload deadline, so state changes never overlap.

use std::time::Instant;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};

use simbrowser::app::App;
use simbrowser::rpc_handler::handle_method;

async fn emit(stdout: &mut Stdout, value: &Value) -> std::io::Result<()> {
    stdout.write_all(format!("{}\n", value).as_bytes()).await?;
    stdout.flush().await
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(d) => tokio::time::sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending().await,
    }
}

fn handle_line(app: &mut App, line: &str) -> Value {
    let req: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return json!({"id": null, "error": format!("parse error: {}", e)}),
    };

    let id = req.get("id").cloned().unwrap_or(Value::Null);
    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
    let params = req.get("params").cloned().unwrap_or(json!({}));

    match handle_method(app, method, &params) {
        Ok(val) => json!({"id": id, "result": val}),
        Err(err) => {
            log::warn!("{} failed: {}", method, err);
            json!({"id": id, "error": err.to_string()})
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::var("SIMBROWSER_CONFIG").ok();
    let mut app = match App::new(config_path) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    emit(
        &mut stdout,
        &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}),
    )
    .await?;
    log::info!("simbrowser-rpc ready");

    loop {
        let deadline = app.next_deadline();
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(l)) => l,
                    Ok(None) => break,
                    Err(e) => {
                        log::error!("stdin read failed: {}", e);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let response = handle_line(&mut app, &line);
                emit(&mut stdout, &response).await?;
            }
            _ = wait_for(deadline) => {
                if app.fire_due(Instant::now()) > 0 {
                    emit(&mut stdout, &json!({"event": "state", "result": app.snapshot()})).await?;
                }
            }
        }
    }

    log::info!("stdin closed, shutting down");
    Ok(())
}
