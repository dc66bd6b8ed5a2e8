//! Static file server
//!
//! Serves a directory on a fixed local port and opens a browser tab at it.

use std::path::PathBuf;
use std::process::Command;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::error::AppError;

pub(crate) fn run(root: PathBuf, port: u16, open_browser: bool) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Serve(e.to_string()))?;
    runtime.block_on(serve(root, port, open_browser))
}

async fn serve(root: PathBuf, port: u16, open_browser: bool) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter("confbrowse=info,tower_http=debug")
        .with_writer(std::io::stderr)
        .init();

    let app = Router::new()
        .fallback_service(ServeDir::new(&root))
        .layer(TraceLayer::new_for_http());

    let addr = format!("127.0.0.1:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Serve(format!("bind {addr}: {e}")))?;

    let url = format!("http://localhost:{port}");
    println!("Serving at {url}");
    if open_browser {
        println!("Opening browser...");
        open_in_browser(&url);
    }

    info!("serving {} on {}", root.display(), addr);
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Serve(e.to_string()))
}

/// Best-effort: serving continues even when no opener is available.
fn open_in_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", "", url]).spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = Command::new("xdg-open").arg(url).spawn();

    if let Err(e) = result {
        eprintln!("Could not open browser: {e}");
    }
}
