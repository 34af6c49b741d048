//! Static asset serving: the demo page and favicon.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::http;
use crate::logger;

/// Embedded copy of the demo page, served when the on-disk copy is missing
const FALLBACK_INDEX: &str = include_str!("../../static/index.html");

const FAVICON_PATH: &str = "static/favicon.svg";

/// Serve the demo page from disk, falling back to the embedded copy
pub async fn serve_index(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    let html = match fs::read_to_string(&state.config.routes.index_file).await {
        Ok(content) => content,
        Err(_) => {
            logger::log_warning(&format!(
                "Failed to load {}, serving embedded page",
                state.config.routes.index_file
            ));
            FALLBACK_INDEX.to_string()
        }
    };
    http::build_html_response(html, &state.config.http, is_head)
}

/// Serve the favicon from disk, 404 when absent
pub async fn serve_favicon(is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(FAVICON_PATH).await {
        Ok(data) => http::build_file_response(data, "image/svg+xml", is_head),
        Err(_) => http::build_404_response(),
    }
}
