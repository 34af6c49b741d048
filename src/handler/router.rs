//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, guard checks,
//! and path dispatch to the API, health probes, or static assets.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};

use crate::api;
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

use super::static_files;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let raw_query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let is_head = method == Method::HEAD;

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let response = if let Some(early) = check_http_method(&method, state.config.http.enable_cors) {
        early
    } else if let Some(early) = check_body_size(&req, state.config.http.max_body_size) {
        early
    } else {
        route_request(&path, raw_query.as_deref(), &state, is_head).await
    };

    if state.config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.ip().to_string(),
            time: Local::now(),
            method: method.to_string(),
            path,
            query: raw_query,
            http_version: http_version.to_string(),
            status: response.status().as_u16(),
            body_bytes: body_size(&response),
            request_time_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let header = req.headers().get("content-length")?;
    let Ok(size_str) = header.to_str() else {
        logger::log_warning("Content-Length header contains non-ASCII characters");
        return None;
    };

    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Ok(_) => None,
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
    }
}

/// Route request based on path and configuration
async fn route_request(
    path: &str,
    raw_query: Option<&str>,
    state: &Arc<AppState>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let routes = &state.config.routes;

    // Health probes answer before anything else
    if routes.health.enabled
        && (path == routes.health.liveness_path || path == routes.health.readiness_path)
    {
        return http::build_health_response("ok");
    }

    if routes.favicon_paths.iter().any(|p| path == p) {
        return static_files::serve_favicon(is_head).await;
    }

    if path == "/api" || path.starts_with("/api/") {
        return api::dispatch(path, raw_query, state).await;
    }

    if path == "/" {
        return static_files::serve_index(state, is_head).await;
    }

    http::build_404_response()
}

fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

fn body_size(response: &Response<Full<Bytes>>) -> usize {
    response
        .body()
        .size_hint()
        .exact()
        .and_then(|size| usize::try_from(size).ok())
        .unwrap_or(0)
}
