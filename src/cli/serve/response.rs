//! HTTP response helpers.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::render::{Rendered, Status};
use crate::utils::mime::types::{HTML, PLAIN};

/// Respond with a rendered page: 200 when found, 404 with the not-found
/// page otherwise.
pub fn respond_page(request: Request, rendered: Rendered) -> Result<()> {
    let status = match rendered.status {
        Status::Found => 200,
        Status::NotFound => 404,
    };
    send(request, status, HTML, rendered.html.into_bytes())
}

/// Respond with an in-memory resource (stylesheet, sitemap, feed).
pub fn respond_static(request: Request, content_type: &'static str, body: &str) -> Result<()> {
    send(request, 200, content_type, body.as_bytes().to_vec())
}

/// Respond with a file from disk.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = crate::utils::mime::from_path(path);
    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }
    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send(request, 200, content_type, body)
}

pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    send(request, 405, PLAIN, b"405 Method Not Allowed".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send(request: Request, status: u16, content_type: &'static str, body: Vec<u8>) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, status, content_type);
    }
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).expect("static header is ASCII")
}
