// src/core/net.rs
// Blocking HTTPS GET for the scraper.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

pub fn fetch_html(url: &str) -> Result<String, ScrapeError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    logf!("Net: GET {url}");
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
    }

    let body = resp.bytes()?;
    logd!("Net: {} bytes from {url}", body.len());
    Ok(String::from_utf8_lossy(&body).into_owned())
}
