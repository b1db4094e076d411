//! Retrieval of the service table from a Check_MK site.
//!
//! Two dialects of the same view endpoint are supported. [`ViewApi`] sends
//! credentials in an `Authorization` header and is tried first,
//! [`LegacyViewApi`] passes them as query parameters for older sites.

mod legacy;
mod view;

pub use legacy::LegacyViewApi;
pub use view::ViewApi;

use reqwest::blocking::{Client, RequestBuilder};
use url::Url;

use crate::core::config::ConnectionSettings;
use crate::error::Result;

const USER_AGENT: &str = concat!("check_cmk_services/", env!("CARGO_PKG_VERSION"));
const VIEW_PATH: &str = "check_mk/view.py";

/// A place the service table can be fetched from
pub trait ServiceSource {
    /// Short name shown in the status line, e.g. `view.py`
    fn label(&self) -> &str;

    /// Fetch the raw response body for `host`.
    ///
    /// Non-2xx responses still return their body; only transport failures are errors.
    fn fetch(&self, host: &str) -> Result<String>;
}

/// Build the blocking HTTP client shared by both sources
pub fn build_client(settings: &ConnectionSettings) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(settings.timeout)
        .danger_accept_invalid_certs(settings.insecure)
        .build()?;
    Ok(client)
}

/// Primary source first, fallback second
pub fn default_sources(settings: &ConnectionSettings) -> Result<Vec<Box<dyn ServiceSource>>> {
    let client = build_client(settings)?;
    Ok(vec![
        Box::new(ViewApi::new(
            client.clone(),
            settings.site_url.clone(),
            settings.credentials.clone(),
        )),
        Box::new(LegacyViewApi::new(
            client,
            settings.site_url.clone(),
            settings.credentials.clone(),
        )),
    ])
}

/// URL of the `host` view in JSON format
fn view_url(site_url: &Url, host: &str) -> Result<Url> {
    let mut url = site_url.join(VIEW_PATH)?;
    url.query_pairs_mut()
        .append_pair("view_name", "host")
        .append_pair("host", host)
        .append_pair("output_format", "json");
    Ok(url)
}

fn read_body(label: &str, request: RequestBuilder) -> Result<String> {
    let response = request.send()?;
    let status = response.status();
    let body = response.text()?;

    if status.is_success() {
        log::debug!("{}: HTTP {} ({} bytes)", label, status, body.len());
    } else {
        log::warn!("{}: HTTP {}", label, status);
    }
    Ok(body)
}
