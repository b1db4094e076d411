use reqwest::blocking::Client;
use url::Url;

use super::{read_body, view_url, ServiceSource};
use crate::core::config::Credentials;
use crate::error::Result;

/// The `view.py` JSON export with `_username`/`_secret` query authentication,
/// for sites that predate header authentication
pub struct LegacyViewApi {
    client: Client,
    site_url: Url,
    credentials: Credentials,
}

impl LegacyViewApi {
    pub fn new(client: Client, site_url: Url, credentials: Credentials) -> Self {
        Self {
            client,
            site_url,
            credentials,
        }
    }

    fn url(&self, host: &str) -> Result<Url> {
        let mut url = view_url(&self.site_url, host)?;
        {
            let mut query = url.query_pairs_mut();
            match &self.credentials {
                Credentials::Token(token) => {
                    query.append_pair("_secret", token);
                }
                Credentials::Automation { user, secret } => {
                    query.append_pair("_username", user);
                    query.append_pair("_secret", secret);
                }
            }
        }
        Ok(url)
    }
}

/// The URL with the `_secret` value masked, for logging
fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "_secret" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}

impl ServiceSource for LegacyViewApi {
    fn label(&self) -> &str {
        "view.py legacy"
    }

    fn fetch(&self, host: &str) -> Result<String> {
        let url = self.url(host)?;
        log::debug!("{}: GET {}", self.label(), redacted(&url));

        read_body(self.label(), self.client.get(url))
    }
}
