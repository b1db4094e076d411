use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use url::Url;

use super::{read_body, view_url, ServiceSource};
use crate::core::config::Credentials;
use crate::error::Result;

/// The `view.py` JSON export with header authentication (Check_MK 2.x)
pub struct ViewApi {
    client: Client,
    site_url: Url,
    credentials: Credentials,
}

impl ViewApi {
    pub fn new(client: Client, site_url: Url, credentials: Credentials) -> Self {
        Self {
            client,
            site_url,
            credentials,
        }
    }

    fn authorization(&self) -> String {
        match &self.credentials {
            Credentials::Token(token) => format!("Bearer {}", token),
            Credentials::Automation { user, secret } => format!("Bearer {} {}", user, secret),
        }
    }
}

impl ServiceSource for ViewApi {
    fn label(&self) -> &str {
        "view.py"
    }

    fn fetch(&self, host: &str) -> Result<String> {
        let url = view_url(&self.site_url, host)?;
        log::debug!("{}: GET {}", self.label(), url);

        let request = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.authorization());
        read_body(self.label(), request)
    }
}
