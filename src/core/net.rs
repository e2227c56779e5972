// src/core/net.rs
//
// Blocking HTTPS POST of a GWT-RPC body to the portal.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};

use crate::config::consts::{self, USER_AGENT};
use crate::config::options::EndpointOptions;
use crate::error::NetworkError;
use crate::search::Transport;

pub const GWT_CONTENT_TYPE: &str = "text/x-gwt-rpc; charset=UTF-8";

pub struct HttpTransport {
    client: Client,
    url: String,
    module_base: String,
    permutation: String,
}

impl HttpTransport {
    pub fn new(endpoint: &EndpointOptions) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(endpoint.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            url: endpoint.url.clone(),
            module_base: endpoint.module_base.clone(),
            permutation: endpoint.permutation.clone(),
        })
    }
}

impl Transport for HttpTransport {
    /// POST `body` and return the response text. Non-2xx is an error.
    fn post(&self, body: String) -> Result<String, NetworkError> {
        logd!("Net: POST {} ({} bytes)", self.url, body.len());
        let t = std::time::Instant::now();

        let resp = self
            .client
            .post(&self.url)
            .header(ACCEPT, "*/*")
            .header(ACCEPT_LANGUAGE, consts::ACCEPT_LANGUAGE)
            .header(CONTENT_TYPE, GWT_CONTENT_TYPE)
            .header("x-gwt-module-base", self.module_base.as_str())
            .header("x-gwt-permutation", self.permutation.as_str())
            .body(body)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            loge!("Net: HTTP {} from {}", status, self.url);
            return Err(NetworkError::Status(status.as_u16()));
        }

        let text = resp.text()?;
        logd!("Net: {} bytes in {:?}", text.len(), t.elapsed());
        Ok(text)
    }
}
