use pool_stats_config::RunContext;
use reqwest::Client as HttpClient;
use tracing::{
    debug,
    error,
};

/// Thin GET-only client for the distributed task API of one organization.
#[derive(Clone)]
pub struct AdoClient {
    http_client: HttpClient,
    base_url: String,
    token: String,
}

impl AdoClient {
    pub fn new(ctx: &RunContext) -> Self {
        Self::with_http_client(HttpClient::new(), ctx)
    }

    pub fn with_http_client(http_client: HttpClient, ctx: &RunContext) -> Self {
        Self {
            http_client,
            base_url: ctx.base_url.clone(),
            token: ctx.token.clone(),
        }
    }

    pub fn agents_url(&self, pool_id: &str) -> String {
        format!(
            "{}/_apis/distributedtask/pools/{}/agents?includeAssignedRequest=true",
            self.base_url, pool_id
        )
    }

    pub fn job_requests_url(&self, pool_id: &str) -> String {
        format!("{}/_apis/distributedtask/pools/{}/jobrequests", self.base_url, pool_id)
    }

    /// GETs `url` with basic auth (empty user, token as password) and returns
    /// the body.
    ///
    /// Never fails: transport and body errors are logged and yield an empty
    /// body, which callers then fail to decode. Non-success statuses still
    /// return whatever body the server sent.
    pub async fn fetch(&self, url: &str) -> Vec<u8> {
        let response = match self
            .http_client
            .get(url)
            .basic_auth("", Some(&self.token))
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!(url, %err, "The HTTP request failed");
                return Vec::new();
            }
        };

        let status = response.status();
        debug!(url, %status, "received response");

        match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(err) => {
                error!(url, %status, %err, "Failed to read response body");
                Vec::new()
            }
        }
    }
}
