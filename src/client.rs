use crate::CliError;

static EXPLORER_ENDPOINT: &str = "https://blockchain.info";

pub struct BlockClient {
    endpoint: String,
    http: reqwest::Client,
}

impl Default for BlockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockClient {
    pub fn new() -> Self {
        Self::with_endpoint(EXPLORER_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /*
     * Fetch the block's raw serialization as a hex string
     * The hash is forwarded verbatim, the explorer rejects unknown ones
     */
    pub async fn fetch_raw_block(&self, block_hash: &str) -> Result<String, CliError> {
        let url = format!("{}/rawblock/{}?format=hex", self.endpoint, block_hash);

        tracing::debug!("Requesting {}", url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CliError::Network(format!(
                "the explorer answered HTTP {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}
