/// State shared by the gateway handlers.
///
/// Cloning is cheap: `reqwest::Client` keeps its connection pool behind an `Arc`.
#[derive(Clone)]
pub struct GatewayState {
    /// HTTP client used to reach the server. Redirects are not followed.
    pub http_client: reqwest::Client,
    /// Base URL of the server, e.g. `http://localhost:9090`.
    pub server_url: String,
}

impl GatewayState {
    pub fn new(http_client: reqwest::Client, server_url: impl Into<String>) -> Self {
        Self {
            http_client,
            server_url: server_url.into(),
        }
    }
}

/// Builds the client used to talk to the server.
pub fn setup_reqwest_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
}
