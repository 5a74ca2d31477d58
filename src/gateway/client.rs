use axum::{
    body::Body,
    http::{header, Method},
    response::Response,
};
use reqwest::RequestBuilder;

use crate::{
    gateway::{error::GatewayError, state::GatewayState},
    model::api::SHARER_ID_HEADER,
};

/// Forwards validated requests to the ShareIt server.
pub struct ServerClient<'a> {
    http_client: &'a reqwest::Client,
    server_url: &'a str,
}

impl<'a> ServerClient<'a> {
    pub fn new(state: &'a GatewayState) -> Self {
        Self {
            http_client: &state.http_client,
            server_url: &state.server_url,
        }
    }

    /// Starts a request to `path` on the server, on behalf of `user_id` when given.
    pub fn request(&self, method: Method, path: &str, user_id: Option<i32>) -> RequestBuilder {
        let request = self
            .http_client
            .request(method, format!("{}{}", self.server_url, path));

        match user_id {
            Some(user_id) => request.header(SHARER_ID_HEADER, user_id),
            None => request,
        }
    }

    /// Sends the request and relays the server's status, content type and body.
    ///
    /// # Returns
    /// - `Ok(Response)` - Whatever the server answered, including its error responses
    /// - `Err(GatewayError::UpstreamErr)` - The server could not be reached
    pub async fn forward(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let upstream = request.send().await?;

        let status = upstream.status();
        let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
        let body = upstream.bytes().await?;

        tracing::debug!("Server answered {}", status);

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        if let Some(content_type) = content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
        }

        Ok(response)
    }
}
