//! Request dispatch for one resource family.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use vitrine_auth::TokenStore;

use crate::error::{ApiError, ApiResult, classify_status};

/// HTTP dispatcher bound to one backend's base address.
///
/// Construct one per resource family. The token store is read when a
/// request is built, never at construction time, so a token set after the
/// dispatcher exists is picked up by the very next call. Requests are
/// single fires: no retry, no queueing, no batching. Timeouts are left to
/// the transport's defaults.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: Client,
    base: Url,
    tokens: TokenStore,
}

impl Dispatcher {
    pub fn new(base: Url, tokens: TokenStore) -> Self {
        Self {
            http: Client::new(),
            base,
            tokens,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.dispatch(Method::GET, path, None::<&()>).await?;
        decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.dispatch(Method::POST, path, Some(body)).await?;
        decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.dispatch(Method::PUT, path, Some(body)).await?;
        decode(response).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.dispatch(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    async fn dispatch<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Response> {
        debug!(%method, path, "dispatching request");

        let mut request = self.request(method.clone(), path)?;
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|error| {
            warn!(%method, path, %error, "request failed before a response arrived");
            ApiError::from(error)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let classified = classify_status(status, &body);
        warn!(%method, path, status = status.as_u16(), error = %classified, "request rejected");
        Err(classified)
    }

    /// Build the request for `path`, attaching the current bearer token when
    /// one is present and omitting the Authorization header entirely when
    /// none is.
    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let url = self
            .base
            .join(path)
            .map_err(|error| ApiError::unreachable(format!("invalid request path {path}: {error}")))?;

        let request = self.http.request(method, url);
        Ok(match self.tokens.current() {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json()
        .await
        .map_err(|error| ApiError::unreachable(format!("invalid response body: {error}")))
}
