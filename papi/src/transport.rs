//! reqwest-based HTTP transport.

use std::collections::BTreeMap;

use pcommon::BoxFuture;
use reqwest::{Client, RequestBuilder};

use crate::{ApiError, HostAuth, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    auth: HostAuth,
}

impl ReqwestTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            auth: HostAuth::None,
        }
    }

    pub fn with_auth(mut self, auth: HostAuth) -> Self {
        self.auth = auth;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            HostAuth::None => builder,
            HostAuth::Cookie(cookie) => builder.header("Cookie", cookie.expose()),
            HostAuth::Bearer(token) => builder.bearer_auth(token.expose()),
        }
    }

    fn request_builder(&self, request: &HttpRequest) -> RequestBuilder {
        let url = self.endpoint(&request.path);
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        self.apply_auth(builder)
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, ApiError>> {
        Box::pin(async move {
            let response = self.request_builder(&request).send().await.map_err(|err| {
                if err.is_timeout() {
                    ApiError::transport(format!("request timed out: {err}"))
                } else {
                    ApiError::transport(err.to_string())
                }
            })?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_ascii_lowercase(), value.to_string()))
                })
                .collect::<BTreeMap<_, _>>();
            let body = response
                .text()
                .await
                .map_err(|err| ApiError::transport(err.to_string()))?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path_with_single_slash() {
        let transport = ReqwestTransport::new(Client::new(), "https://tenant.example.com/");
        assert_eq!(
            transport.endpoint("/api/v1/csrf-token"),
            "https://tenant.example.com/api/v1/csrf-token"
        );

        let transport = ReqwestTransport::new(Client::new(), "https://tenant.example.com");
        assert_eq!(
            transport.endpoint("api/v1/assistants"),
            "https://tenant.example.com/api/v1/assistants"
        );
    }

    #[test]
    fn post_body_is_sent_as_json_with_host_credentials() {
        let transport = ReqwestTransport::new(Client::new(), "https://tenant.example.com")
            .with_auth(HostAuth::cookie("session=abc"));
        let request = HttpRequest::post("/api/v1/assistants/a1/threads", serde_json::json!({"name": "t"}));

        let built = transport
            .request_builder(&request)
            .build()
            .expect("request should build");

        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(
            built.url().as_str(),
            "https://tenant.example.com/api/v1/assistants/a1/threads"
        );
        assert_eq!(
            built.headers().get("content-type").and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(
            built.headers().get("cookie").and_then(|v| v.to_str().ok()),
            Some("session=abc")
        );
        let body = built.body().and_then(|body| body.as_bytes()).expect("body bytes");
        assert_eq!(body, br#"{"name":"t"}"#);
    }

    #[test]
    fn get_request_carries_no_body() {
        let transport = ReqwestTransport::new(Client::new(), "https://tenant.example.com");
        let built = transport
            .request_builder(&HttpRequest::get("/api/v1/csrf-token"))
            .build()
            .expect("request should build");

        assert!(built.body().is_none());
        assert!(built.headers().get("content-type").is_none());
    }
}
