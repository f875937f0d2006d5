//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现，接到核心库的 `HttpClient` 接口上。

use bus_admin::error::{AdminError, AdminResult};
use bus_admin::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use gloo_net::http::{Request, RequestBuilder};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlooHttpClient;

impl GlooHttpClient {
    fn builder(req: &HttpRequest) -> RequestBuilder {
        match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Put => Request::put(&req.url),
            HttpMethod::Delete => Request::delete(&req.url),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> AdminResult<HttpResponse> {
        let mut builder = Self::builder(&req);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| AdminError::Network(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AdminError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdminError::Decode(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
