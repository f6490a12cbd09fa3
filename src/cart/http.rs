//! HTTP implementation of the cart gateway

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tracing::{debug, warn};

use super::gateway::{AddToCartRequest, CartError, CartGateway, CartSummary};

/// Talks to the storefront cart endpoint over HTTP/1. One connection per
/// request; the cart is hit at most once per click, so there is nothing for
/// a pool to amortize.
#[derive(Debug, Clone)]
pub struct HttpCartGateway {
    authority: String,
}

impl HttpCartGateway {
    /// `authority` is the storefront's `host:port`, e.g. `127.0.0.1:20570`.
    pub fn new(authority: impl Into<String>) -> Self {
        Self { authority: authority.into() }
    }
}

#[async_trait]
impl CartGateway for HttpCartGateway {
    async fn add_to_cart(&self, request: AddToCartRequest) -> Result<CartSummary, CartError> {
        let stream = TcpStream::connect(&self.authority)
            .await
            .map_err(|e| CartError::Transport(format!("connect {}: {}", self.authority, e)))?;
        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| CartError::Transport(format!("HTTP handshake failed: {}", e)))?;

        tokio::spawn(async move {
            if let Err(e) = conn.await {
                warn!("cart endpoint connection error: {}", e);
            }
        });

        let body = serde_json::to_vec(&request)?;
        let req = hyper::Request::builder()
            .method("POST")
            .uri("/cart/add.js")
            .header("Host", self.authority.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(Full::new(bytes::Bytes::from(body)))
            .map_err(|e| CartError::Transport(format!("failed to build request: {}", e)))?;

        let response = sender
            .send_request(req)
            .await
            .map_err(|e| CartError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        let payload = response
            .into_body()
            .collect()
            .await
            .map_err(|e| CartError::Transport(format!("failed to read response: {}", e)))?
            .to_bytes();

        if !status.is_success() {
            return Err(CartError::Endpoint {
                status: status.as_u16(),
                detail: String::from_utf8_lossy(&payload).into_owned(),
            });
        }

        let summary: CartSummary = serde_json::from_slice(&payload)?;
        debug!("cart add accepted, item_count={}", summary.item_count);
        Ok(summary)
    }
}
