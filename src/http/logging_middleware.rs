use std::time::Instant;

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Logs each request with its status and how long it took. Non-HTML replies
/// are turned into errors, since nothing downstream can parse them.
pub struct LoggingMiddleware;

fn is_html(content_type: Option<&str>) -> bool {
    content_type.map_or(true, |ct| ct.starts_with("text/html") || ct.starts_with("application/xhtml"))
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().to_string();
        let started = Instant::now();

        let response = match next.run(req, extensions).await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("{} {} failed after {:?}: {}", method, url, started.elapsed(), err);
                return Err(err);
            }
        };

        log::debug!("{} {} -> {} in {:?}", method, url, response.status(), started.elapsed());

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok());
        if response.status().is_success() && !is_html(content_type) {
            let message = format!("{} returned {:?}, expected HTML", url, content_type);
            return Err(reqwest_middleware::Error::Middleware(anyhow::anyhow!(message)));
        }

        Ok(response)
    }
}
