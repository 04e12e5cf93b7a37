use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use url::Url;

use crate::core::finals_index::FinalsIndex;
use crate::core::html_parser;
use crate::error::finals::FinalsError;
use crate::http::logging_middleware::LoggingMiddleware;
use crate::http::random_headers::browser_headers;

pub struct FinalsClient {
    client: ClientWithMiddleware,
    url: Url,
}

impl FinalsClient {
    pub fn new(finals_url: &str) -> Result<Self, FinalsError> {
        let client = Client::builder().default_headers(browser_headers()).build()?;
        Self::with_client(finals_url, client)
    }

    /// Uses a caller-built reqwest client; the logging middleware is still added.
    pub fn with_client(finals_url: &str, client: Client) -> Result<Self, FinalsError> {
        let url = Url::parse(finals_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FinalsError::new(&format!("unsupported finals URL: {}", url)));
        }

        let client = ClientBuilder::new(client).with(LoggingMiddleware).build();
        Ok(FinalsClient { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Downloads the finals page. Anything other than a 2xx reply is an error.
    pub async fn fetch_page(&self) -> Result<String, FinalsError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FinalsError::new(&format!("GET {} returned {}", self.url, status)));
        }
        let text = response.text().await?;
        log::info!("fetched {} bytes from {}", text.len(), self.url);
        Ok(text)
    }

    pub async fn get_finals(&self) -> Result<FinalsIndex, FinalsError> {
        let html = self.fetch_page().await?;
        let index = html_parser::parse_finals_page(&html)?;

        if log::log_enabled!(log::Level::Debug) {
            let entries: Vec<_> = index.entries().collect();
            log::debug!("finals index: {}", serde_json::to_string_pretty(&entries)?);
        }

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers a single request on a loopback port and returns its URL.
    async fn serve_once(status: &str, content_type: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(reply.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{}/finals-schedule", addr)
    }

    fn local_client(url: &str) -> FinalsClient {
        let client = Client::builder()
            .default_headers(browser_headers())
            .no_proxy()
            .build()
            .unwrap();
        FinalsClient::with_client(url, client).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_an_error() {
        let url = serve_once("404 Not Found", "text/html", "<h1>gone</h1>").await;
        let err = local_client(&url).fetch_page().await.unwrap_err();
        assert!(err.message.contains("404"), "{}", err.message);
    }

    #[tokio::test]
    async fn non_html_reply_is_rejected() {
        let url = serve_once("200 OK", "application/json", r#"{"finals":[]}"#).await;
        let err = local_client(&url).fetch_page().await.unwrap_err();
        assert!(err.message.contains("expected HTML"), "{}", err.message);
    }

    #[tokio::test]
    async fn html_reply_is_parsed_into_an_index() {
        let page = r#"<html><body><h2>Monday</h2><table class="footable"><tbody>
            <tr><td>10:00 a.m.</td><td>Tues/Thurs (TR)</td><td>8:00am</td></tr>
        </tbody></table></body></html>"#;
        let url = serve_once("200 OK", "text/html; charset=UTF-8", page).await;
        let index = local_client(&url).get_finals().await.unwrap();
        assert_eq!(index.lookup("10:00 a.m.", "TR"), Some(("Monday", "8:00am")));
    }

    #[test]
    fn rejects_bad_urls() {
        assert!(FinalsClient::new("not a url").is_err());
        assert!(FinalsClient::new("ftp://example.edu/finals").is_err());
    }

    #[test]
    fn accepts_default_url() {
        let client = FinalsClient::new(crate::config::FINALS_URL).unwrap();
        assert_eq!(client.url().host_str(), Some("www.unr.edu"));
    }
}
