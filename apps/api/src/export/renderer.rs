use async_trait::async_trait;
use reqwest::{multipart, Client};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::export::{DocumentRenderer, ExportOptions};

const CONVERT_PATH: &str = "/forms/chromium/convert/html";

/// Renders HTML through a headless-Chromium conversion service (Gotenberg-compatible
/// `/forms/chromium/convert/html` form API).
pub struct HttpPdfRenderer {
    client: Client,
    base_url: String,
}

impl HttpPdfRenderer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn form(html: &str, options: &ExportOptions) -> Result<multipart::Form, AppError> {
        let (width, height) = options.page_inches();
        let margin = format!("{:.4}", options.margin_inches());

        let index = multipart::Part::text(html.to_string())
            .file_name("index.html")
            .mime_str("text/html")
            .map_err(|e| AppError::Render(format!("invalid form part: {e}")))?;

        Ok(multipart::Form::new()
            .part("files", index)
            .text("paperWidth", format!("{width:.4}"))
            .text("paperHeight", format!("{height:.4}"))
            .text("marginTop", margin.clone())
            .text("marginBottom", margin.clone())
            .text("marginLeft", margin.clone())
            .text("marginRight", margin)
            .text("landscape", options.landscape.to_string())
            .text("printBackground", "true"))
    }
}

#[async_trait]
impl DocumentRenderer for HttpPdfRenderer {
    async fn render(&self, html: &str, options: &ExportOptions) -> Result<Vec<u8>, AppError> {
        let url = format!("{}{}", self.base_url, CONVERT_PATH);

        let response = self
            .client
            .post(url)
            .timeout(options.timeout)
            .multipart(Self::form(html, options)?)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("PDF render timed out after {:?}", options.timeout);
                    AppError::Render(format!("timed out after {:?}", options.timeout))
                } else {
                    warn!("PDF renderer unreachable: {e}");
                    AppError::Render(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("PDF renderer returned {status}: {body}");
            return Err(AppError::Render(format!("renderer returned {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Render(format!("failed to read PDF body: {e}")))?;

        info!("Rendered PDF ({} bytes)", bytes.len());
        Ok(bytes.to_vec())
    }
}
