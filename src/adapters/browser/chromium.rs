//! Headless Chromium page capture via the DevTools protocol.
//!
//! Every capture launches its own browser process and closes it before
//! returning, whatever the outcome. Launch, navigation and screenshot each
//! run under the navigation timeout.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::StreamExt;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::analyzer::PageMetadata;
use crate::ports::{CaptureError, PageCapture, PageCapturer};

const META_DESCRIPTION_JS: &str = r#"(() => {
  const el = document.querySelector('meta[name="description"]')
    || document.querySelector('meta[property="og:description"]');
  return el ? (el.getAttribute('content') || '') : '';
})()"#;

/// Browser settings for captures.
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub navigation_timeout: Duration,
    /// Explicit Chrome/Chromium binary; auto-detected when `None`.
    pub chrome_executable: Option<PathBuf>,
    /// Disables the Chrome sandbox (needed inside most containers).
    pub no_sandbox: bool,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 800,
            navigation_timeout: Duration::from_secs(30),
            chrome_executable: None,
            no_sandbox: false,
        }
    }
}

pub struct ChromiumCapturer {
    settings: CaptureSettings,
}

impl ChromiumCapturer {
    pub fn new(settings: CaptureSettings) -> Self {
        Self { settings }
    }

    fn browser_config(&self) -> Result<BrowserConfig, CaptureError> {
        let viewport = Viewport {
            width: self.settings.viewport_width,
            height: self.settings.viewport_height,
            device_scale_factor: None,
            emulating_mobile: false,
            is_landscape: false,
            has_touch: false,
        };
        let mut builder = BrowserConfig::builder()
            .window_size(self.settings.viewport_width, self.settings.viewport_height)
            .viewport(viewport);
        if let Some(path) = &self.settings.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        if self.settings.no_sandbox {
            builder = builder.no_sandbox();
        }
        builder.build().map_err(CaptureError::Launch)
    }

    async fn load(&self, browser: &Browser, url: &str) -> Result<PageCapture, CaptureError> {
        let timeout = self.settings.navigation_timeout;
        let page = within(timeout, open(browser, url)).await??;

        let metadata = within(timeout, read_metadata(&page)).await.unwrap_or_else(|e| {
            tracing::debug!(error = %e, "gave up reading page metadata");
            PageMetadata::default()
        });

        let png = within(
            timeout,
            page.screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .build(),
            ),
        )
        .await?
        .map_err(|e| CaptureError::Screenshot(e.to_string()))?;

        Ok(PageCapture {
            metadata,
            screenshot_base64: BASE64.encode(png),
        })
    }
}

/// Runs `fut` with a deadline, mapping expiry to [`CaptureError::Timeout`].
async fn within<F: Future>(timeout: Duration, fut: F) -> Result<F::Output, CaptureError> {
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| CaptureError::Timeout {
            timeout_secs: timeout.as_secs(),
        })
}

async fn open(browser: &Browser, url: &str) -> Result<Page, CaptureError> {
    let page = browser
        .new_page(url)
        .await
        .map_err(|e| CaptureError::Navigation(e.to_string()))?;
    page.wait_for_navigation()
        .await
        .map_err(|e| CaptureError::Navigation(e.to_string()))?;
    Ok(page)
}

/// Best-effort title and meta description; failures become empty strings.
async fn read_metadata(page: &Page) -> PageMetadata {
    let title = match page.get_title().await {
        Ok(title) => title.unwrap_or_default(),
        Err(e) => {
            tracing::debug!(error = %e, "failed to read page title");
            String::new()
        }
    };
    let description = match page.evaluate(META_DESCRIPTION_JS).await {
        Ok(result) => result.into_value::<String>().unwrap_or_default(),
        Err(e) => {
            tracing::debug!(error = %e, "failed to read meta description");
            String::new()
        }
    };
    PageMetadata { title, description }
}

#[async_trait]
impl PageCapturer for ChromiumCapturer {
    async fn capture(&self, url: &str) -> Result<PageCapture, CaptureError> {
        let config = self.browser_config()?;
        let (mut browser, mut handler) = within(self.settings.navigation_timeout, Browser::launch(config))
            .await?
            .map_err(|e| CaptureError::Launch(e.to_string()))?;

        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let outcome = self.load(&browser, url).await;

        if let Err(e) = browser.close().await {
            tracing::warn!(error = %e, "failed to close browser");
        }
        if let Err(e) = browser.wait().await {
            tracing::warn!(error = %e, "failed to reap browser process");
        }
        events.abort();

        outcome
    }
}
