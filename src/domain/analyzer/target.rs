//! The page an analysis runs against.

use url::Url;

use super::AnalysisError;

/// An absolute http(s) URL accepted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTarget {
    raw: String,
    url: Url,
}

impl AnalysisTarget {
    /// Parses the caller's URL. The string is passed to the browser unchanged.
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::MissingUrl);
        }
        let url = Url::parse(trimmed).map_err(|e| AnalysisError::invalid_url(trimmed, e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AnalysisError::invalid_url(trimmed, format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(AnalysisError::invalid_url(trimmed, "missing host"));
        }
        Ok(Self {
            raw: trimmed.to_string(),
            url,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased host without a leading `www.`.
    pub fn host(&self) -> String {
        let host = self.url.host_str().unwrap_or_default().to_ascii_lowercase();
        host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
    }

    /// True when the host equals an allowlisted domain or is a subdomain of one.
    pub fn is_ecommerce(&self, allowlist: &[String]) -> bool {
        let host = self.host();
        allowlist.iter().any(|entry| {
            let domain = entry.trim().trim_start_matches("www.").to_ascii_lowercase();
            !domain.is_empty() && (host == domain || host.ends_with(&format!(".{}", domain)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_http_urls() {
        let target = AnalysisTarget::parse(" https://www.Example.com/shop?a=1 ").unwrap();
        assert_eq!(target.as_str(), "https://www.Example.com/shop?a=1");
        assert_eq!(target.host(), "example.com");
    }

    #[test]
    fn rejects_blank_and_relative_urls() {
        assert_eq!(AnalysisTarget::parse("   "), Err(AnalysisError::MissingUrl));
        assert!(matches!(
            AnalysisTarget::parse("/about"),
            Err(AnalysisError::InvalidUrl { .. })
        ));
        assert!(matches!(
            AnalysisTarget::parse("ftp://example.com"),
            Err(AnalysisError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn ecommerce_matches_domain_and_subdomains_only() {
        let allowlist = vec!["myshopify.com".to_string(), "www.amazon.com".to_string()];
        let shop = AnalysisTarget::parse("https://acme.myshopify.com").unwrap();
        let amazon = AnalysisTarget::parse("https://amazon.com/dp/1").unwrap();
        let lookalike = AnalysisTarget::parse("https://notmyshopify.com").unwrap();

        assert!(shop.is_ecommerce(&allowlist));
        assert!(amazon.is_ecommerce(&allowlist));
        assert!(!lookalike.is_ecommerce(&allowlist));
        assert!(!shop.is_ecommerce(&[]));
    }
}
