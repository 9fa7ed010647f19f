//! Instance URL construction

use lti_provider::{InstanceUrlBuilder, UrlError};
use lti_types::WidgetInstance;
use url::Url;

/// Builds instance URLs from the widget start page.
///
/// Relative start pages resolve against the public base URL. The running
/// widget gets its `idkey`, plus `proxy` and `locale` when known.
#[derive(Debug, Clone)]
pub struct WidgetUrlBuilder {
    base: Url,
    proxy_url: Option<String>,
}

impl WidgetUrlBuilder {
    pub fn new(public_base_url: &str, proxy_url: Option<String>) -> Result<Self, UrlError> {
        let base = Url::parse(public_base_url).map_err(|e| UrlError::InvalidBase {
            url: public_base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { base, proxy_url })
    }
}

impl InstanceUrlBuilder for WidgetUrlBuilder {
    fn instance_url(&self, instance: &WidgetInstance) -> Result<String, UrlError> {
        if instance.start_url.trim().is_empty() {
            return Err(UrlError::MissingStartUrl(instance.id_key.clone()));
        }
        let mut url = self
            .base
            .join(&instance.start_url)
            .map_err(|e| UrlError::InvalidBase {
                url: instance.start_url.clone(),
                reason: e.to_string(),
            })?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("idkey", &instance.id_key);
            if let Some(proxy) = &self.proxy_url {
                query.append_pair("proxy", proxy);
            }
            if let Some(locale) = &instance.locale {
                query.append_pair("locale", locale);
            }
        }

        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lti_types::{ConsumerToken, InstanceKey, SessionKey};

    fn create_test_instance(start_url: &str, locale: Option<&str>) -> WidgetInstance {
        WidgetInstance {
            id_key: "abc123".to_string(),
            key: InstanceKey::new(
                ConsumerToken::new("lms.example.edu"),
                "alice",
                SessionKey::new("session-1"),
                "http://widgets.example.org/chat",
            ),
            start_url: start_url.to_string(),
            locale: locale.map(str::to_string),
            preferences: vec![],
        }
    }

    #[test]
    fn test_relative_start_url() {
        let builder = WidgetUrlBuilder::new("http://localhost:8080/wookie/", None).unwrap();
        let url = builder
            .instance_url(&create_test_instance("widgets/chat/index.html", Some("en")))
            .unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/wookie/widgets/chat/index.html?idkey=abc123&locale=en"
        );
    }

    #[test]
    fn test_absolute_start_url_and_proxy() {
        let builder = WidgetUrlBuilder::new(
            "http://localhost:8080/",
            Some("http://localhost:8080/proxy".to_string()),
        )
        .unwrap();
        let url = builder
            .instance_url(&create_test_instance("https://cdn.example.org/chat/index.html", None))
            .unwrap();
        assert_eq!(
            url,
            "https://cdn.example.org/chat/index.html?idkey=abc123&proxy=http%3A%2F%2Flocalhost%3A8080%2Fproxy"
        );
    }

    #[test]
    fn test_missing_start_url() {
        let builder = WidgetUrlBuilder::new("http://localhost:8080/", None).unwrap();
        let err = builder
            .instance_url(&create_test_instance("  ", None))
            .unwrap_err();
        assert_eq!(err, UrlError::MissingStartUrl("abc123".to_string()));
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            WidgetUrlBuilder::new("not a url", None),
            Err(UrlError::InvalidBase { .. })
        ));
    }
}
