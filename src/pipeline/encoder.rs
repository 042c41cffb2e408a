//! Widget URL construction
//!
//! The widget reads `+` in its query string literally, so values are encoded
//! with URI-component rules (space becomes `%20`) instead of form encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::{Position, Url};

use super::builder::Prefill;
use crate::{PrefillError, Result};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one query key or value
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Appends prefill parameters to a widget URL
#[derive(Debug, Clone)]
pub struct UrlEncoder {
    hide_gdpr_banner: bool,
}

impl UrlEncoder {
    pub fn new(hide_gdpr_banner: bool) -> Self {
        Self { hide_gdpr_banner }
    }

    /// Append `prefill` to `base_url`.
    ///
    /// Blank values are skipped. With nothing left to send the parsed base URL
    /// is returned as is. Existing query parameters and the fragment are kept.
    pub fn encode(&self, base_url: &str, prefill: &Prefill) -> Result<String> {
        let url = Url::parse(base_url).map_err(|source| PrefillError::MalformedUrl {
            url: base_url.to_string(),
            source,
        })?;

        let mut pairs = Vec::new();
        push_pair(&mut pairs, "name", prefill.name.as_deref());
        push_pair(&mut pairs, "email", prefill.email.as_deref());
        for (key, value) in prefill.custom_answers.iter() {
            push_pair(&mut pairs, &key, Some(value));
        }

        if pairs.is_empty() {
            tracing::debug!(base_url, "prefill is empty, leaving URL untouched");
            return Ok(url.to_string());
        }

        if self.hide_gdpr_banner {
            push_pair(&mut pairs, "hide_gdpr_banner", Some("1"));
        }
        tracing::debug!(pairs = pairs.len(), "encoded prefill query");

        let mut out = String::from(&url[..Position::AfterPath]);
        match url.query() {
            Some(existing) if !existing.is_empty() => {
                out.push('?');
                out.push_str(existing);
                out.push('&');
            }
            _ => out.push('?'),
        }
        out.push_str(&pairs.join("&"));

        if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
            out.push('#');
            out.push_str(fragment);
        }

        Ok(out)
    }
}

impl Default for UrlEncoder {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Encode `prefill` onto `base_url` with the default trailing flags
pub fn encode(base_url: &str, prefill: &Prefill) -> Result<String> {
    UrlEncoder::default().encode(base_url, prefill)
}

fn push_pair(pairs: &mut Vec<String>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        pairs.push(format!("{}={}", encode_component(key), encode_component(value)));
    }
}
