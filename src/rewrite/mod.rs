//! URL proxy rewriting.
//!
//! Decides whether a resource URL needs to go through the CORS proxy and
//! builds the proxied URL when it does. Relative paths, loopback hosts, and
//! allow-listed hosts come back unchanged.

mod classify;
mod normalize;

pub use classify::{is_external_url, is_loopback_host};
pub use normalize::force_https;

use std::borrow::Cow;

use url::Url;

use crate::config::ProxyConfig;

/// Rewrites `src` with the default [`ProxyConfig`].
pub fn proxy(src: &str) -> String {
    proxy_with(&ProxyConfig::default(), src)
}

/// Rewrites `src` so it is fetched through `cfg.proxy_base_url` when needed.
///
/// Absolute URLs whose host is neither loopback nor on the allow-list are
/// wrapped as `<proxy_base_url><percent-encoded url>`. Protocol-relative
/// inputs gain an `https:` scheme before the host check, so an allow-listed
/// `//cdn.example.io/a.png` comes back as `https://cdn.example.io/a.png`.
///
/// Total: never panics and carries no error channel. Input that fails URL
/// parsing is returned exactly as given.
pub fn proxy_with(cfg: &ProxyConfig, src: &str) -> String {
    if src.is_empty() {
        return src.to_string();
    }

    let is_absolute = is_external_url(src);
    let normalized: Cow<'_, str> = if is_absolute {
        force_https(src)
    } else {
        Cow::Borrowed(src)
    };

    let url = match Url::parse(&normalized) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(src, error = %e, "unparseable URL, passing through");
            return src.to_string();
        }
    };

    if cfg.skip_loopback {
        if let Some(host) = url.host() {
            if is_loopback_host(&host) {
                return normalized.into_owned();
            }
        }
    }

    let allow_listed = url
        .host_str()
        .is_some_and(|host| cfg.is_allowed_host(host));

    if is_absolute && !allow_listed {
        tracing::trace!(src, "routing through proxy endpoint");
        format!("{}{}", cfg.proxy_base_url, urlencoding::encode(&normalized))
    } else {
        normalized.into_owned()
    }
}
