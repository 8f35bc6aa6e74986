//! Rewrites resource URLs to fetch through a CORS-enabled proxy endpoint.
//!
//! Absolute URLs pointing at arbitrary hosts are wrapped as
//! `<proxy base>url=<percent-encoded original>`; relative paths, loopback
//! hosts, and allow-listed hosts pass through untouched. The rewrite is a
//! pure string transformation: no network I/O happens here, the proxy
//! endpoint is dereferenced later by whatever HTTP client consumes the URL.
//!
//! ```
//! use corsproxy::proxy;
//!
//! assert_eq!(
//!     proxy("https://example.io/logo.png"),
//!     "https://cdn.example.io/proxy/v1?url=https%3A%2F%2Fexample.io%2Flogo.png"
//! );
//! assert_eq!(proxy("/image.png"), "/image.png");
//! ```

pub mod config;
pub mod rewrite;

pub use config::{ConfigError, ProxyConfig};
pub use rewrite::{proxy, proxy_with};
