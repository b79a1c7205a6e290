//! `upstream-proxy` resolves the effective HTTP upstream proxy for a
//! client process and formats it as a credential-bearing proxy URL.
//!
//! The resolver chooses between "no proxy," a user-entered custom
//! proxy, and the host system's proxy, reading flags and values from an
//! injected preference store on every call. The first-observed system
//! proxy can be snapshotted so that later mutations of the
//! process-global proxy properties (a side effect of configuring some
//! network clients) do not leak into what the system "originally" had.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use upstream_proxy::keys;
//! use upstream_proxy::prelude::*;
//!
//! let prefs = Arc::new(MemoryPreferences::new());
//! prefs.set_bool(keys::USE_HTTP_PROXY, true);
//! prefs.set_bool(keys::USE_CUSTOM_PROXY_SETTINGS, true);
//! prefs.set_string(keys::CUSTOM_PROXY_HOST, "proxyhost");
//! prefs.set_string(keys::CUSTOM_PROXY_PORT, "8080");
//!
//! let resolver = ProxyResolver::from_store(prefs);
//! assert_eq!(resolver.upstream_proxy_url(), "http://proxyhost:8080");
//! ```
//!
//! # Resolution Rules
//!
//! - Proxy use disabled: no settings, empty URL.
//! - Custom source selected: host and port come from the store; an
//!   unparsable port degrades to the invalid sentinel `0`, never an
//!   error.
//! - System source selected: overrides any custom result, using the
//!   saved snapshot once
//!   [`ProxyResolver::save_system_proxy_settings`] has run, else a live
//!   read.
//! - Results are unvalidated: callers reject unusable values with
//!   [`is_valid_proxy_host_name`] and [`is_valid_proxy_port`], or use
//!   the `validated_*` variants for an explicit error contract.

mod error;
mod prefs;
mod resolver;
mod system;
mod util;

pub use crate::error::{UpstreamProxyError, UpstreamProxyErrorCode};
pub use crate::prefs::{MemoryPreferences, PreferenceStore, keys};
pub use crate::resolver::{
    ProxyConfig, ProxyResolver, ProxySettings, is_valid_proxy_host_name, is_valid_proxy_port,
};
pub use crate::system::{
    EnvSystemProperties, HTTP_PROXY_HOST_PROPERTY, HTTP_PROXY_PORT_PROPERTY,
    StaticSystemProperties, SystemProperties, SystemProxyCache,
};

pub type UpstreamProxyResult<T> = std::result::Result<T, UpstreamProxyError>;

pub mod prelude {
    pub use crate::{
        EnvSystemProperties, MemoryPreferences, PreferenceStore, ProxyConfig, ProxyResolver,
        ProxySettings, StaticSystemProperties, SystemProperties, SystemProxyCache,
        UpstreamProxyError, UpstreamProxyErrorCode, UpstreamProxyResult,
        is_valid_proxy_host_name, is_valid_proxy_port,
    };
}
