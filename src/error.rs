use thiserror::Error;

/// Stable machine-readable codes for [`UpstreamProxyError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UpstreamProxyErrorCode {
    InvalidProxyHost,
    InvalidProxyPort,
}

impl UpstreamProxyErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidProxyHost => "invalid_proxy_host",
            Self::InvalidProxyPort => "invalid_proxy_port",
        }
    }
}

/// Raised only by the `validated_*` resolver variants. The sentinel
/// API (`proxy_settings`, `upstream_proxy_url`) never errors; it
/// degrades to port `0` and the empty string instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UpstreamProxyError {
    #[error("invalid proxy host name: {host:?}")]
    InvalidProxyHost { host: String },
    #[error("invalid proxy port: {port}")]
    InvalidProxyPort { port: u16 },
}

impl UpstreamProxyError {
    pub const fn code(&self) -> UpstreamProxyErrorCode {
        match self {
            Self::InvalidProxyHost { .. } => UpstreamProxyErrorCode::InvalidProxyHost,
            Self::InvalidProxyPort { .. } => UpstreamProxyErrorCode::InvalidProxyPort,
        }
    }
}
