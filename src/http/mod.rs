//! HTTP client layer — `ProjectXHttp`, the transport seam, and the
//! re-authentication policy.

pub mod client;
pub mod envelope;
pub mod retry;
pub mod transport;

pub use client::ProjectXHttp;
pub use retry::{AuthRetry, RetryPolicy};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{RawResponse, Transport};
