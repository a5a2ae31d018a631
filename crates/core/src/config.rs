//! Global configuration constants for nlpd.
//!
//! Input limits and server defaults are defined here. These are compile-time
//! constants; runtime configuration is handled via CLI arguments and
//! environment variables in the server's `main.rs`.

/// Maximum HTTP request body size accepted by `POST /tokenize`, in bytes.
pub const MAX_REQUEST_BODY_BYTES: usize = 1_000_000;

/// Environment variable holding the address to bind.
pub const ADDR_ENV_VAR: &str = "NLPD_ADDR";

/// Default bind address when `NLPD_ADDR` is unset.
///
/// A bare `:PORT` means "all interfaces" and is expanded at startup.
pub const DEFAULT_ADDR: &str = ":8080";

/// Host used when the bind address omits one.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;
