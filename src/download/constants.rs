//! Constants for the download module (timeouts, retry bounds, worker pool).

use std::time::Duration;

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default whole-request timeout (30 seconds).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Additional attempts made after a timed-out request.
pub const REQUEST_RETRIES_NUM: u32 = 10;

/// Fixed wait before each retry.
pub const REQUEST_RETRY_WAIT_TIME: Duration = Duration::from_secs(2);

/// Default size of the image download worker pool.
pub const DEFAULT_DOWNLOAD_WORKERS: usize = 12;
