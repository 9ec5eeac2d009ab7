//! Shared constants for contentrest.

/// Skip count applied when the caller does not send one.
pub const DEFAULT_SKIP_COUNT: usize = 0;

/// Page size applied when the caller does not send one.
pub const DEFAULT_MAX_ITEMS: usize = 100;

/// How long a job status record stays visible in the in-memory cache.
pub const DEFAULT_STATUS_CACHE_TTL_SECS: u64 = 3600;

/// Upper bound on live job status records in the in-memory cache.
pub const DEFAULT_STATUS_CACHE_CAPACITY: usize = 10_000;

pub const STATUS_CACHE_TTL_ENV: &str = "CONTENTREST_STATUS_CACHE_TTL_SECS";
pub const STATUS_CACHE_CAPACITY_ENV: &str = "CONTENTREST_STATUS_CACHE_CAPACITY";
pub const DEFAULT_MAX_ITEMS_ENV: &str = "CONTENTREST_DEFAULT_MAX_ITEMS";
