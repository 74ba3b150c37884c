//! Error types for hnr.
//!
//! - [`FetchError`]: the single error kind for everything that talks to the
//!   item API (id lists, items, comment fan-out, user lookup).
//! - [`SettingsError`]: persisting user preferences failed.
//!
//! Binary-level plumbing (terminal setup, logging) uses `color_eyre::Result`.
//!
//! | Variant | Cause | Code |
//! |---------|-------|------|
//! | `Network` | connection refused, DNS, reset | `E_FETCH_NET` |
//! | `Timeout` | transport timeout elapsed | `E_FETCH_TIMEOUT` |
//! | `Status` | non-2xx HTTP status | `E_FETCH_STATUS` |
//! | `Malformed` | body is not the expected JSON | `E_FETCH_MALFORMED` |
//! | `NotFound` | API answered `null` | `E_FETCH_NOT_FOUND` |

mod fetch;
mod settings;

pub use fetch::FetchError;
pub use settings::SettingsError;
