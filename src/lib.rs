//! Blocking client for the Call of Duty stats API at `cod-api.theapinetwork.com`.
//!
//! ```no_run
//! use cod_stats::CodApiClient;
//!
//! let client = CodApiClient::new("bo4", "psn", "some player")?;
//! let validation = client.validate_user()?;
//! if validation.success {
//!     let stats = client.get_user_stats("multiplayer")?;
//!     println!("{} kills", stats.stats.kills);
//! }
//! # Ok::<(), cod_stats::ApiError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;

pub use api::client::CodApiClient;
pub use api::endpoints::BASE_URL;
pub use api::models::*;
pub use config::{Config, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiResult};
