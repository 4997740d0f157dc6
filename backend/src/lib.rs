//! Pulls marketing content (blog posts, testimonials, coaching packages) from
//! the headless CMS and writes the snapshot the frontend renders from.

pub mod cms;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod snapshot;
pub mod sync;

pub use cms::{CmsClient, Collection};
pub use config::{CmsConfig, SyncConfig};
pub use error::{SyncError, SyncResult};
pub use models::ContentSnapshot;
