//! Core of keep-delete: walk through the images of a folder one at a time,
//! keep or delete each, and undo the latest decision. Deleted files are
//! parked in a session staging directory until the session closes.

pub mod action;
pub mod config;
pub mod error;
pub mod layout;
pub mod queue;
pub mod session;
pub mod staging;

pub use action::{Action, ActionLog};
pub use config::{ReviewConfig, STAGING_PREFIX};
pub use error::{Result, ReviewError};
pub use layout::{DISPLAY_MARGIN, display_target, fit_scale};
pub use queue::{ImageQueue, ImageRef, is_supported_image};
pub use session::{ReviewObserver, ReviewSession, ReviewState};
pub use staging::{StagingArea, sweep_stale};
