//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`LocomotionError`] covers the failure modes that can
//! stop the character from initialising:
//! - Asset loading failures reported by the loader collaborator
//! - Clip sets that lack a clip the state machine cannot live without
//! - Invalid tuning configuration
//!
//! Per-frame problems (an unknown clip requested mid-game, no ground under
//! the character) are never errors; they are logged and the frame goes on.
//!
//! ```rust,ignore
//! use strider::errors::{LocomotionError, Result};
//!
//! fn load() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::animation::ActionId;

/// The main error type for the locomotion core.
#[derive(Error, Debug)]
pub enum LocomotionError {
    // ========================================================================
    // Asset Errors
    // ========================================================================
    /// The loader collaborator failed to produce the character asset.
    #[error("Character asset failed to load: {0}")]
    AssetLoad(String),

    /// A clip the controller requires is absent from the loaded asset.
    #[error("Required animation clip missing: {0}")]
    MissingRequiredClip(ActionId),

    /// A clip name does not correspond to any known action.
    #[error("Unknown animation action: {0}")]
    UnknownAction(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A configuration value is out of range.
    #[error("Invalid config field `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, LocomotionError>`.
pub type Result<T> = std::result::Result<T, LocomotionError>;
