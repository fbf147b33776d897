//! Typed ID definitions for all domain entities.
//!
//! Each domain entity gets its own ID alias, so the compiler rejects a
//! `BusinessId` where a `NotificationId` is expected.

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Business entities (franchise listings).
pub struct Business;

/// Marker type for Notification entities (admin review work items).
pub struct Notification;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Business entities.
pub type BusinessId = Id<Business>;

/// Typed ID for Notification entities.
pub type NotificationId = Id<Notification>;
