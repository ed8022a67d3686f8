//! Well-known property keys.
//!
//! The transform of an element lives in its schema under these keys; the
//! Move action writes all three.

/// Local position, a Vec3.
pub const POSITION: &str = "position";

/// Local rotation as Euler angles, a Vec3.
pub const ROTATION: &str = "rotation";

/// Local scale, a Vec3. An absent scale reads as identity.
pub const SCALE: &str = "scale";
