// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Administrator role - triages, reprioritizes, and deletes reports
pub const ROLE_ADMIN: &str = "admin";

/// Citizen role (Indonesian: "warga") - submits and tracks reports
pub const ROLE_WARGA: &str = "warga";

// =============================================================================
// UPLOAD LIMITS
// =============================================================================

/// Maximum accepted photo size
pub const MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

/// Multipart body limit: photo cap plus headroom for the text fields
pub const MAX_MULTIPART_BODY_SIZE: usize = 6 * 1024 * 1024;

/// Photo formats accepted by the remote storage strategy
pub const ALLOWED_PHOTO_FORMATS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Remote uploads are downscaled to fit within this square
pub const MAX_PHOTO_DIMENSION: u32 = 1000;
