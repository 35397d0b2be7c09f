//! Fixed resource strings the client raises verbatim.

/// Message of the illegal-argument failure raised when a request carries
/// no resource token for the addressed resource.
pub const RESOURCE_TOKEN_NOT_FOUND: &str = "Resource token not found.";
