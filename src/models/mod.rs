/// Request and response bodies of the validation endpoints.
pub mod email;

/// # Health Status Response
///
/// Service status with a timestamp, returned by the health check endpoint.
pub mod health;
