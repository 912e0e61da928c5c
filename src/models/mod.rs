pub mod candidate;
pub mod company;
pub mod contact;
pub mod interaction;
pub mod subscription;

/// Lifecycle shared by candidates and companies. "Deleting" a row archives
/// it, nothing is ever removed from either table.
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_ARCHIVED: &str = "archived";
