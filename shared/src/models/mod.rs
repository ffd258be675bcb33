//! Data models
//!
//! Records exchanged with the usage API. Field names follow the API's
//! camelCase JSON; timestamps are Unix millis.

pub mod earnings;
pub mod limits;
pub mod locale;
pub mod plan;
pub mod pricing_system;
pub mod redemption_code;
pub mod subscription;
pub mod usage;

// Re-exports
pub use earnings::*;
pub use limits::*;
pub use locale::*;
pub use plan::*;
pub use pricing_system::*;
pub use redemption_code::*;
pub use subscription::*;
pub use usage::*;
