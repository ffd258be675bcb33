//! Usage service endpoints, grouped by resource

mod earnings;
mod limits;
mod plans;
mod redemption;
mod subscription;
mod upload;

pub use subscription::ChangeSubscriptionOptions;
pub use upload::{UploadFile, UploadType};
