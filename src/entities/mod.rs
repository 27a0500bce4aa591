pub mod activity_log;
pub mod complaint;
pub mod dead_stock;
pub mod system;
pub mod user;

pub use activity_log::LogAction;
pub use complaint::ComplaintStatus;
pub use system::{Quality, SystemStatus};
pub use user::Role;
