pub mod dashboard;
pub mod session;

pub use dashboard::DashboardStore;
pub use session::{AuthState, AuthWriter};
