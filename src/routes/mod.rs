pub mod guard;

pub use guard::{Navigation, RouteGuard};
