//! Client-side core of a personal-finance dashboard.
//!
//! Holds the auth session, loads transactions and organizations from the
//! dashboard API (or bundled demo fixtures), reduces them into chart series,
//! and formats the labels the charts display. [`routes::RouteGuard`] decides
//! whether a navigation may proceed or must go to the login page.

pub mod charts;
pub mod config;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use errors::AppError;
pub use state::AppState;
