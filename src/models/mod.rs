mod analytics;
mod organization;
mod position;
mod stock_range;
mod transaction;
mod user;

pub use analytics::{BalancePoint, BalanceSeries, OrgTotals, SeriesMeta};
pub use organization::{Organization, Organizations};
pub use position::{Position, PositionStatus};
pub use stock_range::{StockPoint, StockRange};
pub use transaction::{parse_iso_date, OrgRef, Transaction};
pub use user::{User, UserType};
