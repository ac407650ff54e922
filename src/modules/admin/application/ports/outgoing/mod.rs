pub mod admin_stats_query;

pub use admin_stats_query::{AdminStatsQuery, AdminStatsQueryError};
