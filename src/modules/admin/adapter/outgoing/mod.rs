pub mod admin_stats_postgres;
