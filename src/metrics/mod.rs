pub mod run_stats;

pub use run_stats::RunStats;
