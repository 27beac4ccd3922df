/// Floor, reachability and path statistics of a finished map
pub mod metrics;

pub use metrics::DungeonMetrics;
