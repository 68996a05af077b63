pub mod common;
pub mod coverage;
pub mod damage;
pub mod state;
pub mod stats;
pub mod types;

pub use matchup_data::ConfigError;
