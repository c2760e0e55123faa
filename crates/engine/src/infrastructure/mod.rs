//! Infrastructure: port traits and the adapters behind them.

pub mod clock;
pub mod config;
pub mod memory;
pub mod ports;
