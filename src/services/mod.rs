// src/services/mod.rs
pub mod alphavantage;
pub mod cache;
pub mod chart;
pub mod timeframe;
