pub mod cancel;
pub mod config;
pub mod demand;
pub mod engine;
pub mod monte_carlo;
