pub mod network;
pub mod problem;
pub mod search;
pub mod types;
pub mod utils;
