pub mod engine;
pub mod rate_limit;
pub mod session_status;
pub mod simulated;
