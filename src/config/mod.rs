pub mod cfg;
pub mod constants;
