pub mod assessment;
pub mod network;
pub mod not_found;
pub mod results;
