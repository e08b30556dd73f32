pub mod assessment;
pub mod charts;
pub mod network;
