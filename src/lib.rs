pub mod api;
pub mod clients;
pub mod common;
pub mod guardduty;
pub mod identity;
pub mod status;
