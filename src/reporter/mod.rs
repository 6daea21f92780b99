pub mod serialize;
pub mod xray;
