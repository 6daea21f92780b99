pub mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use self::http::{HttpHeader, HttpSender};
