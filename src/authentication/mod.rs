pub mod credentials;

pub use self::credentials::Credentials;
