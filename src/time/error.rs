/// An error that occurred while parsing a duration such as `10s`.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("{0}")]
    Syntax(String),
    #[error("{0}")]
    UnitNotSupported(String),
}
