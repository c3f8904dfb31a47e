#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown HTTP status code name: '{0}'")]
    UnknownName(String),

    #[error("No registered HTTP status code has the value '{0}'")]
    UnregisteredValue(u16),
}
