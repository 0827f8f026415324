use crate::api_client;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("api client error: {0}")]
    ApiClient(#[from] api_client::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
