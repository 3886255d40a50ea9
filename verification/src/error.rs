use docuchain_types::RequestStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("caller {0} is not authorized for this operation")]
    Unauthorized(String),

    #[error("request {0} does not exist")]
    NotFound(u64),

    #[error("request {id} is {status:?}, not pending")]
    InvalidState { id: u64, status: RequestStatus },
}
