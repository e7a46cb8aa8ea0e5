use crate::endpoint::ParseEndpointError;
use std::io;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] zmq::Error),

    #[error(transparent)]
    Endpoint(#[from] ParseEndpointError),

    #[error("no endpoints configured")]
    NoEndpoints,

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to render frame as json: {0}")]
    Json(#[from] serde_json::Error),
}
