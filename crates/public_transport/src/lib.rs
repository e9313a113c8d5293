use std::{error::Error, fmt};

use opendata::ApiError;

pub mod connection;
pub mod cursor;
pub mod database;
pub mod journey;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod server;
pub mod station;

#[derive(Debug)]
pub enum RequestError {
    NotFound,
    InvalidCursor(String),
    Api(ApiError),
    Other(Box<dyn Error + Send + Sync>),
}

impl Error for RequestError {}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NotFound => write!(f, "The requested item does not exist."),
            RequestError::InvalidCursor(cursor) => {
                write!(f, "Invalid pagination cursor '{}'.", cursor)
            }
            RequestError::Api(why) => write!(f, "{}", why),
            RequestError::Other(why) => write!(f, "{}", why),
        }
    }
}

impl From<database::DatabaseError> for RequestError {
    fn from(value: database::DatabaseError) -> Self {
        match value {
            database::DatabaseError::NotFound => Self::NotFound,
            database::DatabaseError::Other(why) => Self::Other(why),
        }
    }
}

impl From<ApiError> for RequestError {
    fn from(why: ApiError) -> Self {
        Self::Api(why)
    }
}

pub type RequestResult<O> = Result<O, RequestError>;
