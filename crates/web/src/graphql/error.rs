use async_graphql::{Error, ErrorExtensions};
use public_transport::{RequestError, RequestResult};

pub const NOT_FOUND: &str = "NOT_FOUND";
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
pub const INTERNAL: &str = "INTERNAL";

pub(crate) fn error_with_code(message: impl Into<String>, code: &'static str) -> Error {
    Error::new(message).extend_with(|_, extensions| extensions.set("code", code))
}

pub(crate) fn request_error_to_graphql(why: RequestError) -> Error {
    match why {
        RequestError::NotFound => error_with_code(why.to_string(), NOT_FOUND),
        RequestError::InvalidCursor(_) => error_with_code(why.to_string(), BAD_USER_INPUT),
        RequestError::Api(_) => {
            log::warn!("Upstream request failed: {}", why);
            error_with_code(why.to_string(), UPSTREAM_ERROR)
        }
        RequestError::Other(_) => {
            log::error!("Request failed: {}", why);
            error_with_code("Internal server error.", INTERNAL)
        }
    }
}

/// Converts service results for returning them from resolvers.
pub(crate) trait GraphqlResult<O> {
    fn graphql(self) -> async_graphql::Result<O>;
}

impl<O> GraphqlResult<O> for RequestResult<O> {
    fn graphql(self) -> async_graphql::Result<O> {
        self.map_err(request_error_to_graphql)
    }
}
