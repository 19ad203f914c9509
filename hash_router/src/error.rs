use thiserror::Error;

/// A route pattern was rejected while compiling a [`RouteTable`](crate::RouteTable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("route pattern {0:?} must start with '/'")]
    MissingLeadingSlash(String),
    #[error("route pattern {0:?} contains a parameter without a name")]
    EmptyParamName(String),
    #[error("route pattern {0:?} has a wildcard segment that is not last")]
    SplatNotLast(String),
    #[error("route pattern {0:?} is declared more than once")]
    DuplicatePath(String),
}
