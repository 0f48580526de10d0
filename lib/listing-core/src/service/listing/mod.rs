//! Shared listing pipeline: criteria parsing, predicate compilation, sort
//! resolution and result assembly. The entity services plug their column
//! enums into these generic pieces.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use super::error::ServiceError;

pub mod compiler;
pub mod criteria;
pub mod dto;
pub mod mapper;
pub mod sort_resolver;
pub mod time_window;


/// Drives `fut` unless `token` fires first, in which case the future is dropped
/// with any store operation still in flight.
pub(crate) async fn run_cancellable<T, E>(
    token: &CancellationToken,
    fut: impl Future<Output = Result<T, E>>,
) -> Result<T, ServiceError>
where
    ServiceError: From<E>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ServiceError::Cancelled),
        result = fut => Ok(result?),
    }
}
