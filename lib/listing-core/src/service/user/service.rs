use time::OffsetDateTime;
use tokio_util::sync::CancellationToken;

use super::UserService;
use super::dto::GetUserListResponseDTO;
use crate::authorization::Permission;
use crate::model::user::UserListCriteria;
use crate::service::error::ServiceError;
use crate::service::listing::compiler::compile_list_query;
use crate::service::listing::criteria::parse_criteria;
use crate::service::listing::dto::ListCriteriaRequestDTO;
use crate::service::listing::mapper::list_result_from;
use crate::service::listing::run_cancellable;

impl UserService {
    pub async fn get_user_list(
        &self,
        request: ListCriteriaRequestDTO,
        cancellation: &CancellationToken,
    ) -> Result<GetUserListResponseDTO, ServiceError> {
        run_cancellable(
            cancellation,
            self.authorization_gate.authorize(Permission::UserList),
        )
        .await?;

        let criteria: UserListCriteria = parse_criteria(request, &self.config)
            .inspect_err(|error| tracing::warn!("Rejected user list criteria: {error}"))?;

        let query = compile_list_query(&criteria, OffsetDateTime::now_utc());
        tracing::debug!(
            ordering = ?query.ordering,
            conjuncts = query.filtering.values().len(),
            page = query.pagination.page,
            page_size = query.pagination.page_size,
            "Listing users"
        );

        let pagination = query.pagination;
        let result = run_cancellable(cancellation, self.user_repository.get_user_list(query))
            .await
            .inspect_err(|error| {
                if let ServiceError::Repository(error) = error {
                    tracing::error!("Failed to list users: {error}");
                }
            })?;

        Ok(list_result_from(result, &pagination))
    }
}
