use time::OffsetDateTime;
use tokio_util::sync::CancellationToken;

use super::OrderService;
use super::dto::GetOrderListResponseDTO;
use crate::authorization::Permission;
use crate::model::order::OrderListCriteria;
use crate::service::error::ServiceError;
use crate::service::listing::compiler::compile_list_query;
use crate::service::listing::criteria::parse_criteria;
use crate::service::listing::dto::ListCriteriaRequestDTO;
use crate::service::listing::mapper::list_result_from;
use crate::service::listing::run_cancellable;

impl OrderService {
    /// Returns one page of orders matching `request`
    ///
    /// # Arguments
    ///
    /// * `request` - raw listing criteria
    /// * `cancellation` - aborts the store round-trips when fired
    pub async fn get_order_list(
        &self,
        request: ListCriteriaRequestDTO,
        cancellation: &CancellationToken,
    ) -> Result<GetOrderListResponseDTO, ServiceError> {
        run_cancellable(
            cancellation,
            self.authorization_gate.authorize(Permission::OrderList),
        )
        .await?;

        let criteria: OrderListCriteria = parse_criteria(request, &self.config)
            .inspect_err(|error| tracing::warn!("Rejected order list criteria: {error}"))?;

        let query = compile_list_query(&criteria, OffsetDateTime::now_utc());
        tracing::debug!(
            ordering = ?query.ordering,
            conjuncts = query.filtering.values().len(),
            page = query.pagination.page,
            page_size = query.pagination.page_size,
            "Listing orders"
        );

        let pagination = query.pagination;
        let result = run_cancellable(cancellation, self.order_repository.get_order_list(query))
            .await
            .inspect_err(|error| {
                if let ServiceError::Repository(error) = error {
                    tracing::error!("Failed to list orders: {error}");
                }
            })?;

        Ok(list_result_from(result, &pagination))
    }
}
