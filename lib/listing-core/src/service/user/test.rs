use std::sync::Arc;

use rust_decimal::Decimal;
use shared_types::UserId;
use time::macros::datetime;
use tokio_util::sync::CancellationToken;

use super::UserService;
use crate::authorization::{AuthorizationError, MockAuthorizationGate, Permission};
use crate::config::ListingConfig;
use crate::model::common::SortDirection;
use crate::model::list_query::OrderSpec;
use crate::model::listing::{AddressCondition, AddressField, ListingFilterValue};
use crate::model::user::{GetUserList, GetUserQuery, SortableUserColumn, UserListItem, UserSearchColumn};
use crate::repository::user_repository::MockUserRepository;
use crate::service::error::{ServiceError, ValidationError};
use crate::service::listing::dto::{AddressConditionRequestDTO, ListCriteriaRequestDTO};

fn setup_service(
    user_repository: MockUserRepository,
    authorization_gate: MockAuthorizationGate,
) -> UserService {
    UserService::new(
        Arc::new(user_repository),
        Arc::new(authorization_gate),
        Arc::new(ListingConfig {
            default_page_size: 10,
            max_page_size: 25,
        }),
    )
}

fn allow_all() -> MockAuthorizationGate {
    let mut authorization_gate = MockAuthorizationGate::default();
    authorization_gate
        .expect_authorize()
        .with(mockall::predicate::eq(Permission::UserList))
        .returning(|_| Ok(()));
    authorization_gate
}

#[tokio::test]
async fn test_get_user_list_passes_compiled_query() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user_list()
        .once()
        .withf(|query: &GetUserQuery| {
            query.pagination.page == 1
                && query.pagination.page_size == 10
                && matches!(
                    query.ordering,
                    OrderSpec::Column {
                        column: SortableUserColumn::TotalSpent,
                        direction: SortDirection::Ascending,
                    }
                )
                && query.filtering.values()
                    == vec![
                        &ListingFilterValue::Search {
                            column: UserSearchColumn::Email,
                            text: "@example".to_string(),
                        },
                        &ListingFilterValue::Address(AddressCondition {
                            field: AddressField::City,
                            value: "Paris".to_string(),
                        }),
                    ]
        })
        .returning(|_| {
            Ok(GetUserList {
                values: vec![
                    UserListItem {
                        id: UserId::new_v4(),
                        email: "ann@example.com".to_string(),
                        created_date: datetime!(2024-02-01 08:00 UTC),
                        name: "Ann Smith".to_string(),
                        last_order_status: None,
                        total_spent_minor: 0,
                        currency: "EUR".to_string(),
                    },
                    UserListItem {
                        id: UserId::new_v4(),
                        email: "bob@example.com".to_string(),
                        created_date: datetime!(2024-02-02 08:00 UTC),
                        name: "Bob Jones".to_string(),
                        last_order_status: None,
                        total_spent_minor: 129900,
                        currency: "EUR".to_string(),
                    },
                ],
                total_items: 12,
            })
        });

    let service = setup_service(user_repository, allow_all());

    let result = service
        .get_user_list(
            ListCriteriaRequestDTO {
                search_column: Some("email".to_string()),
                search_query: Some("@example".to_string()),
                address_conditions: vec![AddressConditionRequestDTO {
                    r#type: "city".to_string(),
                    value: "Paris".to_string(),
                }],
                sort_column: Some("totalSpent".to_string()),
                sort_direction: Some("ASC".to_string()),
                ..Default::default()
            },
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(result.total_count, 12);
    assert_eq!(result.total_pages, 2);
    assert_eq!(result.items[1].total_spent, Decimal::new(129900, 2));
    assert_eq!(result.items[0].last_order_status, None);
}

#[tokio::test]
async fn test_get_user_list_respects_configured_max_page_size() {
    let mut user_repository = MockUserRepository::default();
    user_repository.expect_get_user_list().never();

    let service = setup_service(user_repository, allow_all());

    let result = service
        .get_user_list(
            ListCriteriaRequestDTO {
                limit: Some(26),
                ..Default::default()
            },
            &CancellationToken::new(),
        )
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::InvalidPageSize {
            value: 26,
            max: 25
        }))
    ));
}

#[tokio::test]
async fn test_get_user_list_gate_failure_short_circuits() {
    let mut authorization_gate = MockAuthorizationGate::default();
    authorization_gate
        .expect_authorize()
        .returning(|_| Err(AuthorizationError::Gate("unavailable".to_string())));

    let mut user_repository = MockUserRepository::default();
    user_repository.expect_get_user_list().never();

    let service = setup_service(user_repository, authorization_gate);

    let result = service
        .get_user_list(ListCriteriaRequestDTO::default(), &CancellationToken::new())
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Authorization(AuthorizationError::Gate(_)))
    ));
}

#[test]
fn test_user_list_item_serializes_camel_case() {
    let item = super::dto::UserListItemResponseDTO {
        id: "7f9c5a3e-3b8e-4a6b-9a77-3f1b2c0d4e55".parse().unwrap(),
        email: "ann@example.com".to_string(),
        created_date: datetime!(2024-02-01 08:00 UTC),
        name: "Ann Smith".to_string(),
        last_order_status: Some(crate::model::order_status::OrderStatus::Shipped),
        total_spent: Decimal::new(129900, 2),
        currency: "EUR".to_string(),
    };

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "7f9c5a3e-3b8e-4a6b-9a77-3f1b2c0d4e55",
            "email": "ann@example.com",
            "createdDate": "2024-02-01T08:00:00Z",
            "name": "Ann Smith",
            "lastOrderStatus": "SHIPPED",
            "totalSpent": "1299.00",
            "currency": "EUR",
        })
    );
}
