use std::collections::HashSet;

use listing_core::config::ListingConfig;
use listing_core::model::order::{GetOrderList, OrderListCriteria};
use listing_core::model::order_status::OrderStatus;
use listing_core::repository::order_repository::OrderRepository;
use listing_core::service::listing::compiler::compile_list_query;
use listing_core::service::listing::criteria::parse_criteria;
use listing_core::service::listing::dto::ListCriteriaRequestDTO;
use sea_orm::DatabaseConnection;
use shared_types::{OrderId, ProductId, UserId};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use super::OrderProvider;
use crate::test_utilities::{
    TestOrder, TestUser, insert_order, insert_order_line, insert_user,
    setup_test_data_layer_and_connection,
};

const NOW: OffsetDateTime = datetime!(2024-04-10 12:00 UTC);

struct TestSetup {
    provider: OrderProvider,
    db: DatabaseConnection,
    user_id: UserId,
}

async fn setup() -> TestSetup {
    let data_layer = setup_test_data_layer_and_connection().await;
    let db = data_layer.db().clone();
    let user_id = insert_user(&db, TestUser::default()).await.unwrap();

    TestSetup {
        provider: OrderProvider { db: db.clone() },
        db,
        user_id,
    }
}

impl TestSetup {
    async fn order(&self, params: TestOrder) -> OrderId {
        insert_order(&self.db, self.user_id, params).await.unwrap()
    }

    async fn order_with_status(&self, status: OrderStatus) -> OrderId {
        self.order(TestOrder {
            status,
            ..Default::default()
        })
        .await
    }

    async fn list(&self, query: &str) -> GetOrderList {
        let request = ListCriteriaRequestDTO::from_query_string(query).unwrap();
        let criteria: OrderListCriteria =
            parse_criteria(request, &ListingConfig::default()).unwrap();

        self.provider
            .get_order_list(compile_list_query(&criteria, NOW))
            .await
            .unwrap()
    }
}

fn statuses(list: &GetOrderList) -> Vec<OrderStatus> {
    list.values.iter().map(|item| item.status).collect()
}

fn ids(list: &GetOrderList) -> Vec<OrderId> {
    list.values.iter().map(|item| item.id).collect()
}

#[tokio::test]
async fn test_get_order_list_empty() {
    let setup = setup().await;

    let result = setup.list("").await;

    assert_eq!(result.total_items, 0);
    assert!(result.values.is_empty());
}

#[tokio::test]
async fn test_get_order_list_maps_row() {
    let setup = setup().await;
    let id = setup
        .order(TestOrder {
            number: "#4711".to_string(),
            customer_name: "Marie Curie".to_string(),
            status: OrderStatus::Paid,
            total: 12345,
            currency: "CHF".to_string(),
            ..Default::default()
        })
        .await;

    let result = setup.list("").await;

    assert_eq!(result.total_items, 1);
    let item = &result.values[0];
    assert_eq!(item.id, id);
    assert_eq!(item.number, "#4711");
    assert_eq!(item.customer_name, "Marie Curie");
    assert_eq!(item.status, OrderStatus::Paid);
    assert_eq!(item.total_minor, 12345);
    assert_eq!(item.currency, "CHF");
}

#[tokio::test]
async fn test_get_order_list_without_status_filter_returns_every_status() {
    let setup = setup().await;
    for status in [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ] {
        setup.order_with_status(status).await;
    }

    let unfiltered = setup.list("sortColumn=status&sortDirection=ASC").await;
    let every_status = setup
        .list(
            "statuses[0]=PENDING&statuses[1]=PROCESSING&statuses[2]=PAID\
             &statuses[3]=SHIPPED&statuses[4]=DELIVERED&statuses[5]=CANCELLED\
             &statuses[6]=REFUNDED&sortColumn=status&sortDirection=ASC",
        )
        .await;

    assert_eq!(unfiltered.total_items, 7);
    assert_eq!(every_status.total_items, unfiltered.total_items);
    assert_eq!(ids(&every_status), ids(&unfiltered));

    let filtered = setup
        .list("statuses[0]=PAID&statuses[1]=SHIPPED&sortColumn=status&sortDirection=ASC")
        .await;
    assert_eq!(filtered.total_items, 2);
    assert_eq!(
        statuses(&filtered),
        vec![OrderStatus::Paid, OrderStatus::Shipped]
    );
}

#[tokio::test]
async fn test_get_order_list_status_sort_uses_business_rank() {
    let setup = setup().await;
    setup.order_with_status(OrderStatus::Shipped).await;
    setup.order_with_status(OrderStatus::Pending).await;
    setup.order_with_status(OrderStatus::Cancelled).await;

    let ascending = setup.list("sortColumn=status&sortDirection=ASC").await;
    assert_eq!(
        statuses(&ascending),
        vec![
            OrderStatus::Pending,
            OrderStatus::Shipped,
            OrderStatus::Cancelled
        ]
    );

    let descending = setup.list("sortColumn=status&sortDirection=DESC").await;
    assert_eq!(
        statuses(&descending),
        vec![
            OrderStatus::Cancelled,
            OrderStatus::Shipped,
            OrderStatus::Pending
        ]
    );
}

#[tokio::test]
async fn test_get_order_list_status_sort_ignores_alphabetical_and_insertion_order() {
    let setup = setup().await;
    // alphabetical insertion
    for status in [
        OrderStatus::Cancelled,
        OrderStatus::Delivered,
        OrderStatus::Paid,
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Refunded,
        OrderStatus::Shipped,
    ] {
        setup.order_with_status(status).await;
    }

    let ascending = setup.list("sortColumn=status&sortDirection=ASC").await;
    assert_eq!(
        statuses(&ascending),
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Refunded,
        ]
    );

    let mut descending = statuses(&setup.list("sortColumn=status&sortDirection=DESC").await);
    descending.reverse();
    assert_eq!(descending, statuses(&ascending));
}

#[tokio::test]
async fn test_get_order_list_status_sort_pages_without_gaps() {
    let setup = setup().await;
    for status in [
        OrderStatus::Refunded,
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Pending,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Delivered,
    ] {
        setup.order_with_status(status).await;
    }

    let full = setup
        .list("sortColumn=status&sortDirection=ASC&limit=100")
        .await;

    let mut paged = vec![];
    for page in 1..=3 {
        let result = setup
            .list(&format!(
                "sortColumn=status&sortDirection=ASC&limit=4&page={page}"
            ))
            .await;
        assert_eq!(result.total_items, 9);
        paged.extend(ids(&result));
    }

    assert_eq!(paged, ids(&full));
    assert_eq!(paged.iter().collect::<HashSet<_>>().len(), 9);
}

#[tokio::test]
async fn test_get_order_list_second_page() {
    let setup = setup().await;
    for index in 0..45 {
        setup
            .order(TestOrder {
                number: format!("#{index:04}"),
                created_date: NOW - Duration::minutes(index),
                ..Default::default()
            })
            .await;
    }

    let result = setup.list("page=2&limit=20").await;

    assert_eq!(result.total_items, 45);
    assert_eq!(result.values.len(), 20);
    // newest first, so the second page starts with the 21st newest
    assert_eq!(result.values[0].number, "#0020");
    assert_eq!(result.values[19].number, "#0039");

    let last = setup.list("page=3&limit=20").await;
    assert_eq!(last.values.len(), 5);

    let beyond = setup.list("page=4&limit=20").await;
    assert_eq!(beyond.total_items, 45);
    assert!(beyond.values.is_empty());
}

#[tokio::test]
async fn test_get_order_list_total_range_is_inclusive() {
    let setup = setup().await;
    for total in [9000, 10000, 10500, 11000, 12000] {
        setup
            .order(TestOrder {
                total,
                ..Default::default()
            })
            .await;
    }

    let result = setup
        .list("totalMin=100&totalMax=110&sortColumn=total&sortDirection=ASC")
        .await;

    let totals: Vec<_> = result.values.iter().map(|item| item.total_minor).collect();
    assert_eq!(totals, vec![10000, 10500, 11000]);
    assert_eq!(result.total_items, 3);
}

#[tokio::test]
async fn test_get_order_list_currency_filter() {
    let setup = setup().await;
    setup.order(TestOrder::default()).await;
    let usd = setup
        .order(TestOrder {
            currency: "USD".to_string(),
            ..Default::default()
        })
        .await;

    let result = setup.list("currency=USD").await;

    assert_eq!(ids(&result), vec![usd]);
}

#[tokio::test]
async fn test_get_order_list_time_range_preset() {
    let setup = setup().await;
    let recent = setup
        .order(TestOrder {
            created_date: NOW - Duration::days(1),
            ..Default::default()
        })
        .await;
    setup
        .order(TestOrder {
            created_date: NOW - Duration::days(20),
            ..Default::default()
        })
        .await;

    let result = setup.list("timeRange=7%20DAYS").await;
    assert_eq!(ids(&result), vec![recent]);

    let all = setup.list("timeRange=ALL").await;
    assert_eq!(all.total_items, 2);
}

#[tokio::test]
async fn test_get_order_list_date_range_overrides_preset() {
    let setup = setup().await;
    setup
        .order(TestOrder {
            created_date: NOW - Duration::days(1),
            ..Default::default()
        })
        .await;
    let in_range = setup
        .order(TestOrder {
            created_date: datetime!(2024-03-21 12:00 UTC),
            ..Default::default()
        })
        .await;
    let end_of_range = setup
        .order(TestOrder {
            created_date: datetime!(2024-03-25 23:59:59 UTC),
            ..Default::default()
        })
        .await;
    setup
        .order(TestOrder {
            created_date: datetime!(2024-03-01 12:00 UTC),
            ..Default::default()
        })
        .await;

    let result = setup
        .list("timeRange=7%20DAYS&dateFrom=2024-03-15&dateTo=2024-03-25&sortDirection=ASC")
        .await;

    assert_eq!(ids(&result), vec![in_range, end_of_range]);
}

#[tokio::test]
async fn test_get_order_list_search_ignores_case() {
    let setup = setup().await;
    let ann = setup
        .order(TestOrder {
            customer_name: "Ann Smith".to_string(),
            created_date: NOW - Duration::minutes(1),
            ..Default::default()
        })
        .await;
    let anna = setup
        .order(TestOrder {
            customer_name: "JOANNA Jones".to_string(),
            created_date: NOW - Duration::minutes(2),
            ..Default::default()
        })
        .await;
    setup
        .order(TestOrder {
            customer_name: "Bob Brown".to_string(),
            ..Default::default()
        })
        .await;

    let result = setup
        .list("searchColumn=customerName&searchQuery=aNn")
        .await;

    assert_eq!(ids(&result), vec![ann, anna]);
}

#[tokio::test]
async fn test_get_order_list_search_with_non_ascii_letters() {
    let setup = setup().await;
    let emile = setup
        .order(TestOrder {
            customer_name: "Émile Zola".to_string(),
            ..Default::default()
        })
        .await;
    setup
        .order(TestOrder {
            customer_name: "Emile Durkheim".to_string(),
            ..Default::default()
        })
        .await;

    let exact = setup
        .list("searchColumn=customerName&searchQuery=%C3%89mile")
        .await;
    assert_eq!(ids(&exact), vec![emile]);

    let other_case = setup
        .list("searchColumn=customerName&searchQuery=%C3%89MILE%20zOLA")
        .await;
    assert_eq!(ids(&other_case), vec![emile]);
}

#[tokio::test]
async fn test_get_order_list_search_treats_wildcards_literally() {
    let setup = setup().await;
    let percent = setup
        .order(TestOrder {
            number: "#100%".to_string(),
            ..Default::default()
        })
        .await;
    setup
        .order(TestOrder {
            number: "#1000".to_string(),
            ..Default::default()
        })
        .await;
    let underscore = setup
        .order(TestOrder {
            number: "#A_B".to_string(),
            ..Default::default()
        })
        .await;
    setup
        .order(TestOrder {
            number: "#AXB".to_string(),
            ..Default::default()
        })
        .await;

    let result = setup.list("searchColumn=number&searchQuery=0%25").await;
    assert_eq!(ids(&result), vec![percent]);

    let result = setup.list("searchColumn=number&searchQuery=a_b").await;
    assert_eq!(ids(&result), vec![underscore]);
}

#[tokio::test]
async fn test_get_order_list_address_conditions_are_conjunctive() {
    let setup = setup().await;
    let paris_france = setup
        .order(TestOrder {
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            ..Default::default()
        })
        .await;
    setup
        .order(TestOrder {
            city: Some("Paris".to_string()),
            country: Some("USA".to_string()),
            ..Default::default()
        })
        .await;
    setup
        .order(TestOrder {
            city: Some("Lyon".to_string()),
            country: Some("France".to_string()),
            ..Default::default()
        })
        .await;
    setup.order(TestOrder::default()).await;

    let result = setup
        .list(
            "addressConditions[0][type]=city&addressConditions[0][value]=paris\
             &addressConditions[1][type]=country&addressConditions[1][value]=FRANCE",
        )
        .await;

    assert_eq!(ids(&result), vec![paris_france]);
}

#[tokio::test]
async fn test_get_order_list_products_must_all_be_present() {
    let setup = setup().await;
    let first = ProductId::new_v4();
    let second = ProductId::new_v4();

    let both = setup.order(TestOrder::default()).await;
    insert_order_line(&setup.db, both, first, false).await.unwrap();
    insert_order_line(&setup.db, both, second, false).await.unwrap();

    let second_free = setup.order(TestOrder::default()).await;
    insert_order_line(&setup.db, second_free, first, false)
        .await
        .unwrap();
    insert_order_line(&setup.db, second_free, second, true)
        .await
        .unwrap();

    let only_second = setup.order(TestOrder::default()).await;
    insert_order_line(&setup.db, only_second, second, false)
        .await
        .unwrap();

    let result = setup
        .list(&format!("productIds[0]={first}&productIds[1]={second}"))
        .await;
    assert_eq!(ids(&result), vec![both]);

    let result = setup.list(&format!("productIds[0]={second}")).await;
    assert_eq!(result.total_items, 2);
    assert!(!ids(&result).contains(&second_free));
}

#[tokio::test]
async fn test_get_order_list_combined_filters_and_count_agree() {
    let setup = setup().await;
    for (status, total) in [
        (OrderStatus::Pending, 5000),
        (OrderStatus::Paid, 15000),
        (OrderStatus::Paid, 25000),
        (OrderStatus::Shipped, 25000),
        (OrderStatus::Refunded, 25000),
    ] {
        setup
            .order(TestOrder {
                status,
                total,
                ..Default::default()
            })
            .await;
    }

    let result = setup
        .list(
            "statuses[0]=PAID&statuses[1]=SHIPPED&totalMin=100\
             &sortColumn=status&sortDirection=DESC&limit=2",
        )
        .await;

    assert_eq!(result.total_items, 3);
    assert_eq!(
        statuses(&result),
        vec![OrderStatus::Shipped, OrderStatus::Paid]
    );
}
