//! Integration tests for pluggy-rs against a local mock of the Pluggy API.
//!
//! Every test starts its own `wiremock` server, so they run in parallel and
//! need no credentials or network access.
//!
//! Run with: cargo test --test api_tests
//! Set RUST_LOG=pluggy_rs=debug to see request logs.

use std::collections::HashMap;
use std::sync::Once;

use chrono::NaiveDate;
use futures_util::StreamExt;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pluggy_rs::prelude::*;

static INIT: Once = Once::new();

const API_KEY: &str = "test-api-key";

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(server.uri())
}

/// Client holding a known API key, pointed at the mock server
fn create_client(server: &MockServer) -> PluggyClient {
    init_logging();
    PluggyClient::with_api_key(ApiKey::new(API_KEY), config_for(server)).unwrap()
}

fn page_body(page: u32, total: u64, total_pages: u32, results: Vec<Value>) -> Value {
    json!({
        "page": page,
        "total": total,
        "totalPages": total_pages,
        "results": results,
    })
}

fn account_json(n: usize) -> Value {
    json!({
        "id": format!("acc-{n}"),
        "type": "BANK",
        "subtype": "CHECKING_ACCOUNT",
        "itemId": "item-1",
        "balance": 100.5,
    })
}

fn transaction_json(id: &str) -> Value {
    json!({
        "id": id,
        "description": "PIX Maria",
        "amount": -42.5,
        "date": "2024-03-01T12:30:00.000Z",
        "type": "DEBIT",
        "accountId": "acc-1",
    })
}

fn item_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "connectorId": 201,
        "status": status,
        "executionStatus": "SUCCESS",
    })
}

/// Page numbers requested so far, in order
async fn requested_pages(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "page")
                .map(|(_, v)| v.into_owned())
        })
        .collect()
}

// ============================================================================
// AUTHENTICATION TESTS
// ============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_authenticate_success() {
        init_logging();
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth"))
            .and(body_json(json!({"clientId": "client-id", "clientSecret": "client-secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apiKey": "key-123"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = PluggyClient::authenticate_with_config(
            Credentials::new("client-id", "client-secret"),
            config_for(&server),
        )
        .await
        .unwrap();

        assert_eq!(client.api_key().expose(), "key-123");
        assert!(!format!("{client:?}").contains("key-123"));
    }

    #[tokio::test]
    async fn test_authenticate_invalid_credentials() {
        init_logging();
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": 401,
                "codeDescription": "INVALID_CREDENTIALS",
                "message": "Invalid credentials"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = PluggyClient::authenticate_with_config(
            Credentials::new("client-id", "wrong"),
            config_for(&server),
        )
        .await;

        match result {
            Err(Error::Unauthorized(details)) => {
                assert_eq!(details.code_description, "INVALID_CREDENTIALS");
                assert_eq!(details.message, "Invalid credentials");
            }
            other => panic!("Expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_authenticate_empty_key_is_schema_error() {
        init_logging();
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apiKey": ""})))
            .mount(&server)
            .await;

        let result = PluggyClient::authenticate_with_config(
            Credentials::new("client-id", "client-secret"),
            config_for(&server),
        )
        .await;
        assert!(matches!(result, Err(Error::SchemaValidation { .. })));
    }

    #[tokio::test]
    async fn test_authenticate_is_never_cached() {
        init_logging();
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"apiKey": "key-123"})))
            .expect(2)
            .mount(&server)
            .await;

        for _ in 0..2 {
            PluggyClient::authenticate_with_config(
                Credentials::new("client-id", "client-secret"),
                config_for(&server),
            )
            .await
            .unwrap();
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        init_logging();
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
        let result =
            PluggyClient::authenticate_with_config(Credentials::new("id", "secret"), config).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_invalid_base_url_rejected() {
        let config = ClientConfig::default().with_base_url("ftp://api.pluggy.ai");
        let result = PluggyClient::with_api_key(ApiKey::new(API_KEY), config);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}

// ============================================================================
// ACCOUNTS SERVICE TESTS
// ============================================================================

mod accounts_tests {
    use super::*;

    #[tokio::test]
    async fn test_api_key_header_attached() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/accounts/acc-1"))
            .and(header("X-API-KEY", API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_json(1)))
            .expect(1)
            .mount(&server)
            .await;

        let account = client.accounts().get("acc-1").await.unwrap();
        assert_eq!(account.id, "acc-1");
        assert_eq!(account.balance, Some(dec!(100.5)));
    }

    #[tokio::test]
    async fn test_list_omits_absent_filters() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(query_param("itemId", "item-1"))
            .and(query_param_is_missing("type"))
            .and(query_param("page", "1"))
            .and(query_param("pageSize", "20"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(1, 1, 1, vec![account_json(1)])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let page = client
            .accounts()
            .list(&AccountsQuery::new("item-1"), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.results.len(), 1);
        assert!(!page.has_more());
    }

    #[tokio::test]
    async fn test_list_sends_type_filter() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(query_param("type", "CREDIT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 0, 0, vec![])))
            .expect(1)
            .mount(&server)
            .await;

        let query = AccountsQuery::new("item-1").with_type(AccountType::Credit);
        let page = client.accounts().list(&query, PageRequest::default()).await.unwrap();
        assert!(page.results.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_concatenates_three_pages() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        let ranges = [(1, 0..50), (2, 50..100), (3, 100..107)];
        for (page, range) in ranges {
            Mock::given(method("GET"))
                .and(path("/accounts"))
                .and(query_param("page", page.to_string()))
                .and(query_param("pageSize", "50"))
                .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                    page,
                    107,
                    3,
                    range.map(account_json).collect(),
                )))
                .expect(1)
                .mount(&server)
                .await;
        }

        let accounts = client
            .accounts()
            .list_all(&AccountsQuery::new("item-1"), 50)
            .await
            .unwrap();

        assert_eq!(accounts.len(), 107);
        let ids: Vec<String> = accounts.into_iter().map(|a| a.id).collect();
        let expected: Vec<String> = (0..107).map(|n| format!("acc-{n}")).collect();
        assert_eq!(ids, expected);
        assert_eq!(requested_pages(&server).await, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_list_all_empty_first_page() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 0, 0, vec![])))
            .expect(1)
            .mount(&server)
            .await;

        let accounts = client
            .accounts()
            .list_all(&AccountsQuery::new("item-1"), 50)
            .await
            .unwrap();
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_aborts_on_failed_page() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(1, 107, 3, vec![account_json(1)])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "code": 500,
                "codeDescription": "INTERNAL_ERROR",
                "message": "boom"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/accounts"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(3, 107, 3, vec![])))
            .expect(0)
            .mount(&server)
            .await;

        let result = client
            .accounts()
            .list_all(&AccountsQuery::new("item-1"), 50)
            .await;

        match result {
            Err(Error::InternalServer(details)) => assert_eq!(details.message, "boom"),
            other => panic!("Expected InternalServer, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_all_page_cap() {
        let server = MockServer::start().await;
        init_logging();
        let client = PluggyClient::with_api_key(
            ApiKey::new(API_KEY),
            config_for(&server).with_max_pages(Some(2)),
        )
        .unwrap();

        Mock::given(method("GET"))
            .and(path("/accounts"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(1, 500, 10, vec![account_json(1)])),
            )
            .expect(2)
            .mount(&server)
            .await;

        let result = client
            .accounts()
            .list_all(&AccountsQuery::new("item-1"), 50)
            .await;
        assert!(matches!(result, Err(Error::PageLimitExceeded { max_pages: 2 })));
    }

    #[tokio::test]
    async fn test_stream_yields_every_account() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        for page in 1..=2u32 {
            let start = (page as usize - 1) * 2;
            Mock::given(method("GET"))
                .and(path("/accounts"))
                .and(query_param("page", page.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                    page,
                    4,
                    2,
                    (start..start + 2).map(account_json).collect(),
                )))
                .expect(1)
                .mount(&server)
                .await;
        }

        let accounts: Vec<_> = client
            .accounts()
            .stream(AccountsQuery::new("item-1"), 2)
            .collect()
            .await;

        let ids: Vec<String> = accounts.into_iter().map(|a| a.unwrap().id).collect();
        assert_eq!(ids, vec!["acc-0", "acc-1", "acc-2", "acc-3"]);
    }

    #[tokio::test]
    async fn test_stream_ignores_echoed_page_number() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/accounts"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(1, 3, 3, vec![account_json(1)])),
            )
            .expect(3)
            .mount(&server)
            .await;

        let accounts: Vec<_> = client
            .accounts()
            .stream(AccountsQuery::new("item-1"), 1)
            .take(20)
            .collect()
            .await;

        assert_eq!(accounts.len(), 3);
        assert!(accounts.iter().all(|a| a.is_ok()));
        assert_eq!(requested_pages(&server).await, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_stream_page_cap() {
        let server = MockServer::start().await;
        init_logging();
        let client = PluggyClient::with_api_key(
            ApiKey::new(API_KEY),
            config_for(&server).with_max_pages(Some(2)),
        )
        .unwrap();

        Mock::given(method("GET"))
            .and(path("/accounts"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page_body(1, 500, 10, vec![account_json(1)])),
            )
            .expect(2)
            .mount(&server)
            .await;

        let results: Vec<_> = client
            .accounts()
            .stream(AccountsQuery::new("item-1"), 50)
            .take(20)
            .collect()
            .await;

        assert_eq!(results.len(), 3);
        assert!(results[..2].iter().all(|r| r.is_ok()));
        assert!(matches!(results[2], Err(Error::PageLimitExceeded { max_pages: 2 })));
        assert_eq!(requested_pages(&server).await, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_unknown_type_filter_rejected() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        let accounts = AccountsQuery::new("item-1").with_type(AccountType::Unknown);
        assert!(matches!(
            client.accounts().list(&accounts, PageRequest::default()).await,
            Err(Error::InvalidInput(_))
        ));
        let mut stream = client.accounts().stream(accounts, 50);
        assert!(matches!(stream.next().await, Some(Err(Error::InvalidInput(_)))));

        let investments = InvestmentsQuery::new("item-1").with_type(InvestmentType::Unknown);
        assert!(matches!(
            client.investments().list_all(&investments, 50).await,
            Err(Error::InvalidInput(_))
        ));

        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_blank_ids_rejected_without_request() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        assert!(matches!(client.accounts().get("  ").await, Err(Error::InvalidInput(_))));
        assert!(matches!(
            client.accounts().list_all(&AccountsQuery::new(""), 50).await,
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            client.accounts().list_all(&AccountsQuery::new("item-1"), 0).await,
            Err(Error::InvalidInput(_))
        ));

        let mut stream = client.accounts().stream(AccountsQuery::new(""), 50);
        assert!(matches!(stream.next().await, Some(Err(Error::InvalidInput(_)))));
        assert!(stream.next().await.is_none());

        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_schema_mismatch() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/accounts/acc-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "acc-1"})))
            .mount(&server)
            .await;

        match client.accounts().get("acc-1").await {
            Err(Error::SchemaValidation { context, .. }) => {
                assert_eq!(context, "GET /accounts/acc-1");
            }
            other => panic!("Expected SchemaValidation, got {other:?}"),
        }
    }
}

// ============================================================================
// ERROR MAPPING TESTS
// ============================================================================

mod error_tests {
    use super::*;

    async fn get_with_response(response: ResponseTemplate) -> Error {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/items/item-1"))
            .respond_with(response)
            .mount(&server)
            .await;

        client.items().get(&ItemId::new("item-1")).await.unwrap_err()
    }

    #[tokio::test]
    async fn test_not_found_keeps_body_fields() {
        let err = get_with_response(ResponseTemplate::new(404).set_body_json(json!({
            "code": 404,
            "codeDescription": "ITEM_NOT_FOUND",
            "message": "Item not found"
        })))
        .await;

        match err {
            Error::NotFound(details) => {
                assert_eq!(details.status, 404);
                assert_eq!(details.code, 404);
                assert_eq!(details.code_description, "ITEM_NOT_FOUND");
                assert_eq!(details.message, "Item not found");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_body_kept_as_message() {
        let err = get_with_response(ResponseTemplate::new(502).set_body_string("upstream down")).await;
        assert!(err.is_server_error());
        let details = err.api_error().unwrap();
        assert_eq!(details.code, 502);
        assert_eq!(details.message, "upstream down");
    }

    #[tokio::test]
    async fn test_empty_body_uses_reason_phrase() {
        let err = get_with_response(ResponseTemplate::new(503)).await;
        assert_eq!(err.api_error().unwrap().message, "Service Unavailable");
    }

    #[tokio::test]
    async fn test_other_statuses() {
        let err = get_with_response(ResponseTemplate::new(409).set_body_json(json!({
            "code": 409,
            "message": "Item update requested too soon"
        })))
        .await;
        assert!(matches!(err, Error::Conflict(_)));

        let err = get_with_response(ResponseTemplate::new(400)).await;
        assert!(matches!(err, Error::BadRequest(_)));

        let err = get_with_response(ResponseTemplate::new(401)).await;
        assert!(err.is_auth_error());

        let err = get_with_response(ResponseTemplate::new(403)).await;
        assert!(matches!(err, Error::Api(ref d) if d.status == 403));
    }
}

// ============================================================================
// TRANSACTIONS SERVICE TESTS
// ============================================================================

mod transactions_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_with_filters() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/transactions"))
            .and(query_param("accountId", "acc-1"))
            .and(query_param("ids", "tx-1,tx-2"))
            .and(query_param("from", "2024-01-01"))
            .and(query_param("to", "2024-01-31"))
            .and(query_param_is_missing("billId"))
            .and(query_param_is_missing("createdAtFrom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                1,
                2,
                1,
                vec![transaction_json("tx-1"), transaction_json("tx-2")],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let query = TransactionsQuery::new("acc-1")
            .ids(["tx-1", "tx-2"])
            .from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .to(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        let page = client
            .transactions()
            .list(&query, PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].amount, dec!(-42.5));
    }

    #[tokio::test]
    async fn test_update_category() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        let mut updated = transaction_json("tx-1");
        updated["categoryId"] = json!("05070000");

        Mock::given(method("PATCH"))
            .and(path("/transactions/tx-1"))
            .and(body_json(json!({"category": "05070000"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(updated))
            .expect(1)
            .mount(&server)
            .await;

        let tx = client
            .transactions()
            .update_category("tx-1", "05070000")
            .await
            .unwrap();
        assert_eq!(tx.category_id.as_deref(), Some("05070000"));
    }

    #[tokio::test]
    async fn test_wrongly_typed_amount_fails() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        let mut broken = transaction_json("tx-1");
        broken["amount"] = json!("a lot");

        Mock::given(method("GET"))
            .and(path("/transactions/tx-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(broken))
            .mount(&server)
            .await;

        let result = client.transactions().get("tx-1").await;
        assert!(matches!(result, Err(Error::SchemaValidation { .. })));
    }
}

// ============================================================================
// INVESTMENTS AND OTHER READ-ONLY SERVICES
// ============================================================================

mod products_tests {
    use super::*;

    #[tokio::test]
    async fn test_investment_transactions() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/investments/inv-1/transactions"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                1,
                1,
                1,
                vec![json!({"id": "it-1", "type": "BUY", "amount": 1000, "quantity": 10.5})],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let movements = client
            .investments()
            .list_all_transactions("inv-1", 50)
            .await
            .unwrap();
        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].amount, Some(dec!(1000)));
    }

    #[tokio::test]
    async fn test_investments_type_filter() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/investments"))
            .and(query_param("itemId", "item-1"))
            .and(query_param("type", "FIXED_INCOME"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                1,
                1,
                1,
                vec![json!({
                    "id": "inv-1",
                    "itemId": "item-1",
                    "type": "FIXED_INCOME",
                    "balance": 2500.75,
                    "date": "2024-02-01T00:00:00.000Z"
                })],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let query = InvestmentsQuery::new("item-1").with_type(InvestmentType::FixedIncome);
        let investments = client.investments().list_all(&query, 50).await.unwrap();
        assert_eq!(investments[0].balance, dec!(2500.75));
    }

    #[tokio::test]
    async fn test_item_scoped_listings() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        let loan = json!({"id": "loan-1", "itemId": "item-1", "contractAmount": 12000});
        let benefit = json!({"id": "ben-1", "itemId": "item-1"});
        let consent = json!({"id": "c-1", "itemId": "item-1", "products": ["ACCOUNTS"]});
        for (resource, record) in [("/loans", loan), ("/benefits", benefit), ("/consents", consent)] {
            Mock::given(method("GET"))
                .and(path(resource))
                .and(query_param("itemId", "item-1"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(page_body(1, 1, 1, vec![record])),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let query = ItemQuery::new("item-1");
        assert_eq!(client.loans().list_all(&query, 50).await.unwrap().len(), 1);
        assert_eq!(client.benefits().list_all(&query, 50).await.unwrap().len(), 1);
        assert_eq!(client.consents().list_all(&query, 50).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_bills_by_account() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/bills"))
            .and(query_param("accountId", "card-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                1,
                1,
                1,
                vec![json!({"id": "bill-1", "accountId": "card-1", "totalAmount": 830.25})],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let bills = client
            .bills()
            .list_all(&AccountQuery::new("card-1"), 50)
            .await
            .unwrap();
        assert_eq!(bills[0].total_amount, Some(dec!(830.25)));
    }

    #[tokio::test]
    async fn test_identity_by_item() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/identity"))
            .and(query_param("itemId", "item-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "id-1",
                "itemId": "item-1",
                "fullName": "Maria Silva"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let identity = client
            .identity()
            .find_by_item(&ItemId::new("item-1"))
            .await
            .unwrap();
        assert_eq!(identity.full_name.as_deref(), Some("Maria Silva"));
    }
}

// ============================================================================
// CATEGORIES SERVICE TESTS
// ============================================================================

mod categories_tests {
    use super::*;

    #[tokio::test]
    async fn test_children_filter_and_rules() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("GET"))
            .and(path("/categories"))
            .and(query_param("parentId", "05000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                1,
                1,
                1,
                vec![json!({"id": "05070000", "description": "PIX", "parentId": "05000000"})],
            )))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/categories/rules"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
                1,
                1,
                1,
                vec![json!({"description": "UBER", "categoryId": "19000000"})],
            )))
            .expect(1)
            .mount(&server)
            .await;

        let children = client
            .categories()
            .list_all(&CategoriesQuery::children_of("05000000"), 50)
            .await
            .unwrap();
        assert!(!children[0].is_root());

        let rules = client.categories().rules().await.unwrap();
        assert_eq!(rules.results[0].description, "UBER");
    }

    #[tokio::test]
    async fn test_create_rule() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("POST"))
            .and(path("/categories/rules"))
            .and(body_json(json!({
                "description": "UBER",
                "categoryId": "19000000",
                "matchType": "contains"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "description": "UBER",
                "categoryId": "19000000",
                "clientId": "client-1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let rule = CreateCategoryRule::new("UBER", "19000000").with_match_type("contains");
        let created = client.categories().create_rule(&rule).await.unwrap();
        assert_eq!(created.client_id.as_deref(), Some("client-1"));
    }
}

// ============================================================================
// ITEMS AND WEBHOOKS (MUTATIONS)
// ============================================================================

mod mutation_tests {
    use super::*;

    #[tokio::test]
    async fn test_item_lifecycle() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        Mock::given(method("POST"))
            .and(path("/items"))
            .and(body_json(json!({
                "connectorId": 201,
                "parameters": {"user": "user-ok", "password": "password-ok"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json("item-1", "UPDATING")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/items/item-1/mfa"))
            .and(body_json(json!({"token": "123456"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json("item-1", "UPDATED")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/items/item-1"))
            .and(body_json(json!({"webhookUrl": "https://example.com/hook"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json("item-1", "UPDATING")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/items/item-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateItemRequest::new(201)
            .with_parameter("user", "user-ok")
            .with_parameter("password", "password-ok");
        let item = client.items().create(&request).await.unwrap();
        assert_eq!(item.status, Some(ItemStatus::Updating));

        let mut mfa = HashMap::new();
        mfa.insert("token".to_string(), json!("123456"));
        let item = client.items().send_mfa(&item.item_id(), &mfa).await.unwrap();
        assert_eq!(item.status, Some(ItemStatus::Updated));

        let update = UpdateItemRequest {
            webhook_url: Some("https://example.com/hook".into()),
            ..Default::default()
        };
        client.items().update(&item.item_id(), &update).await.unwrap();

        let deleted = client.items().delete(&item.item_id()).await.unwrap();
        assert_eq!(deleted.count, 1);
    }

    #[tokio::test]
    async fn test_webhook_lifecycle() {
        let server = MockServer::start().await;
        let client = create_client(&server);

        let webhook = json!({"id": "wh-1", "url": "https://example.com/hook", "event": "item/updated"});

        Mock::given(method("POST"))
            .and(path("/webhooks"))
            .and(body_json(json!({"url": "https://example.com/hook", "event": "item/updated"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(webhook.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/webhooks/wh-1"))
            .and(body_json(json!({"url": "https://example.com/hook", "event": "all"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "wh-1",
                "url": "https://example.com/hook",
                "event": "all"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/webhooks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(1, 1, 1, vec![webhook])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/webhooks/wh-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let created = client
            .webhooks()
            .create(&WebhookRequest::new("https://example.com/hook", "item/updated"))
            .await
            .unwrap();
        assert!(created.is_enabled());

        let updated = client
            .webhooks()
            .update(&created.id, &WebhookRequest::new("https://example.com/hook", "all"))
            .await
            .unwrap();
        assert_eq!(updated.event, "all");

        let all = client.webhooks().list_all(50).await.unwrap();
        assert_eq!(all.len(), 1);

        assert_eq!(client.webhooks().delete("wh-1").await.unwrap().count, 1);
    }
}
