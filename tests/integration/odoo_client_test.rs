// Integration tests for the Odoo JSON-RPC client against a mock server:
// handshake outcomes, query faults, and transport failures.

#[path = "../helpers/mock_odoo.rs"]
mod mock_odoo;

use kiloreport::config::OdooConfig;
use kiloreport::core::{dates, AppError};
use kiloreport::modules::kilos::services::OdooClient;
use mock_odoo::MockOdoo;
use serde_json::json;

fn config_for(url: String) -> OdooConfig {
    OdooConfig {
        // TestServer::url("") ends with a slash; the client appends "/jsonrpc"
        url: url.trim_end_matches('/').to_string(),
        db: "test-db".to_string(),
        username: "svc".to_string(),
        password: "secret".to_string(),
    }
}

#[actix_web::test]
async fn test_rejected_credentials_yield_authentication_error() {
    // Odoo answers `false` instead of a uid for bad credentials
    let mock = MockOdoo::new(json!(false), json!([]));
    let srv = mock.start();

    let err = OdooClient::new(&config_for(srv.url("")))
        .connect()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Authentication(_)));
    // No object call may follow a failed handshake
    assert_eq!(mock.calls(), vec!["common".to_string()]);
}

#[actix_web::test]
async fn test_successful_handshake_and_query() {
    let mock = MockOdoo::new(
        json!(7),
        json!([
            {
                "id": 1,
                "config_id": [5, "Store A"],
                "x_studio_float_field_1u1_1irfgb3un": 3.5
            },
            {
                "id": 2,
                "config_id": [6, "Store B (old)"],
                "x_studio_float_field_1u1_1irfgb3un": false
            }
        ]),
    );
    let srv = mock.start();

    let session = OdooClient::new(&config_for(srv.url("")))
        .connect()
        .await
        .unwrap();
    let (start, end) = dates::resolve_month(5, 2025).unwrap();
    let orders = session.search_orders(start, end).await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].config_id.as_ref().unwrap().label, "Store A");
    assert_eq!(orders[0].kilos, Some(3.5));
    assert_eq!(orders[1].kilos, None);
    assert_eq!(
        mock.calls(),
        vec!["common".to_string(), "object".to_string()]
    );
}

#[actix_web::test]
async fn test_remote_fault_yields_query_error() {
    let mock = MockOdoo::new(json!(7), json!([])).with_fault("Invalid field on pos.order");
    let srv = mock.start();

    let session = OdooClient::new(&config_for(srv.url("")))
        .connect()
        .await
        .unwrap();
    let (start, end) = dates::resolve_day("2025-05-14").unwrap();
    let err = session.search_orders(start, end).await.unwrap_err();

    match err {
        AppError::Query(msg) => assert!(msg.contains("Invalid field on pos.order")),
        other => panic!("expected Query error, got {other:?}"),
    }
}

#[actix_web::test]
async fn test_unreachable_host_yields_connection_error() {
    // Discard port; nothing listens there
    let config = config_for("http://127.0.0.1:9".to_string());

    let err = OdooClient::new(&config).connect().await.unwrap_err();

    assert!(matches!(err, AppError::Connection(_)));
}
