use crate::common::{BASE_URL, LISTED_INFO_BODY, MockTransport, client};
use jquants_client::prelude::*;
use reqwest::Method;
use rust_decimal_macros::dec;

#[tokio::test]
async fn get_listed_info_builds_request_and_decodes_page() {
    let transport = MockTransport::replying(200, LISTED_INFO_BODY);
    let query = ListedInfoQuery::builder()
        .code("86970")
        .date("2024-02-09")
        .pagination_key("next-0")
        .build();

    let page = client(transport.clone())
        .get_listed_info(Some(&query))
        .await
        .unwrap();

    assert_eq!(page.info.len(), 1);
    let item = &page.info[0];
    assert_eq!(item.code, "86970");
    assert_eq!(item.company_name_english, "Japan Exchange Group,Inc.");
    assert_eq!(item.base_price.unwrap().to_string(), "1234.0");
    assert_eq!(item.base_price, Some(dec!(1234)));
    assert_eq!(page.pagination_key.as_deref(), Some("next-1"));

    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(
        request.url.as_str(),
        "https://api.jquants.com/v1/listed/info?code=86970&date=2024-02-09&pagination_key=next-0"
    );
    assert_eq!(request.header("Authorization"), Some("Bearer dummy-token"));
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn get_listed_info_without_query_has_no_query_string() {
    let transport = MockTransport::replying(200, r#"{"info": [], "pagination_key": null}"#);

    let page = client(transport.clone())
        .get_listed_info(None)
        .await
        .unwrap();

    assert!(page.info.is_empty());
    assert_eq!(page.pagination_key, None);
    let request = transport.last_request();
    assert_eq!(request.url.as_str(), "https://api.jquants.com/v1/listed/info");
    assert_eq!(request.header("Authorization"), Some("Bearer dummy-token"));
}

#[tokio::test]
async fn get_listed_info_with_empty_query_matches_none() {
    let transport = MockTransport::replying(200, "{}");

    client(transport.clone())
        .get_listed_info(Some(&ListedInfoQuery::builder().code(" ").build()))
        .await
        .unwrap();

    assert_eq!(transport.last_request().url.query(), None);
}

#[tokio::test]
async fn get_listed_info_encodes_parameters() {
    let transport = MockTransport::replying(200, "{}");
    let query = ListedInfoQuery::builder().pagination_key("a b&c").build();

    client(transport.clone())
        .get_listed_info(Some(&query))
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().url.query(),
        Some("pagination_key=a+b%26c")
    );
}

#[tokio::test]
async fn error_message_comes_from_json_body() {
    let transport = MockTransport::replying(400, r#"{"message":"無効なリクエスト"}"#);

    let err = client(transport).get_listed_info(None).await.unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    let message = err.to_string();
    assert!(message.contains("status=400"));
    assert!(message.contains("無効なリクエスト"));
}

#[tokio::test]
async fn non_json_error_body_is_reported_verbatim() {
    let transport = MockTransport::replying(400, "NON_JSON_RESPONSE");

    let err = client(transport).get_listed_info(None).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("status=400"));
    assert!(message.contains("NON_JSON_RESPONSE"));
}

#[tokio::test]
async fn json_error_body_without_message_uses_generic_text() {
    let transport = MockTransport::replying(500, r#"{"error":"boom"}"#);

    let err = client(transport).get_listed_info(None).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "api error: status=500, message=API request failed"
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_json_error() {
    let transport = MockTransport::replying(200, r#"{"info": "oops"}"#);

    let err = client(transport).get_listed_info(None).await.unwrap_err();

    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn transport_failure_is_propagated() {
    let transport = MockTransport::with_responses(vec![]);

    let err = client(transport).get_listed_info(None).await.unwrap_err();

    assert!(err.is_transport_error());
}

#[tokio::test]
async fn get_all_listed_info_follows_pagination_keys() {
    let transport = MockTransport::with_responses(vec![
        HttpResponse::new(200, r#"{"info":[{"Code":"1"},{"Code":"2"}],"pagination_key":"k1"}"#),
        HttpResponse::new(200, r#"{"info":[{"Code":"3"}],"pagination_key":"k2"}"#),
        HttpResponse::new(200, r#"{"info":[{"Code":"4"}]}"#),
    ]);
    let query = ListedInfoQuery::builder().date("2024-02-09").build();

    let records = client(transport.clone())
        .get_all_listed_info(Some(&query))
        .await
        .unwrap();

    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["1", "2", "3", "4"]);

    let queries: Vec<Option<String>> = transport
        .requests()
        .iter()
        .map(|r| r.url.query().map(String::from))
        .collect();
    assert_eq!(
        queries,
        vec![
            Some("date=2024-02-09".to_string()),
            Some("date=2024-02-09&pagination_key=k1".to_string()),
            Some("date=2024-02-09&pagination_key=k2".to_string()),
        ]
    );
}

#[tokio::test]
async fn get_all_listed_info_fails_when_a_page_fails() {
    let transport = MockTransport::with_responses(vec![
        HttpResponse::new(200, r#"{"info":[{"Code":"1"}],"pagination_key":"k1"}"#),
        HttpResponse::new(429, r#"{"message":"Too Many Requests"}"#),
    ]);

    let err = client(transport.clone())
        .get_all_listed_info(None)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(429));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn get_all_listed_info_stops_on_repeated_key() {
    let transport = MockTransport::with_responses(vec![
        HttpResponse::new(200, r#"{"info":[],"pagination_key":"same"}"#),
        HttpResponse::new(200, r#"{"info":[],"pagination_key":"same"}"#),
    ]);

    let err = client(transport.clone())
        .get_all_listed_info(None)
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn get_all_listed_info_stops_when_keys_cycle() {
    let transport = MockTransport::with_responses(vec![
        HttpResponse::new(200, r#"{"info":[{"Code":"1"}],"pagination_key":"A"}"#),
        HttpResponse::new(200, r#"{"info":[{"Code":"2"}],"pagination_key":"B"}"#),
        HttpResponse::new(200, r#"{"info":[{"Code":"3"}],"pagination_key":"A"}"#),
        HttpResponse::new(200, r#"{"info":[{"Code":"4"}],"pagination_key":"B"}"#),
    ]);

    let err = client(transport.clone())
        .get_all_listed_info(None)
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    assert!(err.to_string().contains("pagination key repeated: A"));
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn get_all_listed_info_rejects_return_to_starting_key() {
    let transport = MockTransport::with_responses(vec![
        HttpResponse::new(200, r#"{"info":[],"pagination_key":"B"}"#),
        HttpResponse::new(200, r#"{"info":[],"pagination_key":"A"}"#),
    ]);
    let query = ListedInfoQuery::builder().pagination_key("A").build();

    let err = client(transport.clone())
        .get_all_listed_info(Some(&query))
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn blank_id_token_is_rejected() {
    for token in ["", "  "] {
        let transport = MockTransport::with_responses(vec![]);
        let err = JQuantsClient::with_transport(token, BASE_URL, transport)
            .err()
            .unwrap();
        assert!(err.is_validation_error());
    }
}

#[test]
fn client_base_url_gets_trailing_slash() {
    let transport = MockTransport::with_responses(vec![]);
    let client = JQuantsClient::with_transport("t", "http://localhost:8080/api", transport).unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/");
}

#[tokio::test]
async fn client_under_custom_base_path_keeps_prefix() {
    let transport = MockTransport::replying(200, "{}");
    let client =
        JQuantsClient::with_transport("t", "http://localhost:8080/api", transport.clone()).unwrap();

    client.get_listed_info(None).await.unwrap();

    assert_eq!(
        transport.last_request().url.as_str(),
        "http://localhost:8080/api/listed/info"
    );
}
