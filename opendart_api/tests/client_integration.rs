use opendart_api::{Client, Error, ReportType};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "test-key").unwrap()
}

#[tokio::test]
async fn company_profile_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("company.json");

    Mock::given(method("GET"))
        .and(path("/api/company.json"))
        .and(query_param("crtfc_key", "test-key"))
        .and(query_param("corp_code", "00126380"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let profile = client.company_profile("00126380").await.unwrap();
    assert_eq!(profile.corp_name, "삼성전자(주)");
    assert_eq!(profile.labeled_fields().len(), 17);
}

#[tokio::test]
async fn company_profile_no_data_carries_api_message() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("company_nodata.json");

    Mock::given(method("GET"))
        .and(path("/api/company.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.company_profile("12345678").await.unwrap_err();
    match err {
        Error::NoData { status, message } => {
            assert_eq!(status, "013");
            assert_eq!(message, "조회된 데이타가 없습니다.");
        }
        other => panic!("expected NoData, got {:?}", other),
    }
}

#[tokio::test]
async fn company_profile_missing_field_is_shape_error() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("company_partial.json");

    Mock::given(method("GET"))
        .and(path("/api/company.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.company_profile("00126380").await.unwrap_err();
    match err {
        Error::UnexpectedShape { detail } => assert!(detail.contains("ceo_nm")),
        other => panic!("expected UnexpectedShape, got {:?}", other),
    }
}

#[tokio::test]
async fn company_profile_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/company.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.company_profile("00126380").await.unwrap_err();
    match err {
        Error::HttpStatus { status, .. } => assert_eq!(status, 500),
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn company_profile_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/company.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.company_profile("00126380").await;
    assert!(matches!(result, Err(Error::UnexpectedShape { .. })));
}

#[tokio::test]
async fn financials_success_returns_list_verbatim() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("fnltt_single.json");

    Mock::given(method("GET"))
        .and(path("/api/fnlttSinglAcnt.json"))
        .and(query_param("corp_code", "00126380"))
        .and(query_param("bsns_year", "2023"))
        .and(query_param("reprt_code", "11013"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let items = client
        .single_account_financials("00126380", "2023", ReportType::FirstQuarter)
        .await
        .unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items.iter().filter(|a| a.is_separate()).count(), 3);
}

#[tokio::test]
async fn financials_no_data_carries_api_message() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("fnltt_nodata.json");

    Mock::given(method("GET"))
        .and(path("/api/fnlttSinglAcnt.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .single_account_financials("00126380", "2023", ReportType::FirstQuarter)
        .await
        .unwrap_err();
    match err {
        Error::NoData { message, .. } => assert_eq!(message, "조회된 데이타가 없습니다."),
        other => panic!("expected NoData, got {:?}", other),
    }
}

#[tokio::test]
async fn financials_empty_list_is_ok_not_error() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("fnltt_empty.json");

    Mock::given(method("GET"))
        .and(path("/api/fnlttSinglAcnt.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let items = client
        .single_account_financials("00126380", "2023", ReportType::FirstQuarter)
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn in_band_rate_limit_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/fnlttSinglAcnt.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":"020","message":"요청 제한을 초과하였습니다."}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .single_account_financials("00126380", "2023", ReportType::Annual)
        .await
        .unwrap_err();
    match err {
        Error::Api { status, .. } => assert_eq!(status, "020"),
        other => panic!("expected Api, got {:?}", other),
    }
}

#[tokio::test]
async fn annual_report_uses_its_own_code() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("fnltt_empty.json");

    Mock::given(method("GET"))
        .and(path("/api/fnlttSinglAcnt.json"))
        .and(query_param("reprt_code", "11011"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .single_account_financials("00126380", "2023", ReportType::Annual)
        .await;
    assert!(result.is_ok());
}
