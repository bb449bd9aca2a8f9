//! Mock backend tests for clientele-http.
//!
//! These tests use wiremock to simulate the client backend and the country
//! reference service without requiring network access.

use clientele_core::{
    ClientFormInput, ClientId, ClientService, CollectionManager, CountryDirectory, Error,
    FormField, LoadMore, Operation, ServiceUrl, TransportError,
};
use clientele_http::{HttpClientService, HttpConfig, RestCountries};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_url(server: &MockServer) -> ServiceUrl {
    ServiceUrl::new(format!("http://127.0.0.1:{}/client", server.address().port())).unwrap()
}

fn service(server: &MockServer) -> HttpClientService {
    HttpClientService::new(api_url(server)).unwrap()
}

fn record_json(id: i64, first_name: &str, enabled: bool) -> Value {
    json!({
        "id": id,
        "nombre": first_name,
        "apellidos": "Quispe",
        "direccion": null,
        "numero_documento": 40000000 + id,
        "email": format!("client{id}@example.pe"),
        "edad": 30,
        "telefono": 987654321,
        "fecha_nacimiento": "1990-06-15",
        "pais": "Peru",
        "habilitado": enabled
    })
}

fn list_body(ids: std::ops::Range<i64>, total: u64) -> Value {
    let data: Vec<Value> = ids.map(|id| record_json(id, "Ana", true)).collect();
    json!({
        "data": data,
        "meta": { "recordsTotal": total, "recordsFiltered": total }
    })
}

fn valid_form() -> ClientFormInput {
    let mut form = ClientFormInput::default();
    form.set_text(FormField::FirstName, "Ana");
    form.set_text(FormField::LastName, "Quispe");
    form.set_text(FormField::DocumentNumber, "45678912");
    form.set_text(FormField::Email, "ana@example.pe");
    form.set_text(FormField::Age, "34");
    form.set_text(FormField::BirthDate, "15/06/1990");
    form
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_sends_paging_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client"))
        .and(query_param("search", "ana"))
        .and(query_param("start", "20"))
        .and(query_param("length", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [record_json(21, "Ana", true)],
            "meta": { "recordsTotal": 40, "recordsFiltered": 21 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = service(&server).list("ana", 20, 10).await.unwrap();

    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].id, ClientId::new(21));
    assert_eq!(page.total, 21);
    assert_eq!(page.unfiltered_total, 40);
}

#[tokio::test]
async fn test_list_error_uses_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Base de datos caída" })),
        )
        .mount(&server)
        .await;

    let err = service(&server).list("", 0, 10).await.unwrap_err();

    match err {
        Error::Service(err) => {
            assert_eq!(err.status, 500);
            assert_eq!(err.operation, Operation::List);
            assert_eq!(err.message, "Base de datos caída");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_error_without_body_uses_default_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = service(&server).list("", 0, 10).await.unwrap_err();

    assert_eq!(err.message(), Operation::List.default_message());
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_list_malformed_success_body_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": [] })))
        .mount(&server)
        .await;

    let err = service(&server).list("", 0, 10).await.unwrap_err();

    assert!(matches!(err, Error::Transport(TransportError::Decode { .. })));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = ServiceUrl::new(format!("http://127.0.0.1:{port}/client")).unwrap();
    let config = HttpConfig::default().with_timeout(Duration::from_secs(2));
    let service = HttpClientService::with_config(url, &config).unwrap();

    let err = service.list("", 0, 10).await.unwrap_err();

    assert!(err.is_transport(), "expected transport error, got {err:?}");
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_create_posts_backend_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/client"))
        .and(body_json(json!({
            "nombre": "Ana",
            "apellidos": "Quispe",
            "direccion": null,
            "numero_documento": 45678912,
            "email": "ana@example.pe",
            "edad": 34,
            "telefono": null,
            "fecha_nacimiento": "1990-06-15",
            "pais": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(record_json(7, "Ana", true)))
        .expect(1)
        .mount(&server)
        .await;

    let created = service(&server).create(&valid_form()).await.unwrap();

    assert_eq!(created.id, ClientId::new(7));
    assert!(created.enabled);
}

#[tokio::test]
async fn test_create_conflict_reports_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/client"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "El número de documento ya está registrado"
        })))
        .mount(&server)
        .await;

    let err = service(&server).create(&valid_form()).await.unwrap_err();

    assert_eq!(err.message(), "El número de documento ya está registrado");
}

#[tokio::test]
async fn test_update_puts_to_record_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/client/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(7, "Ana", true)))
        .expect(1)
        .mount(&server)
        .await;

    let updated = service(&server)
        .update(ClientId::new(7), &valid_form())
        .await
        .unwrap();

    assert_eq!(updated.id, ClientId::new(7));
}

#[tokio::test]
async fn test_update_error_without_message_uses_default() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/client/7"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = service(&server)
        .update(ClientId::new(7), &valid_form())
        .await
        .unwrap_err();

    assert_eq!(err.message(), Operation::Update.default_message());
}

#[tokio::test]
async fn test_remove_ignores_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/client/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    service(&server).remove(ClientId::new(7)).await.unwrap();
}

#[tokio::test]
async fn test_remove_missing_record() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/client/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = service(&server).remove(ClientId::new(99)).await.unwrap_err();

    match err {
        Error::Service(err) => {
            assert!(err.is_not_found());
            assert_eq!(err.message, Operation::Delete.default_message());
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_toggle_disables_enabled_client() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/client/7/deshabilitar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(7, "Ana", false)))
        .expect(1)
        .mount(&server)
        .await;

    let record = service(&server)
        .toggle_status(ClientId::new(7), true)
        .await
        .unwrap();

    assert!(!record.enabled);
}

#[tokio::test]
async fn test_toggle_enables_disabled_client() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/client/7/habilitar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(7, "Ana", true)))
        .expect(1)
        .mount(&server)
        .await;

    let record = service(&server)
        .toggle_status(ClientId::new(7), false)
        .await
        .unwrap();

    assert!(record.enabled);
}

// ============================================================================
// Countries
// ============================================================================

#[tokio::test]
async fn test_countries_are_sorted_common_names() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": { "common": "Peru", "official": "Republic of Peru" } },
            { "name": { "common": "Argentina", "official": "Argentine Republic" } },
            { "name": { "common": "Chile", "official": "Republic of Chile" } }
        ])))
        .mount(&server)
        .await;

    let url = ServiceUrl::new(format!("http://127.0.0.1:{}/v3.1", server.address().port())).unwrap();
    let countries = RestCountries::new(url).unwrap().list_countries().await.unwrap();

    assert_eq!(countries, vec!["Argentina", "Chile", "Peru"]);
}

#[tokio::test]
async fn test_countries_failure_uses_default_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let url = ServiceUrl::new(format!("http://127.0.0.1:{}/v3.1", server.address().port())).unwrap();
    let err = RestCountries::new(url).unwrap().list_countries().await.unwrap_err();

    assert_eq!(err.message(), Operation::Countries.default_message());
}

// ============================================================================
// Collection manager over HTTP
// ============================================================================

#[tokio::test]
async fn test_manager_pages_through_backend() {
    let server = MockServer::start().await;

    for (start, ids) in [("0", 1..11), ("10", 11..21), ("20", 21..26)] {
        Mock::given(method("GET"))
            .and(path("/client"))
            .and(query_param("start", start))
            .and(query_param("length", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(ids, 25)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let manager = CollectionManager::new(service(&server));
    manager.fetch_all().await.unwrap();
    assert_eq!(manager.len(), 10);
    assert!(manager.has_more());

    assert_eq!(manager.load_more().await.unwrap(), LoadMore::Fetched(10));
    assert_eq!(manager.load_more().await.unwrap(), LoadMore::Fetched(5));
    assert_eq!(manager.len(), 25);
    assert_eq!(manager.total_count(), 25);

    assert_eq!(manager.load_more().await.unwrap(), LoadMore::Exhausted);
}

#[tokio::test]
async fn test_manager_refetches_after_toggle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client"))
        .and(query_param("search", ""))
        .and(query_param("start", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(1..4, 3)))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/client/2/deshabilitar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_json(2, "Ana", false)))
        .expect(1)
        .mount(&server)
        .await;

    let manager = CollectionManager::new(service(&server));
    manager.fetch_all().await.unwrap();

    let record = manager.find(ClientId::new(2)).unwrap();
    let outcome = manager.toggle_status(&record).await.unwrap();

    assert!(!outcome.value.enabled);
    assert!(outcome.refreshed());
    assert_eq!(manager.len(), 3);
}
