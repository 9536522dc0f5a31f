use super::*;

#[test]
fn method_maps_to_reqwest_verbs() {
    assert_eq!(method(HttpMethod::Get), reqwest::Method::GET);
    assert_eq!(method(HttpMethod::Post), reqwest::Method::POST);
}

#[test]
fn unreachable_host_is_network_error() {
    let request = HttpRequest {
        method: HttpMethod::Get,
        url: "http://127.0.0.1:9/api/user/profile".to_owned(),
        bearer: Some("t".to_owned()),
        body: None,
    };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let err = runtime.block_on(ReqwestTransport::new().send(request)).unwrap_err();
    assert!(matches!(err, TransportError::Network(_)));
}
