//! REST Source Integration Tests
//!
//! Each test mounts canned responses on a `wiremock` server and checks what
//! the endpoint sent and decoded.

#[cfg(test)]
mod tests {
    use crate::domain::{ClientError, NewTodo, Person};
    use crate::source::{PeopleEndpoint, RecordSink, RecordSource, RestEndpoint, TodoEndpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().expect("client")
    }

    fn api_url(server: &MockServer, route: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), route)).expect("mock url")
    }

    fn people(server: &MockServer) -> PeopleEndpoint {
        RestEndpoint::with_client(client(), api_url(server, "/api"))
    }

    fn todos(server: &MockServer) -> TodoEndpoint {
        RestEndpoint::with_client(client(), api_url(server, "/api/todo"))
    }

    #[tokio::test]
    async fn test_fetch_all_people() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "A", "age": 30}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let fetched = people(&server).fetch_all().await.expect("fetch");

        assert_eq!(fetched, vec![Person::new(1, "A", 30)]);
        assert_eq!(fetched[0].to_string(), "1 A 30");
    }

    #[tokio::test]
    async fn test_fetch_all_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let fetched = people(&server).fetch_all().await.expect("fetch");
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_out_of_range_values() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "name": "B", "age": -1}
            ])))
            .mount(&server)
            .await;

        let fetched = people(&server).fetch_all().await.expect("fetch");
        assert_eq!(fetched[0].to_string(), "2 B -1");
    }

    #[tokio::test]
    async fn test_submit_posts_exact_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/todo"))
            .and(body_json(json!({"title": "Buy milk", "description": "2%"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_id": "1", "title": "Buy milk", "description": "2%"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let answer = todos(&server)
            .submit(&NewTodo::new("Buy milk", "2%"))
            .await
            .expect("submit");
        assert_eq!(answer["title"], json!("Buy milk"));

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), 1);
        assert_eq!(
            serde_json::from_slice::<serde_json::Value>(&requests[0].body).unwrap(),
            json!({"title": "Buy milk", "description": "2%"})
        );
    }

    #[tokio::test]
    async fn test_submit_with_empty_answer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/todo"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let answer = todos(&server).submit(&NewTodo::new("a", "b")).await.expect("submit");
        assert!(answer.is_null());
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = people(&server).fetch_all().await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_non_list_body_is_decode_error() {
        // The stub todo backend answers a bare `1`
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/todo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1"))
            .mount(&server)
            .await;

        let err = todos(&server).fetch_all().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint: PeopleEndpoint =
            RestEndpoint::with_client(client(), Url::parse(&format!("http://{addr}/api")).unwrap());
        let err = endpoint.fetch_all().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[tokio::test]
    async fn test_fetch_one_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2, "name": "Hiran", "age": 21
            })))
            .expect(1)
            .mount(&server)
            .await;

        let found = people(&server).fetch_one(2).await.expect("lookup");
        assert_eq!(found.map(|p| p.name), Some(json!("Hiran")));
    }

    #[tokio::test]
    async fn test_fetch_one_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/99"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("No user with required ID.")))
            .mount(&server)
            .await;

        let found = people(&server).fetch_one(99).await.expect("lookup");
        assert!(found.is_none());
    }
}
