//! API Route Definitions
//!
//! HTTP routes and their handlers, assembled through a builder so that a
//! deployment can expose only the endpoint groups it needs.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use super::customer_handlers::*;
use super::file_handlers::*;
use super::handlers::*;
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

/// Builder for creating API routes with configurable endpoints
pub struct RouterBuilder {
    /// GET /health
    health_check: bool,
    /// POST /userRegister
    register: bool,
    /// POST /userRegisterwithfile
    register_with_files: bool,
    /// POST /login
    login: bool,
    /// POST /upload and POST /uploadMultiple
    file_upload: bool,
    /// Customer CRUD under /rest
    customers: bool,
    /// Body limit applied to multipart routes
    upload_limit: usize,
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self {
            health_check: false,
            register: false,
            register_with_files: false,
            login: false,
            file_upload: false,
            customers: false,
            upload_limit: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl RouterBuilder {
    /// Creates a new router builder with all routes disabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router builder with every endpoint enabled
    pub fn with_all_routes() -> Self {
        Self {
            health_check: true,
            register: true,
            register_with_files: true,
            login: true,
            file_upload: true,
            customers: true,
            ..Self::default()
        }
    }

    /// Registration and login only, plus health
    pub fn with_registration_routes() -> Self {
        Self {
            health_check: true,
            register: true,
            register_with_files: true,
            login: true,
            ..Self::default()
        }
    }

    /// Health check only, for monitoring
    pub fn with_minimal_routes() -> Self {
        Self {
            health_check: true,
            ..Self::default()
        }
    }

    pub fn health_check(mut self, enabled: bool) -> Self {
        self.health_check = enabled;
        self
    }

    pub fn register(mut self, enabled: bool) -> Self {
        self.register = enabled;
        self
    }

    pub fn register_with_files(mut self, enabled: bool) -> Self {
        self.register_with_files = enabled;
        self
    }

    pub fn login(mut self, enabled: bool) -> Self {
        self.login = enabled;
        self
    }

    pub fn file_upload(mut self, enabled: bool) -> Self {
        self.file_upload = enabled;
        self
    }

    pub fn customers(mut self, enabled: bool) -> Self {
        self.customers = enabled;
        self
    }

    /// Maximum request body size for the multipart endpoints
    pub fn upload_limit(mut self, bytes: usize) -> Self {
        self.upload_limit = bytes;
        self
    }

    /// Builds the Axum router with the configured routes
    pub fn build(self) -> Router<AppState> {
        let mut router = Router::new();
        let limit = self.upload_limit;

        if self.health_check {
            router = router.route("/health", get(health_check));
        }

        if self.register {
            router = router.route("/userRegister", post(register_user));
        }

        if self.register_with_files {
            router = router.route(
                "/userRegisterwithfile",
                post(register_user_with_files).layer(DefaultBodyLimit::max(limit)),
            );
        }

        if self.login {
            router = router.route("/login", post(login_user));
        }

        if self.file_upload {
            router = router
                .route(
                    "/upload",
                    post(upload_file).layer(DefaultBodyLimit::max(limit)),
                )
                .route(
                    "/uploadMultiple",
                    post(upload_multiple_files).layer(DefaultBodyLimit::max(limit)),
                );
        }

        if self.customers {
            router = router
                .route("/rest/createOrUpdateCustomer", post(create_or_update_customer))
                .route("/rest/customer/{id}", get(get_customer))
                .route("/rest/getAllCustomers", get(get_all_customers))
                .route("/rest/deleteCustomer/{id}", delete(delete_customer));
        }

        router
    }
}

/// Creates all API routes with the default upload limit
pub fn create_routes() -> Router<AppState> {
    RouterBuilder::with_all_routes().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "bookstore-test-boundary";

    fn app() -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let router = create_routes().with_state(AppState::from_store(store.clone()));
        (router, store)
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// (part name, optional file name and content type, content)
    type Part<'a> = (&'a str, Option<(&'a str, &'a str)>, &'a [u8]);

    fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, file, content) in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match file {
                Some((file_name, content_type)) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                ),
            }
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let (status, body) = send(app, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    // ============================================================================
    // Builder configuration
    // ============================================================================

    #[test]
    fn test_router_builder_new() {
        let builder = RouterBuilder::new();

        assert!(!builder.health_check);
        assert!(!builder.register);
        assert!(!builder.register_with_files);
        assert!(!builder.login);
        assert!(!builder.file_upload);
        assert!(!builder.customers);
        assert_eq!(builder.upload_limit, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_router_builder_presets() {
        let all = RouterBuilder::with_all_routes();
        assert!(all.health_check && all.register && all.register_with_files);
        assert!(all.login && all.file_upload && all.customers);

        let registration = RouterBuilder::with_registration_routes();
        assert!(registration.register && registration.register_with_files && registration.login);
        assert!(!registration.file_upload);
        assert!(!registration.customers);

        let minimal = RouterBuilder::with_minimal_routes();
        assert!(minimal.health_check);
        assert!(!minimal.register && !minimal.login && !minimal.customers);
    }

    #[test]
    fn test_router_builder_individual_methods() {
        let builder = RouterBuilder::new()
            .health_check(true)
            .register(true)
            .register_with_files(false)
            .login(true)
            .file_upload(false)
            .customers(true)
            .upload_limit(1024);

        assert!(builder.health_check);
        assert!(builder.register);
        assert!(!builder.register_with_files);
        assert!(builder.login);
        assert!(!builder.file_upload);
        assert!(builder.customers);
        assert_eq!(builder.upload_limit, 1024);
    }

    #[tokio::test]
    async fn test_disabled_routes_are_not_found() {
        let store = Arc::new(MemoryStore::new());
        let app = RouterBuilder::with_minimal_routes()
            .build()
            .with_state(AppState::from_store(store));

        let request = json_request(
            Method::POST,
            "/login",
            serde_json::json!({"email": "a@x.com", "password": "secret"}),
        );
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // ============================================================================
    // Registration and login
    // ============================================================================

    #[tokio::test]
    async fn test_register_then_login_over_http() {
        let (app, store) = app();

        let (status, body) = send_json(
            &app,
            json_request(
                Method::POST,
                "/userRegister",
                serde_json::json!({"email": "a@x.com", "password": "secret", "firstName": "A"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statusCode"], 201);
        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["message"], "User Registered Successfully");
        assert_eq!(body["data"]["email"], "a@x.com");
        assert_eq!(body["data"]["firstName"], "A");
        assert!(body["data"]["id"].is_i64());
        assert!(body["data"].get("password").is_none());
        assert_eq!(store.user_count().await, 1);

        let (status, body) = send_json(
            &app,
            json_request(
                Method::POST,
                "/login",
                serde_json::json!({"email": "a@x.com", "password": "secret"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statusCode"], 201);
        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(
            body["message"],
            "User Login Successfully, welcome to E-commerce online BooksStore"
        );
        assert_eq!(body["data"]["email"], "a@x.com");
    }

    #[tokio::test]
    async fn test_register_blank_credentials_over_http() {
        let (app, store) = app();

        for payload in [
            serde_json::json!({}),
            serde_json::json!({"email": "a@x.com"}),
            serde_json::json!({"email": " ", "password": "secret"}),
            serde_json::json!({"email": "a@x.com", "password": ""}),
        ] {
            let (status, body) =
                send_json(&app, json_request(Method::POST, "/userRegister", payload)).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["statusCode"], 400);
            assert_eq!(body["status"], "FAILED");
            assert_eq!(body["message"], "Email and Password cannot be empty");
            assert!(body.get("data").is_none());
        }
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_register_malformed_body_is_structured_failure() {
        let (app, store) = app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/userRegister")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send_json(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["status"], "FAILURE");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("User Registration Failed"));
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_login_failures_share_one_shape() {
        let (app, _store) = app();
        send(
            &app,
            json_request(
                Method::POST,
                "/userRegister",
                serde_json::json!({"email": "a@x.com", "password": "secret"}),
            ),
        )
        .await;

        let (_, wrong_password) = send_json(
            &app,
            json_request(
                Method::POST,
                "/login",
                serde_json::json!({"email": "a@x.com", "password": "wrong"}),
            ),
        )
        .await;
        let (_, unknown_email) = send_json(
            &app,
            json_request(
                Method::POST,
                "/login",
                serde_json::json!({"email": "nobody@x.com", "password": "secret"}),
            ),
        )
        .await;

        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password["statusCode"], 400);
        assert_eq!(wrong_password["status"], "FAILED");
        assert_eq!(wrong_password["message"], "Invalid Email and Password");
    }

    #[tokio::test]
    async fn test_login_blank_credentials_over_http() {
        let (app, _store) = app();

        let (status, body) = send_json(
            &app,
            json_request(
                Method::POST,
                "/login",
                serde_json::json!({"email": "a@x.com"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], "Email and Password cannot be empty");
    }

    #[tokio::test]
    async fn test_register_with_files_over_http() {
        let (app, store) = app();

        let request = multipart_request(
            "/userRegisterwithfile",
            &[
                (
                    "userRegDataJson",
                    None,
                    br#"{"email":"a@x.com","password":"secret","lastName":"Reader"}"#.as_slice(),
                ),
                ("files", Some(("one.txt", "text/plain")), b"first file".as_slice()),
                ("files", Some(("two.png", "image/png")), [0x89, 0x50, 0x4e, 0x47].as_slice()),
            ],
        );
        let (status, body) = send_json(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statusCode"], 201);
        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["data"]["email"], "a@x.com");
        assert_eq!(body["data"]["lastName"], "Reader");
        assert_eq!(store.user_count().await, 1);
        assert_eq!(store.attachment_count().await, 2);

        let second = store.find_attachment_by_id(2).await.unwrap();
        assert_eq!(second.file_name.as_deref(), Some("two.png"));
        assert_eq!(second.file_type.as_deref(), Some("image/png"));
        assert_eq!(second.data, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[tokio::test]
    async fn test_register_with_files_missing_json_part() {
        let (app, store) = app();

        let request = multipart_request(
            "/userRegisterwithfile",
            &[("files", Some(("one.txt", "text/plain")), b"content".as_slice())],
        );
        let (_, body) = send_json(&app, request).await;

        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], "Email and Password cannot be empty");
        assert_eq!(store.user_count().await, 0);
        assert_eq!(store.attachment_count().await, 0);
    }

    #[tokio::test]
    async fn test_register_with_files_malformed_json_part() {
        let (app, store) = app();

        let request = multipart_request(
            "/userRegisterwithfile",
            &[("userRegDataJson", None, b"{\"email\":".as_slice())],
        );
        let (status, body) = send_json(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["status"], "FAILURE");
        assert_eq!(store.user_count().await, 0);
    }

    // ============================================================================
    // Files, customers, health
    // ============================================================================

    #[tokio::test]
    async fn test_upload_single_file() {
        let (app, store) = app();

        let request = multipart_request(
            "/upload",
            &[("file", Some(("catalog.csv", "text/csv")), b"isbn,title".as_slice())],
        );
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "File inserted successfully: catalog.csv"
        );
        assert_eq!(store.attachment_count().await, 1);
    }

    #[tokio::test]
    async fn test_upload_without_file_part() {
        let (app, _store) = app();

        let request = multipart_request("/upload", &[("other", None, b"x".as_slice())]);
        let (status, body) = send_json(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_upload_multiple_files() {
        let (app, store) = app();

        let request = multipart_request(
            "/uploadMultiple",
            &[
                ("files", Some(("a.txt", "text/plain")), b"a".as_slice()),
                ("files", Some(("b.txt", "text/plain")), b"b".as_slice()),
            ],
        );
        let (status, body) = send_json(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!([
                "File inserted successfully: a.txt",
                "File inserted successfully: b.txt"
            ])
        );
        assert_eq!(store.attachment_count().await, 2);
    }

    #[tokio::test]
    async fn test_customer_crud_over_http() {
        let (app, _store) = app();

        let (status, created) = send_json(
            &app,
            json_request(
                Method::POST,
                "/rest/createOrUpdateCustomer",
                serde_json::json!({"firstName": "Jane", "email": "jane@example.com"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().unwrap();

        let (status, updated) = send_json(
            &app,
            json_request(
                Method::POST,
                "/rest/createOrUpdateCustomer",
                serde_json::json!({"id": id, "firstName": "Janet"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["firstName"], "Janet");

        let get = Request::builder()
            .uri(format!("/rest/customer/{}", id))
            .body(Body::empty())
            .unwrap();
        let (status, fetched) = send_json(&app, get).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(fetched["firstName"], "Janet");

        let list = Request::builder()
            .uri("/rest/getAllCustomers")
            .body(Body::empty())
            .unwrap();
        let (status, all) = send_json(&app, list).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 1);

        let remove = Request::builder()
            .method(Method::DELETE)
            .uri(format!("/rest/deleteCustomer/{}", id))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, remove).await;
        assert_eq!(status, StatusCode::OK);

        let get = Request::builder()
            .uri(format!("/rest/customer/{}", id))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send_json(&app, get).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_customer_validation_over_http() {
        let (app, _store) = app();

        let (status, body) = send_json(
            &app,
            json_request(
                Method::POST,
                "/rest/createOrUpdateCustomer",
                serde_json::json!({"email": "not-an-email"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_customer_malformed_body_is_error_response() {
        let (app, _store) = app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/rest/createOrUpdateCustomer")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{bad"))
            .unwrap();
        let (status, body) = send_json(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BAD_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("JSON"));
    }

    // ============================================================================
    // Upload limit
    // ============================================================================

    fn limited_app(limit: usize) -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let router = RouterBuilder::with_all_routes()
            .upload_limit(limit)
            .build()
            .with_state(AppState::from_store(store.clone()));
        (router, store)
    }

    #[tokio::test]
    async fn test_register_with_files_over_limit_is_failure_envelope() {
        let (app, store) = limited_app(64);
        let large = vec![b'x'; 4096];

        let request = multipart_request(
            "/userRegisterwithfile",
            &[
                (
                    "userRegDataJson",
                    None,
                    br#"{"email":"a@x.com","password":"secret"}"#.as_slice(),
                ),
                ("files", Some(("big.bin", "application/octet-stream")), large.as_slice()),
            ],
        );
        let (status, body) = send_json(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["status"], "FAILURE");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("User Registration Failed"));
        assert!(body.get("data").is_none());
        assert_eq!(store.user_count().await, 0);
        assert_eq!(store.attachment_count().await, 0);
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_payload_too_large() {
        let (app, store) = limited_app(64);
        let large = vec![b'x'; 4096];

        let single = multipart_request(
            "/upload",
            &[("file", Some(("big.bin", "application/octet-stream")), large.as_slice())],
        );
        let (status, body) = send_json(&app, single).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"], "PAYLOAD_TOO_LARGE");

        let multiple = multipart_request(
            "/uploadMultiple",
            &[("files", Some(("big.bin", "application/octet-stream")), large.as_slice())],
        );
        let (status, body) = send_json(&app, multiple).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"], "PAYLOAD_TOO_LARGE");

        assert_eq!(store.attachment_count().await, 0);
    }

    #[tokio::test]
    async fn test_upload_within_limit_is_stored() {
        let (app, store) = limited_app(1024);

        let request = multipart_request(
            "/upload",
            &[("file", Some(("small.txt", "text/plain")), b"tiny".as_slice())],
        );
        let (status, _) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.attachment_count().await, 1);
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _store) = app();

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send_json(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "healthy");
        assert_eq!(body["data"]["version"], crate::VERSION);
    }
}
