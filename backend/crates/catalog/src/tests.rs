//! Unit tests for catalog crate

#[cfg(test)]
mod fixtures {
    use crate::domain::entities::{PersonName, Product, Rating, User};
    use crate::domain::repository::CatalogSource;
    use crate::error::{CatalogError, CatalogResult};
    use kernel::id::{ProductId, RemoteUserId};
    use platform::rest::RestError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub fn product(id: u64, title: &str, price: f64, rate: f64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.into(),
            price,
            description: format!("{title} description"),
            category: category.into(),
            image: format!("https://img.example/{id}.png"),
            rating: Rating { rate, count: 10 },
        }
    }

    pub fn user(id: u64, username: &str) -> User {
        User {
            id: RemoteUserId::new(id),
            email: format!("{username}@example.com"),
            username: username.into(),
            name: PersonName {
                firstname: username.into(),
                lastname: "doe".into(),
            },
        }
    }

    pub fn catalog() -> Vec<Product> {
        vec![
            product(1, "Shirt", 10.0, 4.0, "clothing"),
            product(2, "Ring", 50.0, 3.0, "jewelery"),
        ]
    }

    /// Scripted remote source
    #[derive(Clone, Default)]
    pub struct StubSource {
        pub products: Vec<Product>,
        pub users: Vec<User>,
        pub fail_products: bool,
        pub fail_users: bool,
        pub product_calls: Arc<AtomicUsize>,
    }

    impl StubSource {
        pub fn serving(products: Vec<Product>, users: Vec<User>) -> Self {
            Self {
                products,
                users,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.product_calls.load(Ordering::SeqCst)
        }
    }

    fn unavailable(path: &str) -> CatalogError {
        CatalogError::RemoteFetch(RestError::Status {
            url: format!("https://fakestoreapi.test/{path}"),
            status: 503,
        })
    }

    impl CatalogSource for StubSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            self.product_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_products {
                return Err(unavailable("products"));
            }
            Ok(self.products.clone())
        }

        async fn fetch_users(&self, limit: u32) -> CatalogResult<Vec<User>> {
            if self.fail_users {
                return Err(unavailable("users"));
            }
            Ok(self.users.iter().take(limit as usize).cloned().collect())
        }
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::CatalogConfig;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.api_base_url, "https://fakestoreapi.com");
        assert_eq!(config.users_limit, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.placeholder_image, "https://via.placeholder.com/150");
    }

    #[test]
    fn test_development_config() {
        let config = CatalogConfig::development();
        assert!(config.request_timeout < CatalogConfig::default().request_timeout);
        assert_eq!(config.users_limit, 5);
    }

    #[test]
    fn test_rest_config_follows_catalog_config() {
        let config = CatalogConfig::default().with_base_url("http://localhost:9000");
        let rest = config.rest_config();
        assert_eq!(rest.base_url, "http://localhost:9000");
        assert_eq!(rest.timeout, config.request_timeout);
    }
}

#[cfg(test)]
mod models_tests {
    use crate::application::derive_view::DashboardView;
    use crate::domain::entities::ProductDraft;
    use crate::domain::value_objects::*;
    use crate::presentation::dto::*;

    #[test]
    fn test_view_query_defaults() {
        let selection = ViewQuery::default().into_selection();
        assert_eq!(selection, ViewSelection::default());
    }

    #[test]
    fn test_view_query_deserialization() {
        let json = r#"{"search":"Red","category":"clothing","sortField":"rating","sortOrder":"desc"}"#;
        let query: ViewQuery = serde_json::from_str(json).unwrap();
        let selection = query.into_selection();

        assert_eq!(selection.search.as_str(), "red");
        assert_eq!(selection.category, CategoryFilter::Only("clothing".into()));
        assert_eq!(
            selection.sort,
            SortConfig::new(SortField::Rating, SortOrder::Desc)
        );
    }

    #[test]
    fn test_product_draft_from_form_body() {
        let json = r#"{"title":"Hat","price":15}"#;
        let draft: ProductDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft, ProductDraft::new("Hat", 15.0));
    }

    #[test]
    fn test_dashboard_view_response_serialization() {
        let view = DashboardView {
            products: Vec::new(),
            stats: DashboardStats {
                total_products: 3,
                registered_users: 5,
                average_price: 12.5,
            },
            categories: vec!["all".into()],
            form_categories: Vec::new(),
            sort: SortConfig::default(),
            status: LoadStatus::Pending,
        };
        let json = serde_json::to_value(DashboardViewResponse::from(view)).unwrap();

        assert_eq!(json["stats"]["totalProducts"], 3);
        assert_eq!(json["stats"]["registeredUsers"], 5);
        assert_eq!(json["stats"]["averagePriceDisplay"], "$12.50");
        assert_eq!(json["sort"]["field"], "price");
        assert_eq!(json["sort"]["order"], "asc");
        assert_eq!(json["status"]["state"], "pending");
    }

    #[test]
    fn test_toggle_sort_request_without_current() {
        let req: ToggleSortRequest = serde_json::from_str(r#"{"field":"rating"}"#).unwrap();
        assert_eq!(req.field, SortField::Rating);
        assert!(req.current.is_none());
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::fixtures::*;
    use crate::application::add_product::AddProductUseCase;
    use crate::application::config::CatalogConfig;
    use crate::application::delete_product::DeleteProductUseCase;
    use crate::application::derive_view::DeriveViewUseCase;
    use crate::application::hydrate_catalog::HydrateCatalogUseCase;
    use crate::application::update_product::{UpdateProductInput, UpdateProductUseCase};
    use crate::domain::entities::ProductDraft;
    use crate::domain::repository::CatalogRepository;
    use crate::domain::value_objects::{LoadStatus, ViewSelection};
    use crate::error::CatalogError;
    use crate::infra::memory::InMemoryCatalogRepository;
    use kernel::id::ProductId;
    use std::sync::Arc;

    fn hydrate_use_case(
        source: StubSource,
        repo: &Arc<InMemoryCatalogRepository>,
    ) -> HydrateCatalogUseCase<StubSource, InMemoryCatalogRepository> {
        HydrateCatalogUseCase::new(
            Arc::new(source),
            repo.clone(),
            Arc::new(CatalogConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_hydrate_loads_products_and_users() {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let users = (1..=7).map(|i| user(i, &format!("u{i}"))).collect();
        let output = hydrate_use_case(StubSource::serving(catalog(), users), &repo)
            .execute()
            .await
            .unwrap();

        assert_eq!(output.products, 2);
        assert_eq!(output.users, 5);

        let view = DeriveViewUseCase::new(repo.clone())
            .execute(ViewSelection::default())
            .await;
        assert_eq!(view.stats.total_products, 2);
        assert_eq!(view.stats.registered_users, 5);
        assert!(view.status.is_ready());
    }

    #[tokio::test]
    async fn test_hydrate_runs_once() {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let source = StubSource::serving(catalog(), Vec::new());
        let use_case = hydrate_use_case(source.clone(), &repo);

        use_case.execute().await.unwrap();
        let err = use_case.execute().await.unwrap_err();

        assert!(matches!(err, CatalogError::AlreadyHydrated));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_hydrate_keeps_local_edits_on_repeat() {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let use_case = hydrate_use_case(StubSource::serving(catalog(), Vec::new()), &repo);
        use_case.execute().await.unwrap();

        repo.delete(ProductId::new(1)).await.unwrap();
        let _ = use_case.execute().await;

        assert_eq!(repo.snapshot().await.products.len(), 1);
    }

    #[tokio::test]
    async fn test_hydrate_failure_marks_failed_and_allows_retry() {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let failing = StubSource {
            fail_products: true,
            ..StubSource::serving(catalog(), Vec::new())
        };

        let err = hydrate_use_case(failing, &repo).execute().await.unwrap_err();
        assert!(matches!(err, CatalogError::RemoteFetch(_)));

        let snapshot = repo.snapshot().await;
        assert!(snapshot.products.is_empty());
        assert!(matches!(snapshot.status, LoadStatus::Failed { .. }));

        hydrate_use_case(StubSource::serving(catalog(), Vec::new()), &repo)
            .execute()
            .await
            .unwrap();
        assert!(repo.snapshot().await.status.is_ready());
    }

    #[tokio::test]
    async fn test_user_fetch_failure_yields_zero_users() {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let source = StubSource {
            fail_users: true,
            ..StubSource::serving(catalog(), vec![user(1, "john")])
        };

        let output = hydrate_use_case(source, &repo).execute().await.unwrap();
        assert_eq!(output.products, 2);
        assert_eq!(output.users, 0);
    }

    #[tokio::test]
    async fn test_add_update_delete_flow() {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let config = Arc::new(CatalogConfig::default());
        hydrate_use_case(StubSource::serving(catalog(), Vec::new()), &repo)
            .execute()
            .await
            .unwrap();

        let created = AddProductUseCase::new(repo.clone(), config.clone())
            .execute(ProductDraft::new("Hat", 15.0).with_category("clothing"))
            .await
            .unwrap();
        assert_eq!(created.id, ProductId::new(3));
        assert_eq!(created.image, config.placeholder_image);

        let updated = UpdateProductUseCase::new(repo.clone())
            .execute(UpdateProductInput {
                id: created.id,
                patch: ProductDraft {
                    price: Some(20.0),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(updated.price, 20.0);
        assert_eq!(updated.title, "Hat");

        DeleteProductUseCase::new(repo.clone())
            .execute(ProductId::new(1))
            .await
            .unwrap();

        let products = DeriveViewUseCase::new(repo.clone()).products().await;
        let ids: Vec<u64> = products.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_add_rejected_leaves_catalog_unchanged() {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let use_case = AddProductUseCase::new(repo.clone(), Arc::new(CatalogConfig::default()));

        let err = use_case
            .execute(ProductDraft {
                title: Some("No price".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation { field: "price", .. }));
        assert!(repo.snapshot().await.products.is_empty());
    }
}

#[cfg(test)]
mod router_tests {
    use super::fixtures::*;
    use crate::application::config::CatalogConfig;
    use crate::infra::memory::InMemoryCatalogRepository;
    use crate::presentation::router::catalog_router_generic;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        catalog_router_generic(
            StubSource::serving(catalog(), vec![user(1, "john"), user(2, "mor")]),
            InMemoryCatalogRepository::new(),
            CatalogConfig::default(),
        )
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn hydrated_app() -> Router {
        let app = app();
        let (status, _) = send(&app, Method::POST, "/hydrate", None).await;
        assert_eq!(status, StatusCode::OK);
        app
    }

    #[tokio::test]
    async fn test_view_before_hydration_is_pending() {
        let (status, body) = send(&app(), Method::GET, "/view", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"]["state"], "pending");
        assert_eq!(body["products"], json!([]));
        assert_eq!(body["categories"], json!(["all"]));
    }

    #[tokio::test]
    async fn test_second_hydrate_conflicts() {
        let app = hydrated_app().await;
        let (status, body) = send(&app, Method::POST, "/hydrate", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], 409);
    }

    #[tokio::test]
    async fn test_view_filters_and_sorts() {
        let app = hydrated_app().await;

        let (_, body) = send(&app, Method::GET, "/view?sortField=price&sortOrder=desc", None).await;
        let ids: Vec<u64> = body["products"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(body["stats"]["registeredUsers"], 2);

        let (_, body) = send(&app, Method::GET, "/view?category=clothing", None).await;
        assert_eq!(body["products"].as_array().unwrap().len(), 1);
        assert_eq!(body["stats"]["totalProducts"], 2);
        assert_eq!(body["stats"]["averagePriceDisplay"], "$10.00");
        assert_eq!(body["categories"], json!(["all", "clothing", "jewelery"]));
        assert_eq!(body["formCategories"], json!(["clothing", "jewelery"]));
    }

    #[tokio::test]
    async fn test_create_product() {
        let app = hydrated_app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/products",
            Some(json!({ "title": "Hat", "price": 15.0, "category": "clothing" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 3);
        assert_eq!(body["rating"]["rate"], 0.0);

        let (_, body) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(body[0]["id"], 3);
    }

    #[tokio::test]
    async fn test_create_product_validation_error_names_field() {
        let app = hydrated_app().await;
        let (status, body) = send(&app, Method::POST, "/products", Some(json!({ "price": 3.0 }))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "title");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let app = hydrated_app().await;

        let (status, body) = send(&app, Method::PUT, "/products/2", Some(json!({ "price": 45.5 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price"], 45.5);
        assert_eq!(body["title"], "Ring");

        let (status, _) = send(&app, Method::DELETE, "/products/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::DELETE, "/products/2", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::PUT, "/products/2", Some(json!({ "price": 1.0 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_product_id() {
        let app = hydrated_app().await;
        let (status, _) = send(&app, Method::DELETE, "/products/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_toggle_sort() {
        let app = app();
        let (_, body) = send(
            &app,
            Method::POST,
            "/sort/toggle",
            Some(json!({ "field": "price", "current": { "field": "price", "order": "asc" } })),
        )
        .await;
        assert_eq!(body, json!({ "field": "price", "order": "desc" }));

        let (_, body) = send(&app, Method::POST, "/sort/toggle", Some(json!({ "field": "rating" }))).await;
        assert_eq!(body, json!({ "field": "rating", "order": "asc" }));
    }

    #[tokio::test]
    async fn test_list_users() {
        let app = hydrated_app().await;
        let (_, body) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["fullName"], "john doe");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::app_error::AppError;
    use kernel::id::{IdError, ProductId};

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(CatalogError, StatusCode)> = vec![
            (
                CatalogError::validation("title", "Title is required"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                CatalogError::ProductNotFound(ProductId::new(9)),
                StatusCode::NOT_FOUND,
            ),
            (
                CatalogError::InvalidProductId(IdError::Zero),
                StatusCode::BAD_REQUEST,
            ),
            (CatalogError::AlreadyHydrated, StatusCode::CONFLICT),
            (
                CatalogError::IdsExhausted(ProductId::new(u64::MAX)),
                StatusCode::CONFLICT,
            ),
            (
                CatalogError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_remote_fetch_maps_to_bad_gateway() {
        let err = CatalogError::RemoteFetch(platform::rest::RestError::Status {
            url: "https://fakestoreapi.com/products".into(),
            status: 500,
        });
        let app_err: AppError = err.into();
        assert_eq!(app_err.status_code(), 502);
        assert!(app_err.action().is_some());
    }

    #[test]
    fn test_validation_keeps_field() {
        let app_err: AppError = CatalogError::validation("price", "Price is required").into();
        assert_eq!(app_err.field(), Some("price"));
        assert_eq!(app_err.message(), "Price is required");
    }

    #[test]
    fn test_error_display() {
        assert!(
            CatalogError::ProductNotFound(ProductId::new(4))
                .to_string()
                .contains("4")
        );
        assert!(CatalogError::AlreadyHydrated.to_string().contains("already"));
    }
}
