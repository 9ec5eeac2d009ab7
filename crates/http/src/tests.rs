use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use contentrest_core::{CatalogEntry, JobStatus, Node};
use contentrest_storage::PreferenceMap;
use contentrest_service::ServiceError;
use contentrest_storage::{SeedData, StorageError};

use crate::api_error::ApiError;
use crate::handlers::{catalog, nodes, people};
use crate::query_types::{CatalogQuery, PageQuery};
use crate::{AppState, create_router};

fn state() -> Arc<AppState> {
    let seed = SeedData {
        nodes: vec![
            Node::folder("folder-42", "reports", None),
            Node::document("doc-1", "q1.pdf", Some("folder-42"), 1000),
            Node::document("doc-2", "q2.pdf", Some("folder-42"), 24),
        ],
        catalog: vec![
            CatalogEntry::new("cm:content", "Content"),
            CatalogEntry::new("cm:folder", "Folder"),
            CatalogEntry::new("rn:rendition", "Rendition"),
        ],
        preferences: preferences(),
    };
    Arc::new(AppState::in_memory(seed).expect("state"))
}

fn preferences() -> PreferenceMap {
    let mut people = PreferenceMap::new();
    people.entry("alice".to_owned()).or_default().extend([
        ("org.example.colour".to_owned(), serde_json::json!("green")),
        ("org.example.sites.favourites".to_owned(), serde_json::json!(["site-1", "site-2"])),
        ("org.example.zoom".to_owned(), serde_json::json!(2)),
    ]);
    people
}

fn query(skip: Option<usize>, max: Option<usize>, prefix: Option<&str>) -> Query<CatalogQuery> {
    Query(CatalogQuery { skip_count: skip, max_items: max, prefix: prefix.map(ToOwned::to_owned) })
}

#[tokio::test]
async fn catalog_list_renders_pagination_envelope() {
    let Json(body) =
        catalog::list_catalog(State(state()), query(Some(1), Some(1), None)).await.unwrap();
    let json = serde_json::to_value(&body).unwrap();
    let pagination = &json["list"]["pagination"];
    assert_eq!(pagination["count"], 1);
    assert_eq!(pagination["hasMoreItems"], true);
    assert_eq!(pagination["totalItems"], 3);
    assert_eq!(pagination["skipCount"], 1);
    assert_eq!(pagination["maxItems"], 1);
    assert_eq!(json["list"]["entries"][0]["entry"]["id"], "cm:folder");
    assert_eq!(json["list"]["entries"][0]["entry"]["prefix"], "cm");
}

#[tokio::test]
async fn catalog_list_filters_by_prefix() {
    let Json(body) = catalog::list_catalog(State(state()), query(None, None, Some("rn")))
        .await
        .unwrap();
    assert_eq!(body.list.pagination.count, 1);
    assert!(!body.list.pagination.has_more_items);
    assert_eq!(body.list.entries[0].entry.id, "rn:rendition");
}

#[tokio::test]
async fn catalog_list_rejects_zero_max_items() {
    let err = catalog::list_catalog(State(state()), query(None, Some(0), None)).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_entry_not_found_is_404() {
    let err = catalog::get_catalog_entry(State(state()), Path("cm:nope".to_owned()))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn size_job_round_trip() {
    let state = state();
    let (status, Json(handle)) =
        nodes::calculate_size(State(state.clone()), Path("folder-42".to_owned())).await.unwrap();
    assert_eq!(status, StatusCode::ACCEPTED);

    let (_, Json(again)) =
        nodes::calculate_size(State(state.clone()), Path("folder-42".to_owned())).await.unwrap();
    assert_eq!(again.job_id, handle.job_id);

    let view = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let path = Path(("folder-42".to_owned(), handle.job_id.clone()));
            let Json(view) = nodes::get_size_details(State(state.clone()), path).await.unwrap();
            if view.status.is_terminal() {
                return view;
            }
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("job finished");
    assert_eq!(view.status, JobStatus::Completed);
    assert_eq!(view.size_in_bytes, Some(1024));

    let path = Path(("folder-42".to_owned(), "someone-else".to_owned()));
    let err = nodes::get_size_details(State(state), path).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn size_details_before_submit_is_not_initiated() {
    let path = Path(("folder-42".to_owned(), "J1".to_owned()));
    let Json(view) = nodes::get_size_details(State(state()), path).await.unwrap();
    assert_eq!(view.status, JobStatus::NotInitiated);
    assert!(view.job_id.is_none());
}

#[tokio::test]
async fn size_of_document_is_bad_request() {
    let err =
        nodes::calculate_size(State(state()), Path("doc-1".to_owned())).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidNodeType(_)));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn preferences_list_is_paged() {
    let path = Path("alice".to_owned());
    let page = Query(PageQuery { skip_count: Some(1), max_items: Some(1) });
    let Json(body) = people::list_preferences(State(state()), path, page).await.unwrap();
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["list"]["pagination"]["count"], 1);
    assert_eq!(json["list"]["pagination"]["hasMoreItems"], true);
    assert_eq!(json["list"]["pagination"]["totalItems"], 3);
    assert_eq!(json["list"]["entries"][0]["entry"]["id"], "org.example.sites.favourites");
    assert_eq!(json["list"]["entries"][0]["entry"]["value"][1], "site-2");
}

#[tokio::test]
async fn preferences_of_unknown_person_are_404() {
    let err = people::list_preferences(
        State(state()),
        Path("nobody".to_owned()),
        Query(PageQuery::default()),
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn single_preference_hits_and_misses() {
    let path = Path(("alice".to_owned(), "org.example.zoom".to_owned()));
    let Json(body) = people::get_preference(State(state()), path).await.unwrap();
    assert_eq!(body.entry.value, serde_json::json!(2));

    let path = Path(("alice".to_owned(), "org.example.missing".to_owned()));
    let err = people::get_preference(State(state()), path).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[test]
fn service_errors_map_to_statuses() {
    let cases = [
        (ServiceError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
        (ServiceError::NotFound { entity: "node", id: "x".into() }, StatusCode::NOT_FOUND),
        (ServiceError::Unprocessable("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
        (
            ServiceError::Storage(StorageError::Unavailable("down".into())),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
        (ServiceError::Executor("no runtime".into()), StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (err, expected) in cases {
        assert_eq!(ApiError::from(err).status(), expected);
    }
}

#[test]
fn router_builds() {
    let _router = create_router(state());
}
