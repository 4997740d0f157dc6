use std::fs;

use coaching_backend::cms::{PACKAGES_QUERY, POSTS_QUERY, TESTIMONIALS_QUERY};
use coaching_backend::sync::{collect, run_sync, run_verify};
use coaching_backend::{CmsClient, CmsConfig, Collection, SyncError};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY_PATH: &str = "/v2024-01-01/data/query/production";

fn client_for(server: &MockServer, token: Option<&str>) -> CmsClient {
    let config = CmsConfig {
        api_base_url: Some(server.uri()),
        token: token.map(String::from),
        ..CmsConfig::new("test-project")
    };
    CmsClient::new(config).unwrap()
}

async fn mount_query(server: &MockServer, query: &str, result: Value) {
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ms": 3,
            "query": query,
            "result": result,
        })))
        .mount(server)
        .await;
}

fn posts() -> Value {
    json!([
        {
            "id": "post-older", "title": "Negotiating your offer", "slug": "negotiating",
            "description": "Ask for more, politely.", "category": "Offers", "readTime": 6,
            "publishedAt": "2025-01-10T09:00:00Z", "imageUrl": null,
            "body": [{"_type": "block", "style": "normal", "children": [{"_type": "span", "text": "Start high."}]}]
        },
        {
            "id": "post-newer", "title": "Mock interviews that work", "slug": "mock-interviews",
            "description": null, "category": "Interviews", "readTime": 4,
            "publishedAt": "2025-05-02T09:00:00Z", "imageUrl": "https://cdn.example.com/m.png",
            "body": "Plain text body"
        }
    ])
}

fn testimonials() -> Value {
    json!([
        {"id": "t1", "name": "Ananya", "role": "Product Manager", "quote": "Landed the role.",
         "imageUrl": null, "initial": "A", "gradient": "from-purple-500 to-pink-500", "isActive": true},
        {"id": "t2", "name": "Rohit", "role": null, "quote": "Old story.",
         "imageUrl": null, "initial": "R", "gradient": null, "isActive": false}
    ])
}

fn packages() -> Value {
    json!([
        {"id": "k1", "title": "Discover", "price": 4999, "description": "One session",
         "features": ["Career audit", "Action plan"], "category": "individual",
         "paymentButtonId": "pl_RwDuOx96VYrsyN"},
        {"id": "k2", "title": "Accelerate", "price": 14999, "description": null,
         "features": ["Four sessions"], "category": "individual", "paymentButtonId": null},
        {"id": "k3", "title": "Teams", "price": null, "description": "Custom",
         "features": null, "category": "corporate", "paymentButtonId": null}
    ])
}

async fn mount_all(server: &MockServer) {
    mount_query(server, POSTS_QUERY, posts()).await;
    mount_query(server, TESTIMONIALS_QUERY, testimonials()).await;
    mount_query(server, PACKAGES_QUERY, packages()).await;
}

#[tokio::test]
async fn sync_writes_snapshot_and_is_repeatable() {
    let server = MockServer::start().await;
    mount_all(&server).await;
    let client = client_for(&server, None);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("assets").join("content.json");

    let summary = run_sync(&client, &out).await.unwrap();
    assert_eq!(
        (summary.posts, summary.testimonials, summary.packages, summary.skipped),
        (2, 1, 3, 1)
    );
    assert_eq!(summary.path, out);

    let first = fs::read_to_string(&out).unwrap();
    let written: Value = serde_json::from_str(&first).unwrap();
    assert_eq!(written["posts"][0]["slug"], "mock-interviews");
    assert_eq!(written["testimonials"][0]["name"], "Ananya");
    assert_eq!(written["packages"][0]["paymentButtonId"], "pl_RwDuOx96VYrsyN");
    assert_eq!(written["packages"][2]["features"], json!([]));

    run_sync(&client, &out).await.unwrap();
    let second = fs::read_to_string(&out).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn failed_query_leaves_existing_snapshot_alone() {
    let server = MockServer::start().await;
    mount_query(&server, POSTS_QUERY, posts()).await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param("query", TESTIMONIALS_QUERY))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("content.json");
    fs::write(&out, "{\"posts\":[],\"testimonials\":[],\"packages\":[]}\n").unwrap();

    let err = run_sync(&client_for(&server, None), &out).await.unwrap_err();
    match err {
        SyncError::Status { collection, status, ref body } => {
            assert_eq!(collection, Collection::Testimonials);
            assert_eq!(status, 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "{\"posts\":[],\"testimonials\":[],\"packages\":[]}\n"
    );
}

#[tokio::test]
async fn malformed_response_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = collect(&client_for(&server, None)).await.unwrap_err();
    assert!(matches!(err, SyncError::Decode { .. }));
    assert_eq!(err.collection(), Some(Collection::Posts));
}

#[tokio::test]
async fn verify_reports_counts_and_samples() {
    let server = MockServer::start().await;
    mount_all(&server).await;

    let report = run_verify(&client_for(&server, None)).await.unwrap();
    assert_eq!((report.posts, report.testimonials, report.packages), (2, 1, 3));
    assert_eq!(
        report.sample_post.as_deref(),
        Some("Mock interviews that work (/blog/mock-interviews)")
    );
    assert_eq!(report.sample_package.as_deref(), Some("Discover at 4999"));
    assert_eq!(report.skipped, 1);
}

#[tokio::test]
async fn drafts_duplicates_and_incomplete_records_are_skipped() {
    let server = MockServer::start().await;
    mount_query(
        &server,
        POSTS_QUERY,
        json!([
            {"id": "p1", "title": "Published", "slug": "published", "publishedAt": "2025-02-01T00:00:00Z"},
            {"id": "drafts.p1", "title": "Published (edit)", "slug": "published", "publishedAt": "2025-02-01T00:00:00Z"},
            {"id": "p2", "title": "No slug"},
            {"id": "p1", "title": "Published again", "slug": "published"}
        ]),
    )
    .await;
    mount_query(&server, TESTIMONIALS_QUERY, json!([])).await;
    mount_query(&server, PACKAGES_QUERY, json!([{"id": "k1", "price": 10}])).await;

    let collected = collect(&client_for(&server, None)).await.unwrap();
    let ids: Vec<&str> = collected.snapshot.posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p1"]);
    assert_eq!(collected.snapshot.posts[0].title, "Published");
    assert!(collected.snapshot.packages.is_empty());
    assert_eq!(collected.skipped, 4);
}

#[tokio::test]
async fn mistyped_record_is_skipped_not_fatal() {
    let server = MockServer::start().await;
    mount_query(&server, POSTS_QUERY, posts()).await;
    mount_query(&server, TESTIMONIALS_QUERY, testimonials()).await;
    mount_query(
        &server,
        PACKAGES_QUERY,
        json!([
            {"id": "k1", "title": "Discover", "price": 4999, "features": ["Career audit"],
             "paymentButtonId": "pl_RwDuOx96VYrsyN"},
            {"id": "k2", "title": "Accelerate", "price": "14,999", "features": ["Four sessions"]},
            {"id": "k3", "title": "Teams", "features": ["Workshop", null]}
        ]),
    )
    .await;

    let collected = collect(&client_for(&server, None)).await.unwrap();
    let ids: Vec<&str> = collected.snapshot.packages.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["k1"]);
    assert_eq!(collected.snapshot.posts.len(), 2);
    assert_eq!(collected.snapshot.testimonials.len(), 1);
    // inactive testimonial plus the two mistyped packages
    assert_eq!(collected.skipped, 3);
}

#[tokio::test]
async fn token_is_sent_as_bearer() {
    let server = MockServer::start().await;
    for query in [POSTS_QUERY, TESTIMONIALS_QUERY, PACKAGES_QUERY] {
        Mock::given(method("GET"))
            .and(path(QUERY_PATH))
            .and(query_param("query", query))
            .and(header("authorization", "Bearer sk-read"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let collected = collect(&client_for(&server, Some("sk-read"))).await.unwrap();
    assert_eq!(collected.snapshot, Default::default());
    assert_eq!(collected.skipped, 0);
}
