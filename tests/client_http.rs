//
//  opsmngr-client
//  tests/client_http.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end tests through the reqwest transport against a local server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mockito::{Matcher, Server};
use opsmngr::api::opsmngr::organizations::Organization;
use opsmngr::api::opsmngr::projects::Project;
use opsmngr::api::{ApiError, Client, Context, ListOptions, OpsManager};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn ops_for(server: &Server) -> OpsManager {
    init_tracing();
    let client = Client::builder()
        .base_url(server.url())
        .append_user_agent("integration/1.0")
        .build()
        .unwrap();
    OpsManager::new(client)
}

fn path_regex(path: &str) -> Matcher {
    Matcher::Regex(format!("^{}(\\?.*)?$", regex_escape(path)))
}

fn regex_escape(path: &str) -> String {
    path.replace('.', "\\.")
}

#[tokio::test]
async fn test_list_projects_sends_headers_and_query() {
    let mut server = Server::new_async().await;
    let body = format!(
        r#"{{"links": [{{"rel": "self", "href": "{}/api/public/v1.0/groups?pageNum=3&itemsPerPage=2"}}],
            "results": [{{"id": "p1", "name": "First", "orgId": "o1"}}, {{"id": "p2", "name": "Second", "orgId": "o1"}}],
            "totalCount": 6}}"#,
        server.url()
    );
    let mock = server
        .mock("GET", path_regex("/api/public/v1.0/groups"))
        .match_header("accept", "application/json")
        .match_header("user-agent", Matcher::Regex("^opsmngr-client/.* integration/1\\.0$".to_string()))
        .match_header("content-type", Matcher::Missing)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageNum".into(), "3".into()),
            Matcher::UrlEncoded("itemsPerPage".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let ops = ops_for(&server);
    let (projects, response) = ops
        .projects()
        .list(&Context::background(), Some(&ListOptions::page(3, 2)))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(projects.results.len(), 2);
    assert_eq!(projects.total_count, 6);
    assert_eq!(response.current_page().unwrap(), 3);
    assert!(response.raw.is_none());
}

#[tokio::test]
async fn test_create_organization_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/public/v1.0/orgs")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({"name": "Acme"})))
        .with_status(201)
        .with_body(r#"{"id": "5980cfdf0b6d97029d82f86e", "name": "Acme", "links": []}"#)
        .create_async()
        .await;

    let ops = ops_for(&server);
    let org = Organization {
        name: "Acme".to_string(),
        ..Default::default()
    };
    let (created, response) = ops.organizations().create(&Context::background(), &org).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, "5980cfdf0b6d97029d82f86e");
    assert_eq!(response.status.as_u16(), 201);
}

#[tokio::test]
async fn test_error_envelope_is_decoded() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/public/v1.0/groups/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"detail": "No group with ID missing exists in Ops Manager.", "error": 404, "errorCode": "GROUP_NOT_FOUND", "parameters": ["missing"], "reason": "Not Found"}"#,
        )
        .create_async()
        .await;

    let ops = ops_for(&server);
    let err = ops.projects().get(&Context::background(), "missing").await.unwrap_err();

    let envelope = err.as_error_response().unwrap();
    assert!(envelope.is_not_found());
    assert_eq!(envelope.http_code, 404);
    assert_eq!(envelope.error_code, "GROUP_NOT_FOUND");
    assert_eq!(envelope.method, reqwest::Method::GET);
    assert!(envelope
        .url
        .as_ref()
        .unwrap()
        .as_str()
        .ends_with("/api/public/v1.0/groups/missing"));
    assert!(err.to_string().contains("GROUP_NOT_FOUND"));
}

#[tokio::test]
async fn test_plain_error_body_kept_as_detail() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/public/v1.0/groups/p1")
        .with_status(502)
        .with_body("upstream unavailable\n")
        .create_async()
        .await;

    let ops = ops_for(&server);
    let err = ops.projects().delete(&Context::background(), "p1").await.unwrap_err();

    let envelope = err.as_error_response().unwrap();
    assert_eq!(envelope.detail, "upstream unavailable");
    assert_eq!(envelope.reason, "Bad Gateway");
    assert_eq!(envelope.status.as_u16(), 502);
}

#[tokio::test]
async fn test_log_download_streams_gzip_bytes() {
    let mut server = Server::new_async().await;
    let archive: Vec<u8> = vec![0x1f, 0x8b, 0x08, 0x00, 0xde, 0xad, 0xbe, 0xef];
    let mock = server
        .mock("GET", "/api/public/v1.0/groups/p1/logCollectionJobs/j1/download")
        .match_header("accept", "application/gzip")
        .with_status(200)
        .with_header("content-type", "application/gzip")
        .with_body(archive.clone())
        .create_async()
        .await;

    let ops = ops_for(&server);
    let mut out = Vec::new();
    ops.log_collection()
        .download(&Context::background(), "p1", "j1", &mut out)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(out, archive);
}

#[tokio::test]
async fn test_service_version_is_plain_text() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/private/unauth/version")
        .match_header("accept", "text/plain")
        .with_status(200)
        .with_body("gitHash=8d1cf3b2; versionString=6.0.0.100.20220810T1530Z")
        .create_async()
        .await;

    let ops = ops_for(&server);
    let (version, _) = ops.service_version().get(&Context::background()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(version.git_hash, "8d1cf3b2");
    assert_eq!(version.version, "6.0.0.100.20220810T1530Z");
}

#[tokio::test]
async fn test_raw_capture_and_callbacks() {
    init_tracing();
    let mut server = Server::new_async().await;
    let body = r#"{"id": "p1", "name": "Captured", "orgId": "o1"}"#;
    server
        .mock("GET", "/api/public/v1.0/groups/p1")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let completed = Arc::new(AtomicUsize::new(0));
    let processed = Arc::new(AtomicUsize::new(0));
    let client = {
        let completed = Arc::clone(&completed);
        let processed = Arc::clone(&processed);
        Client::builder()
            .base_url(server.url())
            .raw_capture(true)
            .on_request_completed(move |_, raw| {
                assert_eq!(raw.status.as_u16(), 200);
                completed.fetch_add(1, Ordering::SeqCst);
            })
            .on_response_processed(move |_| {
                processed.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap()
    };
    let ops = OpsManager::new(client);

    let (project, response): (Project, _) = ops.projects().get(&Context::background(), "p1").await.unwrap();

    assert_eq!(project.name, "Captured");
    assert_eq!(response.raw.as_deref(), Some(body.as_bytes()));
    assert_eq!(completed.load(Ordering::SeqCst), 1);
    assert_eq!(processed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/opsmanager/api/public/v1.0/orgs/o1")
        .with_status(200)
        .with_body(r#"{"id": "o1", "name": "Prefixed"}"#)
        .create_async()
        .await;

    let client = Client::builder()
        .base_url(format!("{}/opsmanager", server.url()))
        .build()
        .unwrap();
    let ops = OpsManager::new(client);
    let (org, _) = ops.organizations().get(&Context::background(), "o1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(org.name, "Prefixed");
}

#[tokio::test]
async fn test_canceled_context_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let ops = ops_for(&server);
    let ctx = Context::background();
    ctx.cancel();
    let err = ops.projects().get(&ctx, "p1").await.unwrap_err();

    mock.assert_async().await;
    assert!(err.is_context());
    assert!(matches!(err, ApiError::Context(_)));
}
