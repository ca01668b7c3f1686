/// API integration tests
/// Tests complete HTTP request/response cycles against the real router and a temp docs tree
mod common;

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use common::{create_test_state, RecordingVcs};
use journal_server::create_router;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Helper to create test app router
fn create_test_app() -> (Router, TempDir) {
    let (state, temp_dir) = create_test_state(Arc::new(RecordingVcs::clean()));
    (create_router(state), temp_dir)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let (status, _, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn json_body(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

/// Test OPTIONS is answered on any path with the CORS declaration
#[tokio::test]
async fn test_preflight_on_any_path() {
    let (app, _temp_dir) = create_test_app();

    for uri in ["/save-entry", "/api/songs", "/no/such/route"] {
        let request = Request::builder()
            .uri(uri)
            .method("OPTIONS")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK, "preflight for {}", uri);
        assert!(body.is_empty());
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        assert!(methods.contains("GET"));
        assert!(methods.contains("POST"));
        assert!(methods.contains("OPTIONS"));
        let allowed_headers = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap();
        assert!(allowed_headers.eq_ignore_ascii_case("content-type"));
    }
}

/// Test unmatched routes and methods answer 404 and still carry CORS
#[tokio::test]
async fn test_unmatched_routes_are_not_found() {
    let (app, _temp_dir) = create_test_app();

    let (status, headers, _) = get(&app, "/api/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    // GET on a POST-only route
    let (status, _, _) = get(&app, "/save-entry").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // PUT is not part of the API at all
    let request = Request::builder()
        .uri("/api/songs")
        .method("PUT")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Test health endpoint
#[tokio::test]
async fn test_health() {
    let (app, temp_dir) = create_test_app();

    let (status, headers, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let health = json_body(&body);
    assert_eq!(health["status"], "ok");
    assert_eq!(
        health["journal_dir"],
        temp_dir.path().join("docs/journal").display().to_string()
    );
    assert_eq!(health["songs_file_exists"], false);

    post_json(&app, "/api/songs", json!({ "songTitle": "First" })).await;
    let (_, _, body) = get(&app, "/api/health").await;
    assert_eq!(json_body(&body)["songs_file_exists"], true);
}

/// Test fixed pages and UI assets
#[tokio::test]
async fn test_pages_and_assets() {
    let (app, temp_dir) = create_test_app();

    // Nothing on disk yet
    let (status, _, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let ui_dir = temp_dir.path().join("src").join("ui");
    std::fs::create_dir_all(&ui_dir).unwrap();
    std::fs::write(temp_dir.path().join("index.html"), "<h1>Journal</h1>").unwrap();
    std::fs::write(ui_dir.join("add-entry.html"), "<form></form>").unwrap();
    std::fs::write(ui_dir.join("read-entries.html"), "<ul></ul>").unwrap();
    std::fs::write(ui_dir.join("album-overview.html"), "<table></table>").unwrap();
    std::fs::write(ui_dir.join("app.js"), "console.log('hi');").unwrap();
    std::fs::write(ui_dir.join("style.css"), "body {}").unwrap();

    let (status, headers, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/html");
    assert_eq!(&body[..], b"<h1>Journal</h1>");

    for (uri, expected) in [
        ("/add-entry", "<form></form>"),
        ("/read-entries", "<ul></ul>"),
        ("/album-overview", "<table></table>"),
    ] {
        let (status, headers, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(headers[header::CONTENT_TYPE], "text/html");
        assert_eq!(&body[..], expected.as_bytes());
    }

    let (status, headers, _) = get(&app, "/src/ui/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/javascript");

    let (status, headers, _) = get(&app, "/src/ui/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/css");

    let (status, _, _) = get(&app, "/src/ui/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get(&app, "/src/ui/../../index.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Test saving an entry and reading it back by name
#[tokio::test]
async fn test_save_entry_then_fetch() {
    let (app, temp_dir) = create_test_app();

    let (status, saved) = post_json(
        &app,
        "/save-entry",
        json!({
            "track": "Night Drive",
            "notes": "Bassline locked in.",
            "date": "Mar 7, 2025, 09:41 AM",
            "bpm": "118",
            "mood": "Restless"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["success"], true);

    let filename = saved["filename"].as_str().unwrap().to_string();
    assert!(filename.ends_with("-night-drive.md"));
    let (year, month) = (&filename[0..4], &filename[5..7]);

    let file_path = saved["file_path"].as_str().unwrap();
    let expected_path = temp_dir
        .path()
        .join("docs/journal")
        .join(year)
        .join(month)
        .join(&filename);
    assert_eq!(file_path, expected_path.display().to_string());
    assert!(saved["message"].as_str().unwrap().contains(file_path));

    let on_disk = std::fs::read_to_string(&expected_path).unwrap();
    assert!(on_disk.contains("- **BPM:** 118\n"));
    assert!(!on_disk.contains("[Add key if relevant]"));
    assert!(on_disk.contains("- **Mood/Feeling:** Restless\n"));

    let (status, _, body) = get(&app, &format!("/api/journal-file/{}", filename)).await;
    assert_eq!(status, StatusCode::OK);
    let fetched = json_body(&body);
    assert_eq!(fetched["success"], true);
    assert_eq!(fetched["filename"], filename.as_str());
    assert_eq!(fetched["content"], on_disk.as_str());
    assert_eq!(fetched["path"], file_path);
}

/// Test bodies above axum's default 2 MB limit still reach the handlers
#[tokio::test]
async fn test_large_bodies_are_accepted() {
    let (app, _temp_dir) = create_test_app();
    let notes = "la ".repeat(1_000_000);

    let (status, saved) = post_json(
        &app,
        "/save-entry",
        json!({ "track": "Long Take", "notes": notes, "date": "Jun 1, 2025" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["success"], true);

    let written = std::fs::read_to_string(saved["file_path"].as_str().unwrap()).unwrap();
    assert!(written.contains(&notes));

    let (status, created) = post_json(
        &app,
        "/api/songs",
        json!({ "songTitle": "Long Take", "songNotes": notes }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], true);

    // Oversized garbage is still answered with the JSON failure body
    let (status, failed) = post_raw(&app, "/save-entry", "x".repeat(3_000_000)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(failed["success"], false);
    assert!(failed["message"]
        .as_str()
        .unwrap()
        .starts_with("Error saving entry"));
}

/// Test an entry without technical fields gets all four placeholders
#[tokio::test]
async fn test_save_entry_placeholders() {
    let (app, temp_dir) = create_test_app();

    let (status, saved) = post_json(
        &app,
        "/save-entry",
        json!({
            "track": "Resume",
            "notes": "Synth patches",
            "date": "Dec 19, 2024",
            "bpm": "",
            "key": ""
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let path = temp_dir
        .path()
        .join(saved["file_path"].as_str().unwrap());
    let content = std::fs::read_to_string(path).unwrap();
    for placeholder in [
        "- **BPM:** [Add BPM if relevant]",
        "- **Key:** [Add key if relevant]",
        "- **Effects Used:** [List any new effects or plugins]",
        "- **Recording Issues:** [Note any technical problems]",
    ] {
        assert!(content.contains(placeholder), "missing {}", placeholder);
    }
}

/// Test missing required fields and malformed bodies become failure responses
#[tokio::test]
async fn test_save_entry_failures() {
    let (app, _temp_dir) = create_test_app();

    let (status, body) = post_json(
        &app,
        "/save-entry",
        json!({ "notes": "no track", "date": "today" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Error saving entry"));
    assert!(message.contains("track"));

    let (status, body) = post_raw(&app, "/save-entry", "{not json".to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);

    // The server keeps answering after failures
    let (status, _, _) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
}

/// Test listing journal files with and without a journal directory
#[tokio::test]
async fn test_list_journal_files() {
    let (app, _temp_dir) = create_test_app();

    let (status, _, body) = get(&app, "/api/journal-files").await;
    assert_eq!(status, StatusCode::OK);
    let listing = json_body(&body);
    assert_eq!(listing["success"], true);
    assert_eq!(listing["files"].as_array().unwrap().len(), 0);

    for track in ["First Light", "Second Wind"] {
        let (status, _) = post_json(
            &app,
            "/save-entry",
            json!({ "track": track, "notes": "n", "date": "d" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    let (_, _, body) = get(&app, "/api/journal-files").await;
    let files = json_body(&body)["files"].as_array().unwrap().clone();
    assert_eq!(files.len(), 2);
    assert!(files[0]["filename"]
        .as_str()
        .unwrap()
        .ends_with("second-wind.md"));
    for file in &files {
        let filename = file["filename"].as_str().unwrap();
        let relative = file["path"].as_str().unwrap();
        assert!(relative.ends_with(filename));
        assert!(!relative.starts_with("docs"));
        assert!(std::path::Path::new(file["full_path"].as_str().unwrap()).is_absolute());
        assert!(file["modified"].is_string());
    }
}

/// Test fetching a file that does not exist
#[tokio::test]
async fn test_fetch_missing_journal_file() {
    let (app, _temp_dir) = create_test_app();

    let (status, _, body) = get(&app, "/api/journal-file/2020-01-01-0000-nothing.md").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body)["success"], false);
}

/// Test the song registry endpoints
#[tokio::test]
async fn test_song_registry_flow() {
    let (app, temp_dir) = create_test_app();

    let (status, _, body) = get(&app, "/api/songs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!([]));

    let (status, created) = post_json(
        &app,
        "/api/songs",
        json!({
            "songTitle": "May",
            "songKey": "C major",
            "songBpm": "92",
            "songStatus": "mixing",
            "songNotes": "Vocals next"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], true);
    assert_eq!(created["message"], "Song \"May\" added successfully");
    assert_eq!(created["song"]["progress"], 70);
    assert_eq!(created["song"]["bpm"], 92);

    let (_, unknown) = post_json(
        &app,
        "/api/songs",
        json!({ "songTitle": "Resume", "songStatus": "on-hold" }),
    )
    .await;
    assert_eq!(unknown["song"]["progress"], 0);
    assert!(unknown["song"]["bpm"].is_null());

    let (_, _, body) = get(&app, "/api/songs").await;
    let songs = json_body(&body);
    let songs = songs.as_array().unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0]["title"], "May");
    assert_eq!(songs[1]["title"], "Resume");
    assert_ne!(songs[0]["id"], songs[1]["id"]);

    let raw = std::fs::read_to_string(temp_dir.path().join("docs/songs.json")).unwrap();
    assert!(raw.contains("\n  {\n    \"id\""));
}

/// Test a fractional numeric tempo from a number input is stored as a whole BPM
#[tokio::test]
async fn test_song_fractional_bpm() {
    let (app, _temp_dir) = create_test_app();

    let (status, created) = post_json(
        &app,
        "/api/songs",
        json!({ "songTitle": "A", "songBpm": 92.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], true);
    assert_eq!(created["song"]["bpm"], 92);
}

/// Test song failures are reported, not raised
#[tokio::test]
async fn test_song_failures() {
    let (app, temp_dir) = create_test_app();

    let (status, body) = post_json(&app, "/api/songs", json!({ "songBpm": "fast" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to save song"));

    std::fs::create_dir_all(temp_dir.path().join("docs")).unwrap();
    std::fs::write(temp_dir.path().join("docs/songs.json"), "[{\"id\": ").unwrap();

    let (status, _, body) = get(&app, "/api/songs").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(&body)["success"], false);

    let (status, body) = post_json(&app, "/api/songs", json!({ "songTitle": "x" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

/// Test racing song creations leave a valid array behind
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_song_creation_keeps_valid_json() {
    let (app, temp_dir) = create_test_app();

    let mut handles = Vec::new();
    for i in 0..8 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            post_json(
                &app,
                "/api/songs",
                json!({ "songTitle": format!("Take {}", i), "songStatus": "draft" }),
            )
            .await
        }));
    }
    for handle in handles {
        let (status, _) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    let raw = std::fs::read(temp_dir.path().join("docs/songs.json")).unwrap();
    let songs: Vec<Value> = serde_json::from_slice(&raw).unwrap();
    assert!(!songs.is_empty());
    assert!(songs.len() <= 8);
}

/// Test commit-and-push on a clean tree does nothing beyond the status check
#[tokio::test]
async fn test_git_commit_clean_tree() {
    let vcs = Arc::new(RecordingVcs::clean());
    let (state, _temp_dir) = create_test_state(Arc::clone(&vcs));
    let app = create_router(state);

    let (status, _, body) = get(&app, "/api/git-commit").await;
    assert_eq!(status, StatusCode::OK);
    let report = json_body(&body);
    assert_eq!(report["success"], true);
    assert_eq!(report["message"], "No changes to commit");
    assert_eq!(vcs.calls(), vec!["status"]);
}

/// Test a failed push after a commit is still reported as success
#[tokio::test]
async fn test_git_commit_push_failure() {
    let vcs = Arc::new(RecordingVcs {
        push_fails: true,
        ..RecordingVcs::dirty()
    });
    let (state, _temp_dir) = create_test_state(Arc::clone(&vcs));
    let app = create_router(state);

    let request = Request::builder()
        .uri("/api/git-commit")
        .method("POST")
        .body(Body::empty())
        .unwrap();
    let (status, _, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    let report = json_body(&body);
    assert_eq!(report["success"], true);
    assert_eq!(report["message"], "Changes committed but push failed");
    assert!(report["output"]
        .as_str()
        .unwrap()
        .contains("Push Error: fatal: unable to access remote"));
    assert_eq!(vcs.calls(), vec!["status", "stage_all", "commit", "push"]);
}
