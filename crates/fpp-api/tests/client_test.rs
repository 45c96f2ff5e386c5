#![allow(clippy::unwrap_used)]
// Integration tests for `fpp_api::Client` using wiremock.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fpp_api::models::{Command, ScheduleEntry};
use fpp_api::{CallContext, Client, Error, ErrorKind, Rgb, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn ctx() -> CallContext {
    CallContext::background()
}

fn ok_status() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "Status": "OK", "message": "" }))
}

// ── Transport core ──────────────────────────────────────────────────

#[tokio::test]
async fn test_get_overlays_models() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "Name": "LED Panels",
            "Type": "FB",
            "ChannelCount": 36864,
            "ChannelCountPerNode": 3,
            "Orientation": "horizontal",
            "StartChannel": 1,
            "StartCorner": "TL",
            "StrandsPerString": 1,
            "StringCount": 64,
            "autoCreated": true,
            "effectRunning": false,
            "height": 64,
            "width": 192,
            "isActive": 0
        },
        { "Name": "Roofline", "Type": "Channel", "ChannelCount": 450 }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/overlays/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let models = client.get_overlays_models(&ctx()).await.unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "LED Panels");
    assert_eq!(models[0].width, 192);
    assert!(models[0].auto_created);
    assert_eq!(models[1].name, "Roofline");
    assert_eq!(models[1].width, 0);
}

#[tokio::test]
async fn test_base_url_path_is_discarded() {
    let server = MockServer::start().await;
    let base = format!("{}/fpp/ignored/", server.uri());
    let client = Client::from_reqwest(&base, reqwest::Client::new()).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Christmas", "Halloween"])))
        .mount(&server)
        .await;

    let playlists = client.get_playlists(&ctx()).await.unwrap();
    assert_eq!(playlists, vec!["Christmas", "Halloween"]);
}

#[tokio::test]
async fn test_model_name_is_percent_encoded() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/overlays/model/LED%20Panels"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "Name": "LED Panels", "width": 64 })),
        )
        .mount(&server)
        .await;

    let model = client.get_overlays_model(&ctx(), "LED Panels").await.unwrap();
    assert_eq!(model.name, "LED Panels");
    assert_eq!(model.width, 64);
}

#[tokio::test]
async fn test_literal_percent_in_name_is_escaped() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/overlays/model/50%2541off"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Name": "50%41off" })))
        .expect(1)
        .mount(&server)
        .await;

    let model = client.get_overlays_model(&ctx(), "50%41off").await.unwrap();
    assert_eq!(model.name, "50%41off");
}

#[tokio::test]
async fn test_not_found_is_unexpected_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/overlays/model/Missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client
        .get_overlays_model(&ctx(), "Missing")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
    assert!(
        matches!(err.root(), Error::UnexpectedStatus { reason, .. } if reason == "Not Found"),
        "got: {err:?}"
    );
    assert!(err.to_string().contains("\"Missing\""));
}

#[tokio::test]
async fn test_large_error_body_is_drained() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/playlist/Broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(4 * 1024 * 1024)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Christmas"])))
        .mount(&server)
        .await;

    let err = client.get_playlist(&ctx(), "Broken").await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    let playlists = client.get_playlists(&ctx()).await.unwrap();
    assert_eq!(playlists, vec!["Christmas"]);
}

#[tokio::test]
async fn test_only_200_is_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client.get_playlists(&ctx()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(204));
}

#[tokio::test]
async fn test_server_error_is_unexpected_status() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/overlays/model/Matrix/fill"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client
        .fill_overlays_model(&ctx(), "Matrix", Rgb::BLACK)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_invalid_json_is_decode_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/overlays/fonts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ nope"))
        .mount(&server)
        .await;

    let err = client.get_overlays_fonts(&ctx()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    match err.root() {
        Error::Deserialization { body, .. } => assert_eq!(body, "{ nope"),
        other => panic!("expected Deserialization, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_wrong_shape_is_decode_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "not": "a list" })))
        .mount(&server)
        .await;

    let err = client.get_playlists(&ctx()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
}

#[tokio::test]
async fn test_connection_refused_is_network_failure() {
    // Nothing listens on the discard port locally.
    let client = Client::new("http://127.0.0.1:9").unwrap();

    let err = client.get_playlists(&ctx()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    assert!(matches!(err.root(), Error::Transport(_)), "got: {err:?}");
}

// ── Two-level success: HTTP 200 + Status OK ─────────────────────────

#[tokio::test]
async fn test_clear_model_logical_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/overlays/model/Ghost/clear"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Status": "Error", "message": "model not found" })),
        )
        .mount(&server)
        .await;

    let err = client
        .clear_overlays_model(&ctx(), "Ghost")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::LogicalFailure);
    assert_eq!(err.device_message(), Some("model not found"));
}

#[tokio::test]
async fn test_pixel_logical_failure_after_put() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/overlays/model/Ghost/pixel"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Status": "Error", "message": "model not found" })),
        )
        .mount(&server)
        .await;

    let err = client
        .set_overlays_model_pixel(&ctx(), "Ghost", 1, 2, Rgb::new(1, 2, 3))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::LogicalFailure);
    assert_eq!(err.device_message(), Some("model not found"));
    assert!(err.to_string().contains("Ghost"));
}

#[tokio::test]
async fn test_status_ok_is_case_insensitive() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/overlays/model/Matrix/clear"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Status": "ok" })))
        .mount(&server)
        .await;

    client.clear_overlays_model(&ctx(), "Matrix").await.unwrap();
}

// ── Request bodies ──────────────────────────────────────────────────

#[tokio::test]
async fn test_fill_sends_clamped_json() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/overlays/model/Matrix/fill"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "RGB": [255, 0, 90] })))
        .respond_with(ok_status())
        .expect(1)
        .mount(&server)
        .await;

    client
        .fill_overlays_model(&ctx(), "Matrix", Rgb::clamped(400, -3, 90))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_pixel_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/overlays/model/Matrix/pixel"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "X": 3, "Y": 7, "RGB": [90, 0, 0] })))
        .respond_with(ok_status())
        .expect(1)
        .mount(&server)
        .await;

    client
        .set_overlays_model_pixel(&ctx(), "Matrix", 3, 7, Rgb::new(90, 0, 0))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_model_state_variants() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/overlays/model/Matrix/state"))
        .and(body_json(json!({ "State": 1 })))
        .respond_with(ok_status())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/overlays/model/Matrix/state"))
        .and(body_json(json!({ "State": false })))
        .respond_with(ok_status())
        .expect(1)
        .mount(&server)
        .await;

    client
        .set_overlays_model_state(&ctx(), "Matrix", 1_i64)
        .await
        .unwrap();
    client
        .set_overlays_model_state(&ctx(), "Matrix", false)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_model_data_rle_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/overlays/model/Matrix/data/rle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [4, 255, 0, 0],
            "effectRunning": false,
            "isLocked": false,
            "rle": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/overlays/model/Matrix/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [255, 0, 0, 255, 0, 0],
            "rle": false
        })))
        .mount(&server)
        .await;

    let rle = client
        .get_overlays_model_data(&ctx(), "Matrix", true)
        .await
        .unwrap();
    assert!(rle.rle);
    assert_eq!(rle.data, vec![4, 255, 0, 0]);

    let raw = client
        .get_overlays_model_data(&ctx(), "Matrix", false)
        .await
        .unwrap();
    assert!(!raw.rle);
    assert_eq!(raw.data.len(), 6);
}

// ── Schedule ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_schedule_reload_posts_null() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/schedule/reload"))
        .and(header("content-type", "application/json"))
        .and(body_string("null"))
        .respond_with(ok_status())
        .expect(1)
        .mount(&server)
        .await;

    client.post_schedule_reload(&ctx()).await.unwrap();
}

#[tokio::test]
async fn test_schedule_reload_failure_carries_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/schedule/reload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Status": "Failed", "message": "scheduler busy" })),
        )
        .mount(&server)
        .await;

    let err = client.post_schedule_reload(&ctx()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LogicalFailure);
    assert_eq!(err.device_message(), Some("scheduler busy"));
}

#[tokio::test]
async fn test_post_schedule_round_trip() {
    let (server, client) = setup().await;

    let entries = vec![ScheduleEntry {
        enabled: 1,
        day: 7,
        start_time: "17:00:00".into(),
        end_time: "23:00:00".into(),
        start_date: "2023-12-01".into(),
        end_date: "2023-12-31".into(),
        playlist: "Christmas".into(),
        ..ScheduleEntry::default()
    }];
    let wire = serde_json::to_value(&entries).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/schedule"))
        .and(body_json(&wire))
        .respond_with(ResponseTemplate::new(200).set_body_json(&wire))
        .expect(1)
        .mount(&server)
        .await;

    let stored = client.post_schedule(&ctx(), &entries).await.unwrap();
    assert_eq!(stored, entries);
}

#[tokio::test]
async fn test_fppd_schedule_flattened_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/fppd/schedule"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": "OK",
            "respCode": 200,
            "schedule": {
                "enabled": 1,
                "entries": [{ "id": 0, "playlist": "Christmas", "dayStr": "Everyday" }],
                "items": [{
                    "id": 0,
                    "priority": 0,
                    "startTime": 1_701_471_600,
                    "startTimeStr": "Fri Dec  1 @ 07:00 PM",
                    "endTime": 1_701_486_000,
                    "endTimeStr": "Fri Dec  1 @ 11:00 PM"
                }]
            }
        })))
        .mount(&server)
        .await;

    let resp = client.get_fppd_schedule(&ctx()).await.unwrap();
    assert!(resp.status.is_ok());
    assert_eq!(resp.schedule.entries[0].day_str, "Everyday");
    assert_eq!(
        resp.schedule.items[0].start_time.time().unwrap().timestamp(),
        1_701_471_600
    );
}

// ── Status / files / plugins / config / commands ────────────────────

#[tokio::test]
async fn test_fppd_status_flexible_fields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/fppd/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MQTT": { "configured": false, "connected": false },
            "current_playlist": { "count": "12", "index": "3", "playlist": "Christmas", "type": "sequence" },
            "mode": 2,
            "mode_name": "player",
            "next_playlist": { "playlist": "Halloween", "start_time": "Sun Dec 10 @ 07:00 PM - (Everyday)" },
            "repeat_mode": "1",
            "scheduler": { "enabled": 1, "status": "playing" },
            "status": 1,
            "status_name": "playing",
            "uptimeTotalSeconds": 3600,
            "warnings": []
        })))
        .mount(&server)
        .await;

    let status = client.get_fppd_status(&ctx()).await.unwrap();

    assert_eq!(status.mode.get(), 2);
    assert_eq!(status.current_playlist.count.get(), 12);
    assert_eq!(status.current_playlist.index.get(), 3);
    assert!(status.repeat_mode.is_repeating());
    assert_eq!(status.status_name, "playing");

    let start = status.next_playlist.start_time.time().unwrap();
    assert_eq!(start.format("%m-%d %H:%M").to_string(), "12-10 19:00");
}

#[tokio::test]
async fn test_get_files() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/files/sequences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "files": [
                { "name": "Intro.fseq", "mtime": "12/01/23  07:00 PM", "sizeBytes": 1024, "sizeHuman": "1.00 KB" }
            ]
        })))
        .mount(&server)
        .await;

    let files = client.get_files(&ctx(), "sequences").await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "Intro.fseq");
    assert_eq!(files[0].size_bytes, 1024);
}

#[tokio::test]
async fn test_get_plugins() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/plugin"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!(["fpp-matrixtools", "fpp-brightness"])),
        )
        .mount(&server)
        .await;

    let plugins = client.get_plugins(&ctx()).await.unwrap();
    assert!(plugins.contains("fpp-matrixtools"));
    assert!(!plugins.contains("fpp-vastfmt"));
}

#[tokio::test]
async fn test_get_channel_outputs() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/configfile/channeloutputs.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "channelOutputs": [{
                "type": "LEDPanelMatrix",
                "subType": "ColorLight5a75",
                "enabled": 1,
                "startChannel": 1,
                "channelCount": 36864,
                "panelWidth": 64,
                "panelHeight": 32,
                "panels": [
                    { "outputNumber": 0, "panelNumber": 0, "colorOrder": "RGB", "xOffset": 0, "yOffset": 0, "orientation": "N", "row": 0, "col": 0 },
                    { "outputNumber": 0, "panelNumber": 1, "colorOrder": "RGB", "xOffset": 64, "yOffset": 0, "orientation": "N", "row": 0, "col": 1 }
                ]
            }]
        })))
        .mount(&server)
        .await;

    let outputs = client.get_channel_outputs(&ctx()).await.unwrap();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].output_type, "LEDPanelMatrix");
    assert_eq!(outputs[0].panels.len(), 2);
    assert_eq!(outputs[0].panels[1].x_offset, 64);
}

#[tokio::test]
async fn test_get_config_untyped() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/configfile/model-overlays.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
        .mount(&server)
        .await;

    let value: serde_json::Value = client
        .get_config(&ctx(), "model-overlays.json")
        .await
        .unwrap();
    assert_eq!(value, json!({ "models": [] }));
}

#[tokio::test]
async fn test_post_command() {
    let (server, client) = setup().await;

    let cmd = Command::insert_playlist_after_current("Encore", 1, 4, false);

    Mock::given(method("POST"))
        .and(path("/api/command"))
        .and(body_json(json!({
            "command": "Insert Playlist After Current",
            "args": ["Encore", "1", "4", "false"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Status": "OK" })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.post_command(&ctx(), &cmd).await.unwrap();
    assert_eq!(resp["Status"], "OK");
}

// ── Cancellation & deadlines ────────────────────────────────────────

#[tokio::test]
async fn test_cancellation_returns_promptly() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["late"]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let ctx = CallContext::from(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let started = Instant::now();
    let err = client.get_playlists(&ctx).await.unwrap_err();
    canceller.await.unwrap();

    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    assert!(matches!(err.root(), Error::Cancelled), "got: {err:?}");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_deadline_returns_promptly() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["late"]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let ctx = CallContext::background().with_timeout(Duration::from_millis(100));

    let started = Instant::now();
    let err = client.get_playlists(&ctx).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    assert!(matches!(err.root(), Error::DeadlineExceeded), "got: {err:?}");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_transport_timeout_is_network_failure() {
    let server = MockServer::start().await;
    let transport = TransportConfig::default().with_timeout(Duration::from_millis(100));
    let client = Client::with_transport(&server.uri(), &transport).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/plugin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let err = client.get_plugins(&ctx()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    assert!(matches!(err.root(), Error::Transport(e) if e.is_timeout()), "got: {err:?}");
}

#[tokio::test]
async fn test_already_cancelled_makes_no_request() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    token.cancel();

    let err = client
        .get_playlists(&CallContext::from(token))
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}

// ── Concurrency ─────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_fetches_are_independent() {
    let (server, client) = setup().await;

    for i in 0..8 {
        Mock::given(method("GET"))
            .and(path(format!("/api/overlays/model/M{i}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "Name": format!("M{i}"), "width": i }))
                    .set_delay(Duration::from_millis(20 * (8 - i))),
            )
            .mount(&server)
            .await;
    }

    let client = Arc::new(client);
    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..8_i64 {
        let client = Arc::clone(&client);
        tasks.spawn(async move {
            let model = client
                .get_overlays_model(&CallContext::background(), &format!("M{i}"))
                .await
                .unwrap();
            (i, model)
        });
    }

    let mut seen = 0;
    while let Some(joined) = tasks.join_next().await {
        let (i, model) = joined.unwrap();
        assert_eq!(model.name, format!("M{i}"));
        assert_eq!(model.width, i);
        seen += 1;
    }
    assert_eq!(seen, 8);
}
