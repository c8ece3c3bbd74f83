use aveiro_events::{
    app::AppState,
    events::SourceSlug,
    feed::{DataFeed, EventLoader, FeedError, LoadError},
    render::ListEntry,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gretua_concert() -> serde_json::Value {
    json!({
        "id": "gretua-1",
        "title": "Concerto de Jazz",
        "start_date": "2025-01-05T22:00:00",
        "location": "GrETUA",
        "source": "GrETUA",
        "tags": ["jazz"],
        "scraped_at": "2025-01-04T08:30:00"
    })
}

#[tokio::test]
async fn missing_primary_falls_back_to_test_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/events.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/test_events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([gretua_concert()])))
        .expect(1)
        .mount(&server)
        .await;

    let primary = format!("{}/data/events.json", server.uri());
    let fallback = format!("{}/data/test_events.json", server.uri());
    let loaded = EventLoader::new(DataFeed::new(), primary, fallback.clone())
        .load()
        .await
        .unwrap();

    assert_eq!(loaded.location, fallback);
    assert_eq!(loaded.events.len(), 1);
    assert_eq!(loaded.events[0].title, "Concerto de Jazz");
}

#[tokio::test]
async fn export_envelope_is_accepted_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "last_updated": "2025-01-04T08:30:00",
            "total_events": 1,
            "events": [gretua_concert()]
        })))
        .mount(&server)
        .await;

    let primary = format!("{}/data/events.json", server.uri());
    let fallback = format!("{}/data/test_events.json", server.uri());
    let loaded = EventLoader::new(DataFeed::new(), primary.clone(), fallback)
        .load()
        .await
        .unwrap();

    assert_eq!(loaded.location, primary);
    assert_eq!(
        loaded.last_updated,
        NaiveDate::from_ymd_opt(2025, 1, 4).unwrap().and_hms_opt(8, 30, 0)
    );

    let app = AppState::from_load(Ok(loaded));
    let items = app.list_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].slug, SourceSlug::Gretua);
    assert_eq!(items[0].tags, vec!["jazz".to_string()]);
}

#[tokio::test]
async fn both_locations_failing_reports_each_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/events.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/test_events.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let primary = format!("{}/data/events.json", server.uri());
    let fallback = format!("{}/data/test_events.json", server.uri());
    let result = EventLoader::new(DataFeed::new(), primary, fallback).load().await;

    let Err(LoadError::Exhausted { primary, fallback, .. }) = result else {
        panic!("expected both locations to fail");
    };
    assert!(matches!(primary, FeedError::BadStatus { status, .. } if status.as_u16() == 500));
    assert!(matches!(fallback, FeedError::ParseError(_)));
}

#[tokio::test]
async fn failed_load_renders_single_error_entry() {
    let server = MockServer::start().await;

    let primary = format!("{}/data/events.json", server.uri());
    let fallback = format!("{}/data/test_events.json", server.uri());
    let result = EventLoader::new(DataFeed::new(), primary, fallback).load().await;
    let app = AppState::from_load(result);

    assert_eq!(app.list.len(), 1);
    assert!(matches!(app.list[0], ListEntry::LoadFailed(_)));
    assert!(app.calendar.entries().is_empty());

    let now = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let stats = app.statistics(now);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.next_event_label(), "-");
}
