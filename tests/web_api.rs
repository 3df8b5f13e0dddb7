use std::sync::Arc;

use score_lens::config::Config;
use score_lens::engine::ScoreEngine;
use score_lens::web::server::serve;

const REPORT_JSON: &str = include_str!("fixtures/report.json");

async fn start_server() -> (String, Arc<ScoreEngine>) {
    let engine = Arc::new(ScoreEngine::new(Arc::new(Config::default())));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server_engine = engine.clone();
    tokio::spawn(async move {
        serve(listener, server_engine).await.unwrap();
    });

    (format!("http://{}", addr), engine)
}

#[tokio::test]
async fn test_dashboard_missing_until_report_posted() {
    let (base, _engine) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/api/dashboard", base)).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .post(format!("{}/api/report", base))
        .body(REPORT_JSON)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let view: serde_json::Value = client
        .get(format!("{}/api/dashboard", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(view["score"], 742);
    assert_eq!(view["category"], "Very Good");
    assert_eq!(view["riskBand"], "Low Risk");
    assert_eq!(view["metrics"].as_array().unwrap().len(), 5);
    assert_eq!(view["metrics"][4]["formattedValue"], "₹1,50,000");
    assert_eq!(view["gauge"]["bands"].as_array().unwrap().len(), 5);
    assert_eq!(view["history"]["synthetic"], false);
    assert_eq!(view["history"]["points"][0]["month"], "Aug 2026");
    assert_eq!(view["explanations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_bad_report_rejected() {
    let (base, engine) = start_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/report", base))
        .body("{\"score\": \"high\"}")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert!(engine.report().is_none());
}

#[tokio::test]
async fn test_gauge_endpoint() {
    let (base, _engine) = start_server().await;
    let gauge: serde_json::Value = reqwest::get(format!("{}/api/gauge?score=600", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(gauge["needleAngleDeg"], 0.0);
    assert_eq!(gauge["ratio"], 0.5);

    let gauge: serde_json::Value =
        reqwest::get(format!("{}/api/gauge?score=700&min=500&max=500", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    assert_eq!(gauge["ratio"], 0.0);
    assert_eq!(gauge["needleAngleDeg"], -90.0);
}

#[tokio::test]
async fn test_live_slots_after_load() {
    let (base, engine) = start_server().await;
    engine.load_report(score_lens::report::CreditReport::from_json(REPORT_JSON).unwrap());

    let live: serde_json::Value = reqwest::get(format!("{}/api/live", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let slots = live["slots"].as_object().unwrap();
    assert_eq!(slots.len(), 6);
    assert!(slots.contains_key("score"));
    assert!(slots.contains_key("Outstanding Debt"));

    let health = reqwest::get(format!("{}/healthz", base)).await.unwrap().text().await.unwrap();
    assert_eq!(health, "ok");
}
