use ado_pool_stats::run;
use clap::Parser as _;
use pool_stats_config::{
    Args,
    RunTimestamp,
};
use pretty_assertions::assert_eq;
use serde_json::{
    json,
    Value,
};
use std::path::Path;
use temp_dir::TempDir;
use wiremock::{
    matchers::{
        method,
        path,
    },
    Mock,
    MockServer,
    ResponseTemplate,
};

fn args(server: &MockServer, dir: &TempDir) -> Args {
    Args::try_parse_from([
        "ado-pool-stats".to_string(),
        "--url".to_string(),
        server.uri(),
        "--token".to_string(),
        "token".to_string(),
        "--pools-file".to_string(),
        dir.child("pools.json").display().to_string(),
        "--output-dir".to_string(),
        dir.child("pools").display().to_string(),
        "--summary-file".to_string(),
        dir.child("summary.json").display().to_string(),
        "--delay".to_string(),
        "0s".to_string(),
    ])
    .unwrap()
}

/// The single log written into `pool_dir` during the run.
fn only_log(pool_dir: &Path) -> (String, String) {
    let entries: Vec<_> = std::fs::read_dir(pool_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);
    let file_name = entries[0].file_name().unwrap().to_str().unwrap().to_string();
    (file_name, std::fs::read_to_string(&entries[0]).unwrap())
}

#[tokio::test]
async fn runs_pools_file_end_to_end() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.child("pools.json"), r#"{"p1":"PoolA"}"#).unwrap();
    for endpoint in ["agents", "jobrequests"] {
        Mock::given(method("GET"))
            .and(path(format!("/_apis/distributedtask/pools/p1/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0, "value": [] })))
            .mount(&server)
            .await;
    }

    run(args(&server, &dir)).await.unwrap();

    let (file_name, log) = only_log(&dir.child("pools").join("PoolA"));
    assert!(file_name.parse::<RunTimestamp>().is_ok());
    assert_eq!(
        log,
        "\
Pool: PoolA
totalAgents: 0
activeAgents: 0
idleAgents: 0
enabledAgents: 0
disabledAgents: 0
onlineAgents: 0
offlineAgents: 0
agentUtilization: NaN
Builds in the queue: 0
"
    );

    let summary: Value = serde_json::from_str(&std::fs::read_to_string(dir.child("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["runTimestamp"], file_name.as_str());
    assert_eq!(summary["pools"][0]["poolName"], "PoolA");
}

#[tokio::test]
async fn malformed_pools_file_processes_nothing() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.child("pools.json"), "{ not json").unwrap();

    run(args(&server, &dir)).await.unwrap();

    assert!(!dir.child("pools").exists());
    let summary: Value = serde_json::from_str(&std::fs::read_to_string(dir.child("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["pools"], json!([]));
}

#[tokio::test]
async fn missing_pools_file_fails_the_run() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    assert!(run(args(&server, &dir)).await.is_err());
    assert!(!dir.child("summary.json").exists());
}
