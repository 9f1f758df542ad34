use std::time::Duration;

use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(name: &str, base_url: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("coingecko-cli-{}-{name}.yaml", std::process::id()));
    let yaml = format!("base_url: \"{base_url}\"\nretry_count: 0\nretry_wait_ms: 10\n");
    std::fs::write(&path, yaml).expect("write config");
    path
}

#[tokio::test]
async fn cli_ping_prints_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"gecko_says":"(V3) To the Moon!"}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config_path = write_config("ping", &server.uri());
    let output = tokio::time::timeout(
        Duration::from_secs(30),
        Command::new(env!("CARGO_BIN_EXE_coingecko"))
            .arg("--config")
            .arg(&config_path)
            .arg("ping")
            .env_remove("COINGECKO_API_KEY")
            .output(),
    )
    .await
    .expect("binary timed out")
    .expect("Failed to start coingecko binary");
    let _ = std::fs::remove_file(&config_path);

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is json");
    assert_eq!(value["gecko_says"], "(V3) To the Moon!");
}

#[tokio::test]
async fn cli_api_error_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/not-a-coin"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(r#"{"error":"coin not found"}"#, "application/json"))
        .mount(&server)
        .await;

    let config_path = write_config("coin", &server.uri());
    let output = tokio::time::timeout(
        Duration::from_secs(30),
        Command::new(env!("CARGO_BIN_EXE_coingecko"))
            .arg("--config")
            .arg(&config_path)
            .arg("coin")
            .arg("not-a-coin")
            .output(),
    )
    .await
    .expect("binary timed out")
    .expect("Failed to start coingecko binary");
    let _ = std::fs::remove_file(&config_path);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("coin failed"), "stderr: {stderr}");
    assert!(stderr.contains("404"), "stderr: {stderr}");
}
