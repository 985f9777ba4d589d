use crate::server::{Server, ServerConfig, DEFAULT_PORT};

#[tokio::test]
async fn example_config_is_valid() {
    ServerConfig::from_config_file("config.example.yaml")
        .await
        .expect("Example config is not parsable");
}

#[tokio::test]
async fn missing_config_file_is_an_error() {
    assert!(ServerConfig::from_config_file("does_not_exist.yaml")
        .await
        .is_err());
}

#[test]
fn empty_config_uses_defaults() {
    let config: ServerConfig = serde_yaml::from_str("{}").unwrap();

    assert_eq!(config.socket_address().port(), DEFAULT_PORT);
    assert_eq!(
        config.socket_address(),
        ServerConfig::default().socket_address()
    );
}

#[test]
fn port_override_keeps_ip() {
    let config: ServerConfig = serde_yaml::from_str("socket_address: 127.0.0.1:5000").unwrap();
    let config = config.with_port(9000);

    assert_eq!(config.socket_address().to_string(), "127.0.0.1:9000");
}

#[tokio::test]
async fn server_does_not_start_when_store_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    tokio::fs::write(&path, b"{ not json").await.unwrap();

    let yaml = format!(
        "socket_address: 127.0.0.1:0\nstore:\n  kind: file\n  path: {:?}\n",
        path.display().to_string()
    );
    let config: ServerConfig = serde_yaml::from_str(&yaml).unwrap();

    let err = Server::new(config).run().await.unwrap_err();

    assert!(format!("{err:#}").contains("Failed to connect to the contact store"));
}
