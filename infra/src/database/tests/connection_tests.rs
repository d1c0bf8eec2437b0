//! Unit tests for database connection pool

use contacts_shared::config::DatabaseConfig;

use crate::database::connection::DatabasePool;
use crate::InfrastructureError;

#[tokio::test]
async fn test_pool_creation_with_zero_connections() {
    let config = DatabaseConfig {
        max_connections: 0,
        ..Default::default()
    };

    let result = DatabasePool::new(&config).await;
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
async fn test_pool_creation_with_unreachable_server() {
    let config = DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        connect_timeout: 1,
        ..Default::default()
    };

    let result = DatabasePool::new(&config).await;
    assert!(matches!(result, Err(InfrastructureError::Database(_))));
}

#[test]
fn test_infrastructure_error_becomes_internal() {
    let error: contacts_core::errors::DomainError =
        InfrastructureError::Config("bad".to_string()).into();

    assert!(matches!(
        error,
        contacts_core::errors::DomainError::Internal { message } if message.contains("bad")
    ));
}
