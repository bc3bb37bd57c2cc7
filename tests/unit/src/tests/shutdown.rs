use super::mock_client;
use anyhow::Result;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use trailkit_client::Error;
use trailkit_core::LookupRequest;
use trailkit_test_utils::mock::{event_log, MockService};

#[tokio::test]
async fn calls_after_shutdown_fail() -> Result<()> {
    let (service, client) = mock_client(MockService::new(event_log(3)?))?;

    client.lookup_events_default().await?;

    client.shutdown();
    client.shutdown(); // idempotent

    let result = client.lookup_events_default().await;
    assert!(matches!(result, Err(Error::Closed)));
    let result = client.lookup_events(&LookupRequest::default()).await;
    assert!(matches!(result, Err(Error::Closed)));

    // nothing reached the service after shutdown
    assert_eq!(1, service.calls());
    Ok(())
}

#[tokio::test]
async fn shutdown_releases_the_transport() -> Result<()> {
    let (service, client) = mock_client(MockService::new(event_log(3)?))?;

    client.lookup_events_default().await?;
    // the client holds the only other handle on the transport
    assert_eq!(2, Arc::strong_count(&service));

    client.shutdown();
    assert_eq!(1, Arc::strong_count(&service));
    Ok(())
}
