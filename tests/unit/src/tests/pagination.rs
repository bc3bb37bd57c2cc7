use super::mock_client;
use anyhow::Result;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use trailkit_client::{Error, EventPages};
use trailkit_core::{
    AttributeKey, ContinuationToken, LookupAttribute, LookupRequest,
};
use trailkit_test_utils::{
    init_tracing,
    mock::{base_time, event_log, MockService},
};

#[tokio::test]
async fn default_page_is_bounded_and_reverse_chronological() -> Result<()> {
    init_tracing();
    let (_, client) = mock_client(MockService::new(event_log(25)?))?;

    let page = client.lookup_events_default().await?;
    assert_eq!(10, page.events().len());
    assert!(!page.is_last());

    let times: Vec<_> = page
        .events()
        .iter()
        .filter_map(|event| event.event_time().cloned())
        .collect();
    let mut sorted = times.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(sorted, times);
    Ok(())
}

#[tokio::test]
async fn short_log_returns_single_page_without_token() -> Result<()> {
    let (_, client) = mock_client(MockService::new(event_log(4)?))?;
    let page = client.lookup_events_default().await?;
    assert_eq!(4, page.events().len());
    assert!(page.is_last());
    Ok(())
}

#[tokio::test]
async fn pagination_terminates_and_sees_every_event() -> Result<()> {
    let (service, client) = mock_client(MockService::new(event_log(25)?))?;

    let mut pages = client.pages(LookupRequest::default());
    let mut total = 0;
    let mut count = 0;
    while let Some(page) = pages.next_page().await? {
        total += page.events().len();
        count += 1;
    }
    assert_eq!(25, total);
    assert_eq!(3, count);
    assert!(pages.is_exhausted());

    // advancing after exhaustion issues no further calls
    let calls = service.calls();
    assert!(pages.next_page().await?.is_none());
    assert_eq!(calls, service.calls());
    Ok(())
}

#[tokio::test]
async fn token_resubmission_is_idempotent() -> Result<()> {
    let (_, client) = mock_client(MockService::new(event_log(25)?))?;

    let first = client.lookup_events_default().await?;
    let token = first.next_token().cloned().expect("more pages");

    let request = LookupRequest::default().with_token(Some(token));
    let second = client.lookup_events(&request).await?;
    let retry = client.lookup_events(&request).await?;
    assert_eq!(second, retry);
    Ok(())
}

#[tokio::test]
async fn filter_returns_only_matching_events() -> Result<()> {
    let (_, client) = mock_client(MockService::new(event_log(80)?))?;

    let request = LookupRequest::builder()
        .attribute(LookupAttribute::new(
            AttributeKey::EventName,
            "DeleteTrail",
        ))
        .max_results(50)
        .build()?;
    let events = client.pages(request).all_events().await?;
    assert_eq!(40, events.len());
    assert!(events
        .iter()
        .all(|event| event.event_name() == Some("DeleteTrail")));
    Ok(())
}

#[tokio::test]
async fn time_bounds_filter_events() -> Result<()> {
    let (_, client) = mock_client(MockService::new(event_log(25)?))?;

    let end = base_time()?;
    let start = end.checked_sub_seconds(600).expect("in range");
    let request = LookupRequest::builder()
        .start_time(start)
        .end_time(end)
        .build()?;
    let events = client.pages(request).all_events().await?;
    // one event per minute, bounds inclusive
    assert_eq!(11, events.len());
    Ok(())
}

#[tokio::test]
async fn resume_from_retained_token() -> Result<()> {
    let (_, client) = mock_client(MockService::new(event_log(25)?))?;

    let first = client.lookup_events_default().await?;
    let token = first.next_token().cloned().expect("more pages");

    let mut resumed = EventPages::resume(
        &client,
        LookupRequest::default(),
        token.clone(),
    );
    let page = resumed.next_page().await?.expect("second page");

    let direct = client
        .lookup_events(&LookupRequest::default().with_token(Some(token)))
        .await?;
    assert_eq!(direct, page);
    Ok(())
}

#[tokio::test]
async fn resubmission_after_exhaustion_restarts() -> Result<()> {
    let (_, client) = mock_client(MockService::new(event_log(25)?))?;

    let first = client.lookup_events_default().await?;
    let mut pages = client.pages(LookupRequest::default());
    while pages.next_page().await?.is_some() {}

    let restarted = client.lookup_events_default().await?;
    assert_eq!(first, restarted);
    Ok(())
}

#[tokio::test]
async fn stream_yields_every_page() -> Result<()> {
    let (_, client) = mock_client(MockService::new(event_log(25)?))?;

    let pages: Vec<_> = client
        .pages(LookupRequest::default())
        .into_stream()
        .try_collect()
        .await?;
    assert_eq!(3, pages.len());
    assert!(pages.last().map(|page| page.is_last()).unwrap_or_default());
    Ok(())
}

#[tokio::test]
async fn invalid_token_is_a_distinct_error() -> Result<()> {
    let (_, client) = mock_client(MockService::new(event_log(5)?))?;

    let request = LookupRequest::default()
        .with_token(Some(ContinuationToken::new("bogus")));
    let result = client.lookup_events(&request).await;
    assert!(matches!(result, Err(Error::InvalidContinuationToken)));
    Ok(())
}
