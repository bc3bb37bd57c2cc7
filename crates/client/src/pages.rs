//! Pagination over event lookup queries.

use crate::{Error, Result, TrailClient};
use futures::{stream, Stream};
use trailkit_core::{ContinuationToken, Event, LookupPage, LookupRequest};

/// Pagination state for one logical query.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageState {
    /// No page fetched yet.
    Initial,
    /// A page was returned with a continuation token.
    HasMore(ContinuationToken),
    /// A page was returned without a continuation token.
    Exhausted,
}

/// Drives pagination over a single logical lookup query.
///
/// The continuation token is the entire protocol state so an
/// interrupted pagination can be resumed from any retained token
/// with [EventPages::resume]. A single pagination must not be
/// advanced from two call sites at once because the next page is
/// defined by the token of the immediately preceding call;
/// [EventPages::next_page] takes `&mut self` so the borrow
/// checker rules that out for one value. Submitting the query
/// again after exhaustion restarts from the most recent events.
pub struct EventPages<'a> {
    client: &'a TrailClient,
    request: LookupRequest,
    state: PageState,
}

impl<'a> EventPages<'a> {
    pub(crate) fn new(client: &'a TrailClient, request: LookupRequest) -> Self {
        Self {
            client,
            request,
            state: PageState::Initial,
        }
    }

    /// Resume a pagination from a retained continuation token.
    pub fn resume(
        client: &'a TrailClient,
        request: LookupRequest,
        token: ContinuationToken,
    ) -> Self {
        Self {
            client,
            request,
            state: PageState::HasMore(token),
        }
    }

    /// Whether the query has returned its final page.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, PageState::Exhausted)
    }

    /// Fetch the next page, or `None` once the query is
    /// exhausted.
    pub async fn next_page(&mut self) -> Result<Option<LookupPage>> {
        let request = match &self.state {
            PageState::Initial => self.request.clone(),
            PageState::HasMore(token) => {
                self.request.clone().with_token(Some(token.clone()))
            }
            PageState::Exhausted => return Ok(None),
        };
        let page = self.client.lookup_events(&request).await?;
        self.state = match page.next_token() {
            Some(token) => PageState::HasMore(token.clone()),
            None => PageState::Exhausted,
        };
        Ok(Some(page))
    }

    /// Collect the events from every remaining page.
    pub async fn all_events(mut self) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        while let Some(page) = self.next_page().await? {
            events.extend(page.into_events());
        }
        Ok(events)
    }

    /// Convert into a stream of pages.
    pub fn into_stream(
        self,
    ) -> impl Stream<Item = Result<LookupPage>> + 'a {
        stream::try_unfold(self, |mut pages| async move {
            let page = pages.next_page().await?;
            Ok::<_, Error>(page.map(|page| (page, pages)))
        })
    }
}
