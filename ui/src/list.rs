//! Paginated list controller, one instance per entity type.
//!
//! The backend does not report a total count, so [`ListController`] estimates
//! it from the size of each page: a short page is the last one and gives an
//! exact total, a full page assumes at least one more record exists. The
//! estimate can overstate the total by up to `items_per_page - 1` until the
//! true last page is fetched, which shows one extra, empty page in the
//! pagination control.

use api::AdminClient;
use types::{ApiError, Listing, PageQuery, Result};

use crate::pagination::{self, PageSummary, PaginationView};

/// Where a controller gets its pages from. The caller issues a [`Ticket`],
/// fetches its query here, and hands the result to
/// [`ListController::complete`].
#[allow(async_fn_in_trait)]
pub trait ListSource<R: Listing> {
    async fn fetch_page(&self, query: &PageQuery<R::Filter>) -> Result<Vec<R>>;
}

impl<R: Listing> ListSource<R> for AdminClient {
    async fn fetch_page(&self, query: &PageQuery<R::Filter>) -> Result<Vec<R>> {
        self.list(query).await
    }
}

/// An issued page request. Only the most recently issued ticket may update
/// the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket<F> {
    seq: u64,
    query: PageQuery<F>,
}

impl<F> Ticket<F> {
    pub fn query(&self) -> &PageQuery<F> {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The page was stored.
    Loaded,
    /// A newer request was issued meanwhile; the result was dropped.
    Stale,
}

/// Estimated record count after fetching `returned` records at `offset`.
pub fn estimate_total(offset: u64, returned: usize, items_per_page: u32) -> u64 {
    let returned = returned as u64;
    if returned < u64::from(items_per_page) {
        offset + returned
    } else {
        offset + returned + 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListController<R: Listing> {
    current_page: u32,
    items_per_page: u32,
    total_items: u64,
    filter: R::Filter,
    records: Vec<R>,
    /// Page and filter the stored records belong to.
    shown_page: u32,
    shown_filter: R::Filter,
    issued: u64,
    pending: Option<u64>,
}

impl<R: Listing> ListController<R> {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
            filter: R::Filter::default(),
            records: Vec::new(),
            shown_page: 1,
            shown_filter: R::Filter::default(),
            issued: 0,
            pending: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn filter(&self) -> &R::Filter {
        &self.filter
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.current_page - 1) * u64::from(self.items_per_page)
    }

    /// `ceil(total_items / items_per_page)`, never less than 1.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.items_per_page)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary::new(self.offset(), self.records.len(), self.total_items)
    }

    pub fn pagination(&self) -> Option<PaginationView> {
        pagination::project(self.current_page, self.total_pages(), self.is_loading())
    }

    /// Replace the filter and go back to the first page.
    ///
    /// Always issues a request, superseding any that is still in flight.
    pub fn set_filter(&mut self, filter: R::Filter) -> Ticket<R::Filter> {
        self.filter = filter;
        self.current_page = 1;
        self.reload()
    }

    /// Move to `page`. Returns `None` without touching anything when the page
    /// is the current one, out of `[1, total_pages]`, or a fetch is pending.
    pub fn set_page(&mut self, page: u32) -> Option<Ticket<R::Filter>> {
        if page == self.current_page || page < 1 || page > self.total_pages() || self.is_loading()
        {
            return None;
        }

        self.current_page = page;
        Some(self.reload())
    }

    /// Issue a request for the current page and filter.
    pub fn reload(&mut self) -> Ticket<R::Filter> {
        self.issued += 1;
        self.pending = Some(self.issued);

        Ticket {
            seq: self.issued,
            query: PageQuery {
                offset: self.offset(),
                limit: self.items_per_page,
                filter: self.filter.clone(),
            },
        }
    }

    /// Apply the outcome of the request behind `ticket`.
    ///
    /// On error the previous records and total are kept, the current page and
    /// filter fall back to the ones those records belong to, and the error is
    /// handed back for the caller to report. `Unauthorized` leaves the controller
    /// entirely untouched.
    pub fn complete(
        &mut self,
        ticket: Ticket<R::Filter>,
        result: Result<Vec<R>>,
    ) -> Result<Completion> {
        if let Err(ApiError::Unauthorized) = result {
            return Err(ApiError::Unauthorized);
        }
        if self.pending != Some(ticket.seq) {
            tracing::debug!(seq = ticket.seq, "dropping stale page");
            return Ok(Completion::Stale);
        }
        self.pending = None;

        let mut records = match result {
            Ok(records) => records,
            Err(error) => {
                self.current_page = self.shown_page;
                self.filter = self.shown_filter.clone();
                return Err(error);
            }
        };
        let limit = ticket.query.limit as usize;
        if records.len() > limit {
            tracing::warn!(
                returned = records.len(),
                limit,
                "backend returned more records than requested"
            );
            records.truncate(limit);
        }

        self.total_items = estimate_total(ticket.query.offset, records.len(), self.items_per_page);
        self.records = records;
        self.shown_page = self.current_page;
        self.shown_filter = self.filter.clone();
        Ok(Completion::Loaded)
    }
}
