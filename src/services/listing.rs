//! Paginated listing controller.
//!
//! Owns the session state of the listing page and keeps the grid, total label,
//! page strip and load-more button consistent with it. Fetches are split into
//! `begin_*` (guards, state transition, ticket) and [`ListingController::complete_fetch`]
//! so hosts with their own asynchronous transport can await in between; the
//! plain handlers run both halves around the injected [`ListingReader`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::filter::FilterChange;
use crate::domain::listing::ListingPage;
use crate::events::FilterBus;
use crate::models::config::PaginationSettings;
use crate::render::ListingRenderer;
use crate::repository::errors::FetchResult;
use crate::repository::{ListingQuery, ListingReader};
use crate::view::{ListingView, LoadMoreState};

pub const LOAD_FAILED_MESSAGE: &str = "Something went wrong loading campsites. Please try again.";

/// How fetched cards are merged into the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMode {
    /// After the cards already shown.
    Append,
    /// Instead of every card currently shown, including the initial grid.
    Replace,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub endpoint: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub country: String,
    pub search: String,
    pub is_loading: bool,
}

impl From<&PaginationSettings> for SessionState {
    fn from(settings: &PaginationSettings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            current_page: settings.current_page.max(1),
            total_pages: settings.total_pages.max(1),
            country: settings.initial_country.trim().to_string(),
            search: settings.initial_search.trim().to_string(),
            is_loading: false,
        }
    }
}

/// An accepted fetch waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a ticket keeps the controller loading until it is completed"]
pub struct FetchTicket {
    pub query: ListingQuery,
    pub mode: FetchMode,
}

pub struct ListingController<R, V> {
    state: SessionState,
    repo: R,
    view: V,
    renderer: ListingRenderer,
}

impl<R, V> ListingController<R, V>
where
    R: ListingReader,
    V: ListingView,
{
    /// Takes the initial state from the page snapshot and draws the page strip
    /// and load-more button once.
    pub fn new(settings: &PaginationSettings, repo: R, view: V, renderer: ListingRenderer) -> Self {
        let mut controller = Self {
            state: SessionState::from(settings),
            repo,
            view,
            renderer,
        };
        controller.render_page_strip();
        controller.view.set_load_more(controller.load_more_state());
        controller
    }

    /// Routes filter notifications from `bus` into this controller.
    ///
    /// A notification arriving while the controller is borrowed is dropped,
    /// like any other event during a fetch.
    pub fn bind(controller: &Rc<RefCell<Self>>, bus: &FilterBus)
    where
        R: 'static,
        V: 'static,
    {
        let controller = Rc::clone(controller);
        bus.subscribe(move |change| match controller.try_borrow_mut() {
            Ok(mut controller) => {
                controller.on_filters_changed(change);
            }
            Err(_) => log::warn!("Dropping filter change while the listing is busy"),
        });
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Stores trimmed filter values without fetching.
    pub fn set_filters(&mut self, country: &str, search: &str) {
        self.state.country = country.trim().to_string();
        self.state.search = search.trim().to_string();
    }

    pub fn load_more_state(&self) -> LoadMoreState {
        LoadMoreState {
            disabled: self.state.is_loading || self.state.current_page >= self.state.total_pages,
            loading: self.state.is_loading,
        }
    }

    /// Stores the filters and reloads from page 1.
    pub fn on_filters_changed(&mut self, change: &FilterChange) -> bool {
        let ticket = self.begin_filters(change);
        self.run(ticket)
    }

    pub fn on_load_more_clicked(&mut self) -> bool {
        let ticket = self.begin_load_more();
        self.run(ticket)
    }

    pub fn on_page_number_clicked(&mut self, page: usize) -> bool {
        let ticket = self.begin_page(page);
        self.run(ticket)
    }

    /// Handles a click on a strip button carrying a raw `data-page` value.
    pub fn on_page_button(&mut self, data_page: &str) -> bool {
        match data_page.trim().parse::<usize>() {
            Ok(page) => self.on_page_number_clicked(page),
            Err(_) => false,
        }
    }

    /// Fetches `page` through the repository. Returns whether a request was
    /// issued.
    pub fn fetch_page(&mut self, page: usize, mode: FetchMode) -> bool {
        let ticket = self.begin_fetch(page, mode);
        self.run(ticket)
    }

    /// Refused without storing the filters while a fetch is outstanding, so
    /// the grid never mixes results of two filter sets.
    pub fn begin_filters(&mut self, change: &FilterChange) -> Option<FetchTicket> {
        if self.state.is_loading {
            log::warn!("Dropping filter change while a fetch is in flight");
            return None;
        }
        self.set_filters(&change.country, &change.search);
        self.begin_fetch(1, FetchMode::Replace)
    }

    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        if self.state.is_loading || self.state.current_page >= self.state.total_pages {
            return None;
        }
        self.begin_fetch(self.state.current_page + 1, FetchMode::Append)
    }

    pub fn begin_page(&mut self, page: usize) -> Option<FetchTicket> {
        if page == self.state.current_page || page < 1 || page > self.state.total_pages {
            return None;
        }
        let ticket = self.begin_fetch(page, FetchMode::Replace)?;
        self.view.scroll_to_results();
        Some(ticket)
    }

    /// Enters the loading state and returns the request to perform, or `None`
    /// without touching anything when a fetch is already outstanding.
    pub fn begin_fetch(&mut self, page: usize, mode: FetchMode) -> Option<FetchTicket> {
        if self.state.is_loading || page == 0 {
            return None;
        }

        let query = ListingQuery::new(self.state.endpoint.clone(), page)
            .country(&self.state.country)
            .search(&self.state.search);
        log::debug!("Fetching {} ({mode:?})", query.url());

        self.state.is_loading = true;
        self.view.set_loading(true);
        self.view.set_load_more(self.load_more_state());

        Some(FetchTicket { query, mode })
    }

    /// Applies the outcome of a ticket and leaves the loading state.
    ///
    /// Failures are reported to the user and leave page and total untouched.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, outcome: FetchResult<ListingPage>) {
        let applied = outcome
            .map_err(|err| err.to_string())
            .and_then(|page| self.apply_page(&ticket, page));

        if let Err(err) = applied {
            log::error!("Pagination error: {err}");
            self.view.alert(LOAD_FAILED_MESSAGE);
        }

        self.state.is_loading = false;
        self.view.set_loading(false);
        self.view.set_load_more(self.load_more_state());
    }

    fn run(&mut self, ticket: Option<FetchTicket>) -> bool {
        let Some(ticket) = ticket else {
            return false;
        };
        let outcome = self.repo.fetch_listing_page(&ticket.query);
        self.complete_fetch(ticket, outcome);
        true
    }

    fn apply_page(&mut self, ticket: &FetchTicket, page: ListingPage) -> Result<(), String> {
        let cards = self
            .renderer
            .render_cards(&page.results)
            .map_err(|err| err.to_string())?;

        let current = page
            .current_page
            .filter(|p| *p > 0)
            .unwrap_or(ticket.query.page);
        let total = page
            .total_pages
            .filter(|t| *t > 0)
            .unwrap_or(self.state.total_pages)
            .max(current);

        self.state.current_page = current;
        self.state.total_pages = total;

        match ticket.mode {
            FetchMode::Replace => {
                self.view.clear_initial();
                self.view.replace_appended(&cards);
            }
            FetchMode::Append => self.view.append(&cards),
        }

        self.view.set_total_label(&format!("Total campsites: {}", page.count));
        self.render_page_strip();
        Ok(())
    }

    fn render_page_strip(&mut self) {
        match self
            .renderer
            .render_page_strip(self.state.current_page, self.state.total_pages)
        {
            Ok(html) => self.view.set_page_strip(&html),
            Err(err) => log::error!("Failed to render page strip: {err}"),
        }
    }
}
