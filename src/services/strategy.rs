//! Selection of the one filtering strategy a deployment runs.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::FilterBus;
use crate::models::config::FilterMode;
use crate::repository::ListingReader;
use crate::services::listing::ListingController;
use crate::services::local_filter::LocalListing;
use crate::view::ListingView;

/// Receiver of filter notifications.
pub enum FilterTarget<R, V> {
    /// Refetch page 1 through the listing controller.
    Server(Rc<RefCell<ListingController<R, V>>>),
    /// Hide and show cards already on the page.
    Client(Rc<RefCell<LocalListing>>),
}

impl<R, V> FilterTarget<R, V>
where
    R: ListingReader + 'static,
    V: ListingView + 'static,
{
    pub fn for_mode(
        mode: FilterMode,
        controller: &Rc<RefCell<ListingController<R, V>>>,
        local: &Rc<RefCell<LocalListing>>,
    ) -> Self {
        match mode {
            FilterMode::Server => Self::Server(Rc::clone(controller)),
            FilterMode::Client => Self::Client(Rc::clone(local)),
        }
    }

    /// Subscribes exactly one strategy to `bus`.
    pub fn bind(self, bus: &FilterBus) {
        match self {
            Self::Server(controller) => ListingController::bind(&controller, bus),
            Self::Client(local) => bus.subscribe(move |change| {
                let visible = local.borrow_mut().apply(change);
                log::debug!("{visible} cards match the filters");
            }),
        }
    }
}
