//! DOM regions driven by the listing controller.
//!
//! Hosts implement [`ListingView`] over their document; [`DocumentRegions`]
//! keeps the regions as strings for headless use and tests.

/// Visual state of the "load more" button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadMoreState {
    pub disabled: bool,
    /// Spinner shown instead of the label.
    pub loading: bool,
}

pub trait ListingView {
    /// Empties the server-rendered initial grid.
    fn clear_initial(&mut self);
    /// Replaces the contents of the append grid.
    fn replace_appended(&mut self, html: &str);
    /// Inserts markup at the end of the append grid.
    fn append(&mut self, html: &str);
    fn set_total_label(&mut self, text: &str);
    fn set_page_strip(&mut self, html: &str);
    fn set_load_more(&mut self, state: LoadMoreState);
    /// Toggles the loading overlay.
    fn set_loading(&mut self, loading: bool);
    /// Scrolls the append grid into view.
    fn scroll_to_results(&mut self);
    /// Blocking, user-visible failure notification.
    fn alert(&mut self, message: &str);
}

/// In-memory document with one field per region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentRegions {
    pub initial: String,
    pub appended: String,
    pub total_label: String,
    pub page_strip: String,
    pub load_more: LoadMoreState,
    pub loading: bool,
    pub scrolls: usize,
    pub alerts: Vec<String>,
}

impl DocumentRegions {
    /// Document whose initial grid holds server-rendered markup.
    pub fn with_initial(html: impl Into<String>) -> Self {
        Self {
            initial: html.into(),
            ..Self::default()
        }
    }

    /// Initial and appended grids, in document order.
    pub fn grid(&self) -> String {
        format!("{}{}", self.initial, self.appended)
    }
}

impl ListingView for DocumentRegions {
    fn clear_initial(&mut self) {
        self.initial.clear();
    }

    fn replace_appended(&mut self, html: &str) {
        self.appended = html.to_string();
    }

    fn append(&mut self, html: &str) {
        self.appended.push_str(html);
    }

    fn set_total_label(&mut self, text: &str) {
        self.total_label = text.to_string();
    }

    fn set_page_strip(&mut self, html: &str) {
        self.page_strip = html.to_string();
    }

    fn set_load_more(&mut self, state: LoadMoreState) {
        self.load_more = state;
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn scroll_to_results(&mut self) {
        self.scrolls += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
