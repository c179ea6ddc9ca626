//! In-memory HTML page.

use super::{Notice, PageView};
use crate::checkout::CheckoutForm;

/// In-memory page holding the rendered state of each cart element.
///
/// Elements that are `None` are absent from the page. Notices accumulate in
/// the order they were shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlPage {
    badges: Vec<String>,
    checkout_items: Option<String>,
    checkout_total: Option<String>,
    form: Option<CheckoutForm>,
    notices: Vec<Notice>,
    location: Option<String>,
}

impl HtmlPage {
    /// A page with `badges` badge elements and nothing else, like a menu page.
    #[must_use]
    pub fn with_badges(badges: usize) -> Self {
        Self {
            badges: vec![String::new(); badges],
            ..Self::default()
        }
    }

    /// A checkout page: one badge, the item container, the total, and the form.
    #[must_use]
    pub fn checkout() -> Self {
        Self {
            checkout_items: Some(String::new()),
            checkout_total: Some(String::new()),
            form: Some(CheckoutForm::default()),
            ..Self::with_badges(1)
        }
    }

    /// Current badge texts.
    #[must_use]
    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    /// Rendered item list, if the page has a container.
    #[must_use]
    pub fn checkout_items(&self) -> Option<&str> {
        self.checkout_items.as_deref()
    }

    /// Total text, if the page has a total element.
    #[must_use]
    pub fn checkout_total(&self) -> Option<&str> {
        self.checkout_total.as_deref()
    }

    /// Current form values, if the page has a checkout form.
    #[must_use]
    pub const fn form(&self) -> Option<&CheckoutForm> {
        self.form.as_ref()
    }

    /// Mutable form values, for filling the form in.
    pub const fn form_mut(&mut self) -> Option<&mut CheckoutForm> {
        self.form.as_mut()
    }

    /// Every notice shown so far.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// The most recent notice.
    #[must_use]
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Where the page navigated to, if it did.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl PageView for HtmlPage {
    fn has_checkout_container(&self) -> bool {
        self.checkout_items.is_some()
    }

    fn has_checkout_total(&self) -> bool {
        self.checkout_total.is_some()
    }

    fn set_badges(&mut self, count: u64) {
        let text = count.to_string();
        for badge in &mut self.badges {
            badge.clone_from(&text);
        }
    }

    fn set_checkout_items(&mut self, html: &str) {
        if let Some(items) = self.checkout_items.as_mut() {
            html.clone_into(items);
        }
    }

    fn set_checkout_total(&mut self, text: &str) {
        if let Some(total) = self.checkout_total.as_mut() {
            text.clone_into(total);
        }
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn reset_checkout_form(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.reset();
        }
    }

    fn navigate(&mut self, location: &str) {
        self.location = Some(location.to_owned());
    }
}
