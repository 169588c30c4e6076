//! Button handling for the inventory summary.
//!
//! Buttons carry custom ids scoped to one command invocation, so presses on an older
//! summary never reach a newer one. Presses are read through a [`ButtonSubscription`],
//! which owns the deadline after which the buttons are removed.

use crate::core::summary::DetailView;
use futures_util::{Stream, StreamExt};
use poise::serenity_prelude as serenity;
use std::time::Duration;
use tokio::time::{Instant, timeout_at};

const CUSTOM_ID_PREFIX: &str = "inventory";

/// Custom id of the button for `view` on the summary of `invocation_id`.
#[must_use]
pub fn custom_id(invocation_id: u64, view: DetailView) -> String {
    format!("{CUSTOM_ID_PREFIX}:{invocation_id}:{}", view.slug())
}

/// Detail view requested by a button press, if it belongs to `invocation_id`.
#[must_use]
pub fn parse_custom_id(custom_id: &str, invocation_id: u64) -> Option<DetailView> {
    let rest = custom_id.strip_prefix(CUSTOM_ID_PREFIX)?.strip_prefix(':')?;
    let (id, slug) = rest.split_once(':')?;
    if id.parse::<u64>().ok()? != invocation_id {
        return None;
    }
    DetailView::from_slug(slug)
}

const fn button_style(view: DetailView) -> serenity::ButtonStyle {
    match view {
        DetailView::Prices => serenity::ButtonStyle::Primary,
        DetailView::Arcana => serenity::ButtonStyle::Success,
        DetailView::Immortals => serenity::ButtonStyle::Secondary,
    }
}

/// Action row with one button per detail view.
#[must_use]
pub fn detail_buttons(invocation_id: u64) -> serenity::CreateActionRow {
    serenity::CreateActionRow::Buttons(
        DetailView::ALL
            .into_iter()
            .map(|view| {
                serenity::CreateButton::new(custom_id(invocation_id, view))
                    .label(view.label())
                    .style(button_style(view))
            })
            .collect(),
    )
}

/// Time-bounded, cancellable subscription to button presses.
#[derive(Debug)]
pub struct ButtonSubscription {
    deadline: Instant,
    cancelled: bool,
}

impl ButtonSubscription {
    /// Subscription that expires `timeout` from now.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now() + timeout,
            cancelled: false,
        }
    }

    /// When the subscription expires.
    #[must_use]
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Ends the subscription early.
    pub const fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Cancelled, or the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.cancelled || Instant::now() >= self.deadline
    }

    /// Next press from `presses`, or `None` once the subscription has expired.
    ///
    /// A source that runs dry cancels the subscription.
    pub async fn next<S>(&mut self, presses: &mut S) -> Option<S::Item>
    where
        S: Stream + Unpin,
    {
        if self.is_expired() {
            return None;
        }

        match timeout_at(self.deadline, presses.next()).await {
            Ok(Some(press)) => Some(press),
            Ok(None) => {
                self.cancel();
                None
            }
            Err(_elapsed) => None,
        }
    }
}
