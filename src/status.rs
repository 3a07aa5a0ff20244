//! Status region handling shared by every page: one element that shows the
//! outcome of the last action and fades out after a delay.

use std::time::Duration;

use leptos::logging::warn;

use crate::dom::{Deferred, Display, Dom, Tone};
use crate::error::RequestError;

pub struct StatusRegion<'a, D> {
    dom: &'a D,
    id: &'a str,
    hide_after: Duration,
}

impl<'a, D: Dom> StatusRegion<'a, D> {
    pub fn new(dom: &'a D, id: &'a str, hide_after: Duration) -> Self {
        Self {
            dom,
            id,
            hide_after,
        }
    }

    /// Shows `text`. `fade` schedules the region to hide again; without it
    /// any hide still pending from an earlier message is cancelled.
    pub fn show(&self, text: &str, tone: Tone, fade: bool) {
        if !self.dom.set_text(self.id, text) {
            warn!("[Status] #{} not found, dropping message: {}", self.id, text);
            return;
        }
        self.dom.set_style(self.id, "color", tone.color());
        self.dom.set_display(self.id, Display::Block);
        if fade {
            self.dom
                .defer(self.hide_after, Deferred::Hide(self.id.to_string()));
        } else {
            self.dom.cancel_hide(self.id);
        }
    }

    pub fn error(&self, err: &RequestError) {
        self.error_text(&err.to_string(), err.auto_hides());
    }

    pub fn error_text(&self, text: &str, fade: bool) {
        self.show(text, Tone::Error, fade);
    }

    pub fn success(&self, text: &str, fade: bool) {
        self.show(text, Tone::Success, fade);
    }

    pub fn clear(&self) {
        self.dom.set_text(self.id, "");
        self.dom.set_display(self.id, Display::None);
    }
}
