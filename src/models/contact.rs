// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mock contact form state.
//!
//! The form looks like an email composer but never sends anything:
//! submitting only raises the demonstration notice.

pub const DEMO_NOTICE: &str =
    "This form is for demonstration purposes. Please use the social links above to contact me.";

/// Draft contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub from: String,
    pub subject: String,
    pub message: String,
    notice: Option<&'static str>,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every editable field is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        [&self.from, &self.subject, &self.message]
            .iter()
            .all(|field| field.trim().is_empty())
    }

    /// "Send" the message: nothing leaves the application. The draft is
    /// kept so the visitor can copy it elsewhere.
    pub fn submit(&mut self) -> &'static str {
        log::info!(
            "Mock contact form submitted ({} chars, blank: {}); nothing sent",
            self.message.chars().count(),
            self.is_blank()
        );
        self.notice = Some(DEMO_NOTICE);
        DEMO_NOTICE
    }

    /// Notice raised by the last submit, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
