// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static profile content for the hero, about and contact sections.

/// An external profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

/// A headline figure in the about grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

/// A small titled card in the about grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactCard {
    pub title: &'static str,
    pub body: &'static str,
    pub note: Option<&'static str>,
}

pub const NAME: &str = "Eduard Kechedzhiev";
pub const INITIALS: &str = "EK";
pub const FIRST_NAME: &str = "Eduard";
pub const TITLE: &str = "Quantitative Developer & Systems Programmer";
pub const TAGLINE: &str = "Building quantitative trading systems and performance-critical \
    applications. Focused on machine learning, systems programming, and financial modeling.";

pub const BIO: &str = "I'm a quantitative developer and systems programmer with a passion for \
    building high-performance trading systems. My work focuses on developing machine learning \
    models for market analysis, implementing efficient backtesting frameworks, and creating \
    performance-critical applications in Rust and C.";

pub const HIGHLIGHT: Highlight = Highlight {
    value: "71%",
    label: "Out-of-Sample Accuracy",
    detail: "Market regime classification model",
};

pub const FACTS: [FactCard; 3] = [
    FactCard {
        title: "Location",
        body: "Toronto, Canada",
        note: Some("Awaiting university admissions"),
    },
    FactCard {
        title: "Current Focus",
        body: "Building quantitative trading strategies",
        note: None,
    },
    FactCard {
        title: "Interests",
        body: "Performance-critical applications, machine learning for finance, systems \
            programming, and low-level graphics programming",
        note: None,
    },
];

pub const TECH_STACK: [&str; 8] = [
    "Python",
    "Rust",
    "C",
    "PyTorch",
    "Transformers",
    "OpenGL",
    "Pandas",
    "NumPy",
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        icon: "🐙",
        url: "https://github.com/kechprog",
    },
    SocialLink {
        name: "Telegram",
        icon: "✉",
        url: "https://t.me/Eduardk_k",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "🔗",
        url: "#",
    },
];

/// Fixed recipient shown in the mock contact form.
pub const CONTACT_EMAIL: &str = "eduard@example.com";

impl SocialLink {
    /// Placeholder links (`#`) have no destination yet.
    pub fn is_placeholder(&self) -> bool {
        self.url == "#"
    }
}
