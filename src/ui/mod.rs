// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Folio application.

pub mod about;
pub mod carousel;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod palette;
pub mod projects;
