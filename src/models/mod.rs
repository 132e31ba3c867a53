// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static content and form state.

pub mod catalog;
pub mod contact;
pub mod profile;
pub mod project;
