// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rewrite module — local text transformations for the "AI Improve" page.

pub mod engine;

pub use engine::rewrite;
