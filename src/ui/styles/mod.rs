// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for buttons and containers.

pub mod button;
pub mod container;
