// SPDX-License-Identifier: MPL-2.0
//! `synth_lens` is a desktop front end for an AI-generated image detector,
//! built with the Iced GUI framework.
//!
//! The user picks or drops an image, it is validated locally (type and size),
//! uploaded to a remote classification service, and the verdict is shown as
//! "synthetic" or "real" with a confidence score.

pub mod app;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
