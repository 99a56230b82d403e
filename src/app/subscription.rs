// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window drag & drop events are routed; widgets handle the rest.

use super::Message;
use iced::{event, window, Subscription};

/// Maps file hover and drop events to upload messages.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}
