//! Shared building blocks of the roster page.
pub mod activities_panel;
pub mod activity_card;
pub mod empty_state;
pub mod message_area;
pub mod pico;
pub mod signup_form;
