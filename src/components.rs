//! Shared widgets used across the pages.

pub mod alert;
pub mod category_chips;
pub mod confirm_dialog;
pub mod event_card;
pub mod event_form;
pub mod footer;
pub mod navbar;
pub mod search_bar;
pub mod stats;
