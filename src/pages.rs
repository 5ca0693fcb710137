//! Routed pages. Layout stays functional; styling is whatever daisyUI
//! gives for free.

pub mod activate_account;
pub mod category;
pub mod event_create;
pub mod event_detail;
pub mod event_edit;
pub mod event_list;
pub mod forgot_password;
pub mod home;
pub mod legal;
pub mod my_events;
pub mod organizer;
pub mod participant;
pub mod profile;
pub mod resend_confirmation;
pub mod reset_password;
pub mod search;
pub mod signin;
pub mod signup;
