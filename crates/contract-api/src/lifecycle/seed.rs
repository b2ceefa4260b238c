//! Records loaded at startup. Resets return to exactly this state.

use crate::model::{ItemCreate, UserRegistration};

pub fn items() -> Vec<ItemCreate> {
    vec![
        ItemCreate::new("Sample Item", Some("A sample item description")),
        ItemCreate::new("Another Item", None),
    ]
}

pub fn users() -> Vec<UserRegistration> {
    vec![UserRegistration::new(
        "admin",
        "admin@example.com",
        Some("Administrator"),
        "adminpass",
    )]
}
