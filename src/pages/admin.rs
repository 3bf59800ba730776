//! Admin page - password login, then the settings form.
//!
//! The admin password is part of the configuration record itself and is
//! compared exactly (no case folding - unlike magic words).

use dioxus::prelude::*;

use crate::components::{AdminForm, ThemeOverride};
use crate::context::{use_greeting_config, use_store_ready};

/// Admin page component.
#[component]
pub fn Admin() -> Element {
    let config = use_greeting_config();
    let store_ready = use_store_ready();

    let mut authenticated = use_signal(|| false);
    let mut password = use_signal(String::new);
    let mut login_error: Signal<Option<String>> = use_signal(|| None);

    let mut try_login = move || {
        if *password.read() == config.read().admin_password {
            authenticated.set(true);
            login_error.set(None);
        } else {
            login_error.set(Some("The password for the admin page is incorrect.".to_string()));
            password.set(String::new());
        }
    };

    if !store_ready() {
        return rsx! {
            ThemeOverride {}
            main { class: "admin",
                div { class: "card admin-login", p { class: "muted", "Loading admin settings..." } }
            }
        };
    }

    rsx! {
        ThemeOverride {}
        main { class: "admin",
            if authenticated() {
                AdminForm {}
            } else {
                div { class: "card admin-login",
                    h2 { "Admin Access" }
                    p { class: "muted", "Enter the password to manage the surprise settings." }
                    input {
                        r#type: "password",
                        class: "input",
                        placeholder: "Admin password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                try_login();
                            }
                        },
                    }
                    if let Some(err) = login_error() {
                        p { class: "form-error", "{err}" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| try_login(),
                        "Login"
                    }
                }
            }
        }
    }
}
