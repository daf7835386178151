use dioxus::prelude::*;

use crate::components::NavLink;
use crate::core::nav::NavTarget;
use crate::t;

use super::form::LoginForm;

const PORTAL_LOGO: Asset = asset!("/assets/portal-logo.svg");

#[component]
pub fn LoginView() -> Element {
    let mut form = use_signal(LoginForm::default);

    let snapshot = form.read().clone();
    let toggle_label = if snapshot.shows_password() {
        t!("login-hide-password")
    } else {
        t!("login-show-password")
    };

    rsx! {
        div { class: "login",
            div { class: "login__brand",
                img { class: "login__logo", src: PORTAL_LOGO, alt: "Portal" }
                h1 { class: "login__title", "RickMorty Chat" }
                p { class: "login__subtitle", {t!("login-subtitle")} }
            }

            section { class: "card login__card",
                div { class: "card__header",
                    h2 { {t!("login-title")} }
                    p { class: "card__description", {t!("login-description")} }
                }

                form {
                    class: "login__form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        form.read().submit();
                    },

                    div { class: "login__field",
                        label { r#for: "email", {t!("login-email")} }
                        input {
                            id: "email",
                            class: "input",
                            r#type: "email",
                            placeholder: "morty@citadel.com",
                            required: true,
                            value: "{snapshot.email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }

                    div { class: "login__field",
                        label { r#for: "password", {t!("login-password")} }
                        div { class: "login__password",
                            input {
                                id: "password",
                                class: "input",
                                r#type: snapshot.password_input_type(),
                                placeholder: t!("login-password-placeholder"),
                                required: true,
                                value: "{snapshot.password}",
                                oninput: move |evt| form.write().password = evt.value(),
                            }
                            button {
                                r#type: "button",
                                class: "button button--ghost login__reveal",
                                aria_label: "{toggle_label}",
                                onclick: move |_| form.write().toggle_password_visibility(),
                                if snapshot.shows_password() { "🙈" } else { "👁" }
                            }
                        }
                    }

                    div { class: "login__links",
                        NavLink { to: NavTarget::ForgotPassword, class: "link link--green",
                            {t!("login-forgot")}
                        }
                    }

                    button { r#type: "submit", class: "button button--primary button--block",
                        {t!("login-submit")}
                    }
                }

                div { class: "separator separator--labelled",
                    span { {t!("login-divider")} }
                }

                button { r#type: "button", class: "button button--outline button--block",
                    "G  "
                    {t!("login-google")}
                }

                p { class: "login__signup",
                    span { class: "muted", {t!("login-no-account")} }
                    " "
                    NavLink { to: NavTarget::Register, class: "link link--purple",
                        {t!("login-signup")}
                    }
                }
            }

            p { class: "login__legal",
                {t!("login-legal-prefix")}
                " "
                NavLink { to: NavTarget::Terms, class: "link link--green", {t!("login-terms")} }
                " "
                {t!("login-legal-and")}
                " "
                NavLink { to: NavTarget::Privacy, class: "link link--green", {t!("login-privacy")} }
            }
        }
    }
}
