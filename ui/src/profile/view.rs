use dioxus::prelude::*;

use crate::t;

use super::editor::ProfileEditor;
use super::record::ProfileField;

#[component]
pub fn ProfileView() -> Element {
    let mut editor = use_signal(ProfileEditor::default);

    let snapshot = editor.read().clone();
    let profile = snapshot.profile();
    let editing = snapshot.is_editing();

    let stats = [
        ("💬", t!("profile-stat-messages"), profile.messages_sent_label()),
        ("🌌", t!("profile-stat-dimension"), profile.dimension.clone()),
        ("👨‍🔬", t!("profile-stat-character"), profile.favorite_character.clone()),
        ("⏰", t!("profile-stat-active"), profile.active_hours.clone()),
    ];

    let fields = [
        (ProfileField::Username, t!("profile-field-username"), None),
        (ProfileField::Email, t!("profile-field-email"), None),
        (
            ProfileField::Bio,
            t!("profile-field-bio"),
            Some(t!("profile-placeholder-bio")),
        ),
        (
            ProfileField::Dimension,
            t!("profile-field-dimension"),
            Some(t!("profile-placeholder-dimension")),
        ),
        (
            ProfileField::FavoriteCharacter,
            t!("profile-field-character"),
            Some(t!("profile-placeholder-character")),
        ),
    ];

    let details_hint = if editing {
        t!("profile-details-editing")
    } else {
        t!("profile-details-viewing")
    };
    let joined = t!("profile-joined", date = profile.joined_label());
    let dimension_line = t!("profile-dimension-line", dimension = profile.dimension.clone());

    rsx! {
        article { class: "profile",
            header { class: "card profile__header",
                div { class: "profile__avatar",
                    span { class: "profile__avatar-initial", "{profile.avatar_initial()}" }
                    button {
                        r#type: "button",
                        class: "button button--ghost profile__camera",
                        title: t!("profile-change-photo"),
                        "📷"
                    }
                }

                div { class: "profile__summary",
                    div { class: "profile__name-row",
                        h1 { class: "profile__name", "{profile.username}" }
                        span { class: "badge badge--green", {t!("profile-badge-active")} }
                    }
                    p { class: "profile__bio", "{profile.bio}" }
                    ul { class: "profile__facts",
                        li { "✉ {profile.email}" }
                        li { "📅 {joined}" }
                        li { "📍 {dimension_line}" }
                    }
                }

                button {
                    r#type: "button",
                    class: "button button--accent profile__toggle",
                    onclick: move |_| {
                        editor.with_mut(|e| e.toggle());
                    },
                    if editing {
                        {t!("profile-save")}
                    } else {
                        {t!("profile-edit")}
                    }
                }
            }

            div { class: "profile__grid",
                section { class: "card profile__stats",
                    h2 { {t!("profile-stats-title")} }
                    p { class: "card__description", {t!("profile-stats-subtitle")} }
                    ul { class: "profile__stat-list",
                        for (icon, label, value) in stats {
                            li { class: "profile__stat",
                                span { class: "profile__stat-icon", "{icon}" }
                                span { class: "profile__stat-label", "{label}" }
                                span { class: "profile__stat-value", "{value}" }
                            }
                        }
                    }
                }

                section { class: "card profile__details",
                    h2 { {t!("profile-details-title")} }
                    p { class: "card__description", "{details_hint}" }
                    for (field, label, placeholder) in fields {
                        {field_row(editor, field, label, placeholder, editing)}
                    }
                }
            }
        }
    }
}

fn field_row(
    mut editor: Signal<ProfileEditor>,
    field: ProfileField,
    label: String,
    placeholder: Option<String>,
    editing: bool,
) -> Element {
    let value = editor.read().profile().get(field).to_string();
    let placeholder = placeholder.unwrap_or_default();
    let input_type = if field == ProfileField::Email {
        "email"
    } else {
        "text"
    };

    rsx! {
        div { class: "profile__field",
            label { class: "profile__label", r#for: field.input_id(), "{label}" }
            if !editing {
                p { class: "profile__value", "{value}" }
            } else if field.is_multiline() {
                textarea {
                    id: field.input_id(),
                    class: "input input--multiline",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| {
                        editor.with_mut(|e| e.update(field, evt.value()));
                    },
                }
            } else {
                input {
                    id: field.input_id(),
                    class: "input",
                    r#type: input_type,
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| {
                        editor.with_mut(|e| e.update(field, evt.value()));
                    },
                }
            }
        }
    }
}
