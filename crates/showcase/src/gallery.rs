use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdEye, LdEyeOff, LdLock, LdSearch, LdShield, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{ShowcaseConfig, StyleMap};
use shared_ui::ValidatedInput;

use crate::demo_values::{log_only, record_into, use_demo_values};

/// Icon size used by every demo field.
const ICON_SIZE: u32 = 16;

/// Wrapper style shared by most demo fields.
fn card_width() -> StyleMap {
    StyleMap::new()
        .with("margin-bottom", "20px")
        .with("width", "300px")
}

/// Every configuration the field supports, one numbered section each.
#[component]
pub fn Gallery(config: ShowcaseConfig) -> Element {
    let values = use_demo_values();
    let mut show_password = values.show_password;
    let log = config.log_changes;
    let rtl = config.force_rtl;

    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        div { class: "gallery",
            h2 { "{config.title}" }

            section {
                h3 { "1. Default State" }
                ValidatedInput {
                    label: "Username",
                    placeholder: "Enter your username",
                    required: true,
                    min_length: 3,
                    max_length: 20,
                    rtl,
                    icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                    error_message: "Username is required and must be between 3 and 20 characters.",
                    success_message: "Username looks good!",
                    custom_styles: card_width(),
                    on_change: record_into(values.username, "username", log),
                }
            }

            section {
                h3 { "2. Focused State" }
                ValidatedInput {
                    label: "Email",
                    placeholder: "Enter your email",
                    required: true,
                    input_type: "email",
                    rtl,
                    icon: rsx! { Icon::<LdCheck> { icon: LdCheck, width: ICON_SIZE, height: ICON_SIZE } },
                    error_message: "Invalid email address.",
                    success_message: "Email is valid!",
                    custom_styles: card_width(),
                    on_change: record_into(values.email, "email", log),
                }
            }

            section {
                h3 { "3. Disabled State" }
                ValidatedInput {
                    label: "Disabled Input",
                    placeholder: "This input is disabled",
                    disabled: true,
                    rtl,
                    custom_styles: card_width(),
                }
            }

            section {
                h3 { "4. Error State" }
                ValidatedInput {
                    label: "Password",
                    placeholder: "Enter your password",
                    required: true,
                    min_length: 6,
                    input_type: "password",
                    rtl,
                    icon: rsx! { Icon::<LdShield> { icon: LdShield, width: ICON_SIZE, height: ICON_SIZE } },
                    error_message: "Password must be at least 6 characters.",
                    custom_styles: card_width(),
                    on_change: record_into(values.password, "password", log),
                }
            }

            section {
                h3 { "5. Success State" }
                ValidatedInput {
                    label: "Confirm Password",
                    placeholder: "Confirm your password",
                    required: true,
                    min_length: 6,
                    input_type: "password",
                    rtl,
                    icon: rsx! { Icon::<LdCheck> { icon: LdCheck, width: ICON_SIZE, height: ICON_SIZE } },
                    success_message: "Passwords match!",
                    custom_styles: card_width(),
                    on_change: record_into(values.confirm_password, "confirm_password", log),
                }
            }

            section {
                h3 { "6. Placeholder Only" }
                ValidatedInput {
                    placeholder: "Search here",
                    rtl,
                    icon: rsx! { Icon::<LdSearch> { icon: LdSearch, width: ICON_SIZE, height: ICON_SIZE } },
                    custom_styles: card_width(),
                    on_change: record_into(values.search_query, "search_query", log),
                }
            }

            section {
                h3 { "7. RTL Support" }
                ValidatedInput {
                    label: "نام کاربری",
                    placeholder: "نام کاربری خود را وارد کنید",
                    required: true,
                    min_length: 3,
                    max_length: 20,
                    rtl: true,
                    icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                    error_message: "نام کاربری الزامی است و باید بین ۳ تا ۲۰ کاراکتر باشد.",
                    success_message: "نام کاربری درست است!",
                    custom_styles: card_width(),
                    input_styles: StyleMap::new().with("padding", "10px").with("font-size", "16px"),
                    icon_styles: StyleMap::new().with("color", "#555"),
                    on_change: log_only("rtl_username", log),
                }
            }

            section {
                h3 { "8. Custom Styles" }
                ValidatedInput {
                    label: "Custom Styled Input",
                    placeholder: "Custom padding and font size",
                    required: true,
                    rtl,
                    icon: rsx! { Icon::<LdLock> { icon: LdLock, width: ICON_SIZE, height: ICON_SIZE } },
                    custom_styles: card_width().with("background-color", "#f9f9f9"),
                    input_styles: StyleMap::new().with("padding", "15px").with("font-size", "18px"),
                    icon_styles: StyleMap::new().with("color", "#333"),
                    on_change: log_only("custom_styled", log),
                }
            }

            section {
                h3 { "9. Icon Only" }
                ValidatedInput {
                    placeholder: "Enter search term",
                    rtl,
                    icon: rsx! { Icon::<LdSearch> { icon: LdSearch, width: ICON_SIZE, height: ICON_SIZE } },
                    custom_styles: card_width(),
                    input_styles: StyleMap::new().with("padding", "10px").with("font-size", "16px"),
                }
            }

            section {
                h3 { "10. No Label" }
                ValidatedInput {
                    placeholder: "No label provided",
                    rtl,
                    icon: rsx! { Icon::<LdSearch> { icon: LdSearch, width: ICON_SIZE, height: ICON_SIZE } },
                    custom_styles: card_width(),
                }
            }

            section {
                h3 { "11. Large Font Size" }
                ValidatedInput {
                    label: "Large Font",
                    placeholder: "Large font size input",
                    rtl,
                    icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                    custom_styles: card_width(),
                    input_styles: StyleMap::new().with("font-size", "24px"),
                }
            }

            section {
                h3 { "12. Small Font Size" }
                ValidatedInput {
                    label: "Small Font",
                    placeholder: "Small font size input",
                    rtl,
                    icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                    custom_styles: card_width(),
                    input_styles: StyleMap::new().with("font-size", "12px"),
                }
            }

            section {
                h3 { "13. Password Visibility Toggle" }
                ValidatedInput {
                    label: "Password",
                    placeholder: "Enter your password",
                    required: true,
                    input_type: password_type,
                    rtl,
                    icon: rsx! {
                        span {
                            class: "password-toggle",
                            style: "cursor: pointer;",
                            onclick: move |_| show_password.toggle(),
                            if show_password() {
                                Icon::<LdEyeOff> { icon: LdEyeOff, width: ICON_SIZE, height: ICON_SIZE }
                            } else {
                                Icon::<LdEye> { icon: LdEye, width: ICON_SIZE, height: ICON_SIZE }
                            }
                        }
                    },
                    error_message: "Password must be at least 6 characters.",
                    custom_styles: card_width(),
                    on_change: record_into(values.password, "password", log),
                }
            }

            section {
                h3 { "14. Input with Helper Text" }
                ValidatedInput {
                    label: "Username",
                    placeholder: "Enter your username",
                    helper_text: "This will be used as your login identifier.",
                    required: true,
                    min_length: 3,
                    max_length: 20,
                    rtl,
                    icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                    custom_styles: card_width(),
                    on_change: record_into(values.username, "username", log),
                }
            }

            section {
                h3 { "15. Animated Label" }
                ValidatedInput {
                    label: "Animated Label",
                    placeholder: "Label animates when focused",
                    required: true,
                    min_length: 3,
                    max_length: 20,
                    rtl,
                    icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                    custom_styles: card_width(),
                    input_styles: StyleMap::new().with("font-size", "16px").with("transition", "all 0.3s ease"),
                    on_change: record_into(values.username, "username", log),
                }
            }

            section {
                h3 { "16. Input with Additional Info" }
                ValidatedInput {
                    label: "Username",
                    placeholder: "Enter your username",
                    required: true,
                    min_length: 3,
                    max_length: 20,
                    rtl,
                    icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                    additional_info: "Make sure your username is unique.",
                    custom_styles: card_width(),
                    on_change: record_into(values.username, "username", log),
                }
            }

            section {
                h3 { "17. Input with Custom Padding" }
                ValidatedInput {
                    label: "Padded Input",
                    placeholder: "Input with extra padding",
                    required: true,
                    min_length: 3,
                    max_length: 20,
                    rtl,
                    icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                    custom_styles: card_width(),
                    input_styles: StyleMap::new().with("padding", "20px").with("font-size", "16px"),
                    on_change: record_into(values.username, "username", log),
                }
            }

            section {
                h3 { "18. Input with Tooltip" }
                ValidatedInput {
                    label: "Tooltip Example",
                    placeholder: "Hover for tooltip",
                    required: true,
                    min_length: 3,
                    max_length: 20,
                    rtl,
                    icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                    tooltip_text: "Enter your username here. It should be unique.",
                    custom_styles: card_width(),
                    on_change: record_into(values.username, "username", log),
                }
            }

            section {
                h3 { "19. Multiple Inputs Together" }
                div { style: "display: flex; gap: 10px;",
                    ValidatedInput {
                        label: "First Name",
                        placeholder: "Enter your first name",
                        required: true,
                        rtl,
                        icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                        custom_styles: StyleMap::new().with("width", "200px"),
                        on_change: record_into(values.username, "username", log),
                    }
                    ValidatedInput {
                        label: "Last Name",
                        placeholder: "Enter your last name",
                        required: true,
                        rtl,
                        icon: rsx! { Icon::<LdUser> { icon: LdUser, width: ICON_SIZE, height: ICON_SIZE } },
                        custom_styles: StyleMap::new().with("width", "200px"),
                        on_change: record_into(values.username, "username", log),
                    }
                }
            }

            LatestValues {}
        }
    }
}

/// Read-only summary of the values recorded by the demo fields.
///
/// Password fields show only their length.
#[component]
fn LatestValues() -> Element {
    let values = use_demo_values();
    let rows = [
        ("Username", values.username.read().clone()),
        ("Email", values.email.read().clone()),
        ("Password length", values.password.read().chars().count().to_string()),
        (
            "Confirm password length",
            values.confirm_password.read().chars().count().to_string(),
        ),
        ("Search query", values.search_query.read().clone()),
    ];

    rsx! {
        section { class: "latest-values",
            h3 { "Latest values" }
            dl {
                for (name, value) in rows {
                    dt { "{name}" }
                    dd { "{value}" }
                }
            }
        }
    }
}
