use dioxus::prelude::*;
use shared_types::{FieldChange, FieldRules, FieldState, StyleMap, TextDirection};

/// Width reserved inside the text control for the icon slot.
const ICON_GUTTER: &str = "2.5em";

/// Configuration of a [`ValidatedInput`]. Every option has a default.
///
/// Style maps are applied verbatim: `custom_styles` to the wrapper,
/// `input_styles` to the icon + control row, `icon_styles` to the icon slot.
#[derive(Props, Clone, PartialEq)]
pub struct ValidatedInputProps {
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: String,
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub min_length: Option<usize>,
    #[props(default)]
    pub max_length: Option<usize>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub icon: Option<Element>,
    #[props(default)]
    pub success_message: Option<String>,
    #[props(default)]
    pub error_message: Option<String>,
    /// Called with the raw value and its validity after each edit.
    #[props(default)]
    pub on_change: Option<EventHandler<FieldChange>>,
    #[props(default)]
    pub custom_styles: StyleMap,
    #[props(default)]
    pub input_styles: StyleMap,
    #[props(default)]
    pub icon_styles: StyleMap,
    #[props(default = false)]
    pub rtl: bool,
    #[props(default)]
    pub helper_text: Option<String>,
    #[props(default)]
    pub tooltip_text: Option<String>,
    #[props(default)]
    pub additional_info: Option<String>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

impl Default for ValidatedInputProps {
    fn default() -> Self {
        Self {
            label: None,
            placeholder: String::new(),
            input_type: "text".to_string(),
            required: false,
            min_length: None,
            max_length: None,
            disabled: false,
            icon: None,
            success_message: None,
            error_message: None,
            on_change: None,
            custom_styles: StyleMap::default(),
            input_styles: StyleMap::default(),
            icon_styles: StyleMap::default(),
            rtl: false,
            helper_text: None,
            tooltip_text: None,
            additional_info: None,
            attributes: Vec::new(),
        }
    }
}

/// Apply one edit from the text control.
///
/// A disabled field ignores the edit and leaves `field` untouched. Otherwise
/// the value is stored and revalidated, and `on_change` (when present)
/// receives the resulting change.
pub fn handle_edit<F>(
    field: &mut FieldState,
    rules: &FieldRules,
    disabled: bool,
    raw: String,
    on_change: Option<F>,
) -> Option<FieldChange>
where
    F: FnOnce(FieldChange),
{
    if disabled {
        tracing::debug!("edit ignored on disabled field");
        return None;
    }
    let change = field.apply_edit(rules, raw);
    tracing::trace!(
        chars = change.value.chars().count(),
        valid = change.is_valid,
        "field edited"
    );
    if let Some(notify) = on_change {
        notify(change.clone());
    }
    Some(change)
}

/// A text input that validates every edit against required/min/max length
/// rules and shows its validation state.
///
/// Messages stay hidden until the first edit.
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let state = use_signal(FieldState::default);

    rsx! {
        FieldView { state, options: props }
    }
}

/// Renders `state` with the given options and routes control events back
/// into it.
#[component]
pub fn FieldView(state: Signal<FieldState>, options: ValidatedInputProps) -> Element {
    let mut state = state;
    let ValidatedInputProps {
        label,
        placeholder,
        input_type,
        required,
        min_length,
        max_length,
        disabled,
        icon,
        success_message,
        error_message,
        on_change,
        custom_styles,
        input_styles,
        icon_styles,
        rtl,
        helper_text,
        tooltip_text,
        additional_info,
        attributes,
    } = options;

    let rules = FieldRules {
        required,
        min_length,
        max_length,
    };
    let direction = TextDirection::from_rtl(rtl);
    let field = state.read().clone();

    let align_style = format!("text-align: {};", direction.text_align());
    let row_style = input_styles
        .merged(&StyleMap::new().with("flex-direction", direction.flex_direction()))
        .to_inline();
    let mut control_style = StyleMap::new().with("text-align", direction.text_align());
    if icon.is_some() {
        control_style.insert(direction.icon_padding_property(), ICON_GUTTER);
    }
    let control_style = control_style.to_inline();
    let icon_style = icon_styles.to_inline();

    let mut wrapper_class = String::from("validated-input");
    if disabled {
        wrapper_class.push_str(" is-disabled");
    }
    let row_class = std::iter::once("validated-input-row")
        .chain(field.visual_classes(disabled))
        .collect::<Vec<_>>()
        .join(" ");
    let label_class = if field.label_floated() {
        "validated-input-label is-floated"
    } else {
        "validated-input-label"
    };

    let base = vec![
        Attribute::new("class", wrapper_class, None, false),
        Attribute::new("dir", direction.as_str(), None, false),
        Attribute::new("style", custom_styles.to_inline(), None, false),
        Attribute::new("data-state", field.visual(disabled).as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let placeholder_text = field.placeholder_text(&placeholder).to_string();
    let error_text = error_message.unwrap_or_default();
    let show_success = field.show_success(success_message.is_some());
    let success_text = success_message.unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if let Some(text) = label {
                label { class: label_class, style: "{align_style}", "{text}" }
            }
            div { class: row_class, style: "{row_style}",
                if let Some(icon) = icon {
                    span { class: "validated-input-icon", style: "{icon_style}", {icon} }
                }
                input {
                    class: "validated-input-control",
                    r#type: "{input_type}",
                    value: "{field.value}",
                    placeholder: "{placeholder_text}",
                    disabled: disabled,
                    style: "{control_style}",
                    aria_invalid: if field.is_valid { "false" } else { "true" },
                    aria_required: if required { "true" } else { "false" },
                    aria_disabled: if disabled { "true" } else { "false" },
                    oninput: move |evt: FormEvent| {
                        let notify = on_change
                            .map(|handler| move |change: FieldChange| handler.call(change));
                        handle_edit(&mut state.write(), &rules, disabled, evt.value(), notify);
                    },
                    onfocus: move |_| {
                        if !disabled {
                            state.write().focus();
                        }
                    },
                    onblur: move |_| state.write().blur(),
                }
            }
            if field.show_error() {
                span {
                    class: "validated-input-message is-error",
                    role: "alert",
                    style: "{align_style}",
                    "{error_text}"
                }
            }
            if show_success {
                span {
                    class: "validated-input-message is-success",
                    style: "{align_style}",
                    "{success_text}"
                }
            }
            if let Some(text) = helper_text {
                span { class: "validated-input-message is-helper", style: "{align_style}", "{text}" }
            }
            if let Some(text) = tooltip_text {
                div { class: "validated-input-tooltip-anchor",
                    span { class: "validated-input-tooltip", role: "tooltip", "{text}" }
                }
            }
            if let Some(text) = additional_info {
                span { class: "validated-input-message is-info", style: "{align_style}", "{text}" }
            }
        }
    }
}
