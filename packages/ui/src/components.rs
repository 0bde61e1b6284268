//! Small form controls shared by the views: button, input, textarea, label.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Destructive => "btn btn-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{r#type}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = 3)] rows: i64,
    #[props(default = "".to_string())] value: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "textarea {class}",
            placeholder: "{placeholder}",
            rows,
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(
    #[props(default = "".to_string())] html_for: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}
