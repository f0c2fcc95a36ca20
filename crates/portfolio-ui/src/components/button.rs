//! Button Components
//!
//! - Primary: filled, for the main call to action
//! - Outline: bordered, for secondary actions and navigation
//! - Ghost: text only

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "btn-md",
        }
    }
}

/// Full class list for a button.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    match extra.filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("btn {} {} {}", variant.class(), size.class(), extra),
        None => format!("btn {} {}", variant.class(), size.class()),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| save(),
///         "Save to Contacts"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Anchor styled as a button, for downloads and external links.
#[component]
pub fn LinkButton(
    href: String,
    /// File name for the `download` attribute
    #[props(default)]
    download: Option<String>,
    #[props(default)] variant: ButtonVariant,
    children: Element,
) -> Element {
    let full_class = button_class(variant, ButtonSize::Medium, None);

    rsx! {
        a {
            class: "{full_class}",
            href: "{href}",
            download: download,
            {children}
        }
    }
}

/// Small outlined "Back" button with a left arrow.
#[component]
pub fn BackButton(onclick: EventHandler<()>, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            size: ButtonSize::Small,
            class: class.unwrap_or_default(),
            onclick: move |_| onclick.call(()),
            span { class: "btn-icon", "aria-hidden": "true", "\u{2190}" }
            "Back"
        }
    }
}
