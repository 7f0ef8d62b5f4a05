//! Collapsible section used for the conservation tips.

use crate::style;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DropDownProps {
    /// Section title
    pub display: String,
    pub children: Element,
}

/// A titled section whose body is shown only while open. Starts closed.
#[component]
pub fn DropDown(props: DropDownProps) -> Element {
    let mut open = use_signal(|| false);
    let marker = if open() { "+" } else { "-" };

    rsx! {
        div {
            style: format!("position: relative; padding: 0 0.5rem; margin-top: 0.5rem; {}", style::BOX),
            button {
                style: "font-size: 1.25rem; background: none; border: none; color: inherit;",
                onclick: move |_| open.toggle(),
                "{marker} {props.display}"
            }
            if open() {
                div {
                    style: "margin-left: 1.25rem;",
                    {props.children}
                }
            }
        }
    }
}
