use std::rc::Rc;

use log::error;
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{SiteConfig, PAYMENT_BUTTON_SCRIPT_URL};

#[derive(Properties, PartialEq)]
pub struct PaymentButtonProps {
    pub payment_button_id: String,
}

/// The `<script>` a payment-button container needs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScriptEmbed<'a> {
    src: &'a str,
    payment_button_id: &'a str,
}

impl<'a> ScriptEmbed<'a> {
    /// `None` when the container already holds a script or there is no
    /// button id to embed.
    fn plan(has_script: bool, payment_button_id: &'a str, src: &'a str) -> Option<Self> {
        if has_script || payment_button_id.trim().is_empty() {
            return None;
        }
        Some(Self {
            src,
            payment_button_id,
        })
    }

    fn attributes(&self) -> [(&'static str, &'a str); 3] {
        [
            ("src", self.src),
            ("async", ""),
            ("data-payment_button_id", self.payment_button_id),
        ]
    }
}

/// Appends the vendor's payment-button script to `container` unless one is
/// already there.
fn embed_script(container: &Element, payment_button_id: &str, src: &str) -> Result<(), JsValue> {
    let has_script = container.query_selector("script")?.is_some();
    let Some(embed) = ScriptEmbed::plan(has_script, payment_button_id, src) else {
        return Ok(());
    };
    let document = container
        .owner_document()
        .ok_or_else(|| JsValue::from_str("payment button container has no document"))?;
    let script = document.create_element("script")?;
    for (name, value) in embed.attributes() {
        script.set_attribute(name, value)?;
    }
    container.append_child(&script)?;
    Ok(())
}

#[function_component(PaymentButton)]
pub fn payment_button(props: &PaymentButtonProps) -> Html {
    let container = use_node_ref();
    let script_url = use_context::<Rc<SiteConfig>>()
        .map(|config| config.payment_script_url.clone())
        .unwrap_or_else(|| PAYMENT_BUTTON_SCRIPT_URL.to_string());

    {
        let container = container.clone();
        use_effect_with_deps(
            move |(payment_button_id, script_url): &(String, String)| {
                let form = container.cast::<Element>();
                if let Some(form) = &form {
                    if let Err(e) = embed_script(form, payment_button_id, script_url) {
                        error!("Failed to embed payment button {}: {:?}", payment_button_id, e);
                    }
                }
                move || {
                    if let Some(form) = form {
                        form.set_inner_html("");
                    }
                }
            },
            (props.payment_button_id.clone(), script_url),
        );
    }

    html! {
        <form ref={container} class="payment-button"></form>
    }
}
