use std::collections::HashMap;

/// Where the sync pipeline's snapshot is served from.
pub const SNAPSHOT_URL: &str = "/assets/content.json";
pub const PAYMENT_BUTTON_SCRIPT_URL: &str = "https://checkout.razorpay.com/v1/payment-button.js";

/// Plan display name to payment button id.
const PAYMENT_BUTTON_IDS: &[(&str, &str)] = &[("Discover", "pl_RwDuOx96VYrsyN")];

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentButtons {
    by_plan: HashMap<String, String>,
}

impl PaymentButtons {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            by_plan: entries
                .into_iter()
                .map(|(plan, id)| (plan.into(), id.into()))
                .collect(),
        }
    }

    /// Exact-name lookup. `None` means the plan has no buy button.
    pub fn resolve(&self, plan_name: &str) -> Option<&str> {
        self.by_plan.get(plan_name).map(String::as_str)
    }
}

impl Default for PaymentButtons {
    fn default() -> Self {
        Self::new(PAYMENT_BUTTON_IDS.iter().copied())
    }
}

/// Read-only site settings, provided once at the app root.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub snapshot_url: String,
    pub payment_script_url: String,
    pub payment_buttons: PaymentButtons,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            snapshot_url: SNAPSHOT_URL.to_string(),
            payment_script_url: PAYMENT_BUTTON_SCRIPT_URL.to_string(),
            payment_buttons: PaymentButtons::default(),
        }
    }
}
