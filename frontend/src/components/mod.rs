pub mod payment_button;
pub mod pricing;
pub mod progress_bar;
pub mod stats;
pub mod testimonials;
