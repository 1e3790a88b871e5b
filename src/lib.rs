//! Customer churn prediction: a single-page form served over HTTP, feeding
//! a pre-trained classifier and rendering the prediction with a risk tier.

pub mod artifacts;
pub mod encode;
pub mod form;
pub mod predict;
pub mod render;
pub mod server;
pub mod types;

#[cfg(test)]
mod tests;
