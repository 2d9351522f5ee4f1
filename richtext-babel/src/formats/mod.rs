//! Format implementations
//!
//! This module contains all format implementations that convert between
//! rich document nodes and text representations.

pub mod html;
pub mod icons;
pub mod json;
pub mod treeviz;

pub use html::{HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
