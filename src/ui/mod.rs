//! UI layer
//!
//! Terminal components and widgets, plus the HTML renderer for hosts with
//! web-based dialogs.

pub mod components;
pub mod markup;
pub mod widgets;
