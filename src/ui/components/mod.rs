//! Reusable UI components

mod button;
mod dialog;
mod field;

pub use button::{button_width, render_button, BUTTON_HEIGHT};
pub use dialog::render_notice_dialog;
pub use field::draw_field;
