//! Output formatting for the HTML page and the terminal

pub mod console;
pub mod html;
