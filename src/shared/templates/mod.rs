//! HTML page rendering with minijinja.

mod engine;

pub use engine::render_page;
