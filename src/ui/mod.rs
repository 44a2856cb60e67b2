pub mod components;
pub mod layout;
pub mod style;

mod view;
pub use view::draw;
