mod display_component;

pub use display_component::DisplayComponent;
