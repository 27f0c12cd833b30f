pub mod button;
pub mod select;

pub use button::{Button, ButtonProps};
pub use select::{Select, SelectOption, SelectProps};
