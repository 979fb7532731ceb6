//! UI Components
//!
//! Leptos components for the shelter page.

mod animal_card;
mod animal_form;
mod animal_list;
mod dark_mode_toggle;

pub use animal_card::AnimalCard;
pub use animal_form::AnimalForm;
pub use animal_list::AnimalList;
pub use dark_mode_toggle::DarkModeToggle;
