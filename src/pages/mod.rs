//! Lookbook preview pages, one per component family.

mod badges;
mod buttons;
mod cards;
mod forms;
mod home;
mod layouts;
mod modals;
mod navigation;
mod tooltips;

pub use badges::Badges;
pub use buttons::Buttons;
pub use cards::Cards;
pub use forms::Forms;
pub use home::Home;
pub use layouts::Layouts;
pub use modals::Modals;
pub use navigation::Navigation;
pub use tooltips::Tooltips;
