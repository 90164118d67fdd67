pub mod config;
pub mod error;
pub mod form;
pub mod i18n;
pub mod keyboard;
pub mod menu;
pub mod nav;
pub mod notify;
pub mod particles;
pub mod prefs;
pub mod reveal;

pub use config::*;
pub use error::*;
pub use form::*;
pub use i18n::*;
pub use keyboard::*;
pub use menu::*;
pub use nav::*;
pub use notify::*;
pub use particles::*;
pub use prefs::*;
pub use reveal::*;
