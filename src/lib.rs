pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod frame;
pub mod launch;
pub mod profiles;
pub mod theme;
pub mod view;

pub mod components {
    pub mod input;
    pub mod select;

    pub use input::Input;
    pub use select::Select;
}

pub mod screens {
    pub mod confirm;
    pub mod editor;
    pub mod menu;
    pub mod picker;
}

pub use app::App;
pub use error::{Error, Result};
