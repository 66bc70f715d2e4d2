#![deny(warnings)]
pub mod layout;
pub mod model;
pub mod render;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "solitario"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
