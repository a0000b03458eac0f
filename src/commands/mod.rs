pub mod browse;
pub mod config;
pub mod list;
pub mod show;
pub mod types;

pub use browse::*;
pub use config::*;
pub use list::*;
pub use show::*;
pub use types::*;
