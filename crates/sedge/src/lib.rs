pub mod collections;
pub mod config;
pub mod dates;
pub mod error;
pub mod excerpt;
pub mod filters;
pub mod taxonomy;
pub mod types;
pub mod urls;

pub use collections::*;
pub use config::*;
pub use dates::*;
pub use error::*;
pub use excerpt::*;
pub use filters::*;
pub use taxonomy::*;
pub use types::*;
pub use urls::*;
