pub mod config;
pub mod error;

pub mod prelude {
    pub use super::{config::Config, error::EmitError};
}
