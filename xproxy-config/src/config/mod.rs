//! Configuration management: decoding, validation and loading

pub mod de;
pub mod decode;
pub mod loader;
pub mod schema;
pub mod validator;

pub use decode::{decode, ConfigFormat};
pub use loader::ConfigLoader;
pub use schema::{Config, IpConfig, NetConfig, RawConfig, RawNetwork};
pub use validator::ConfigValidator;
