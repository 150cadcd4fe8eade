//! Platform-free core of domops: value coercion, class-token handling, the
//! default-display cache and the show/hide/toggle rules, written against the
//! small host traits in [`host`].

pub mod cache;
pub mod channel;
pub mod classes;
pub mod constants;
pub mod error;
pub mod host;
pub mod ops;
pub mod text;

pub use cache::*;
pub use channel::*;
pub use classes::*;
pub use error::*;
pub use host::*;
pub use ops::*;
pub use text::*;
