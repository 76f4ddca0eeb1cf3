pub mod platform;
pub mod templates;
pub mod traits;
pub mod types;

pub use platform::Platform;
pub use traits::SearchPlatform;
pub use types::{LocationSlug, QueryContext};
