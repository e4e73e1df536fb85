//! Root-confined filesystem access and safe entry-name generation for a site tree.

pub mod config;
pub mod errors;
pub mod logging;
pub mod ops;
pub mod paths;
pub mod sanitize;
pub mod split;


pub use config::Config;
pub use errors::{FsError, FsResult};
pub use ops::{Missing, Outcome, SiteFs};
pub use paths::{join, normalize, RootGuard, SitePath};
pub use sanitize::{CharacterPolicy, Sanitizer};
pub use split::split;
