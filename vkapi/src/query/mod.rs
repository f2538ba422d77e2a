mod common;
pub use self::common::{Query, ACCESS_TOKEN_KEY, LANG_KEY, VERSION_KEY};

mod params;
pub use self::params::Params;
