mod extract;

pub use self::extract::{JsonBody, PathParams, QueryParams};
