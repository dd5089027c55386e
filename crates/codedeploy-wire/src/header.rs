//! Header names and values

/// Operation-routing header
pub const X_AMZ_TARGET: &str = "x-amz-target";

pub const CONTENT_TYPE: &str = "content-type";

/// Content type of the JSON 1.1 protocol
pub const AMZ_JSON_1_1: &str = "application/x-amz-json-1.1";
