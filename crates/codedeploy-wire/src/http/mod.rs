mod ordered_headers;
pub use self::ordered_headers::OrderedHeaders;
