//! CodeDeploy request construction
//!
//! `codedeploy-wire` turns an operation and a set of snake_case parameters into
//! a request for the AWS CodeDeploy JSON 1.1 protocol: camelCase body keys, an
//! `X-Amz-Target` routing header and a fixed content type.
//!
//! # Architecture
//!
//! ```text
//! RawOptions (pairs / pair / map)
//!   -> RawOptions::normalize          canonical ParamMap
//!   -> transform                      keys rendered under a CasingPolicy,
//!                                     exceptions from a CaseRuleTable
//!   -> build_headers                  x-amz-target, content-type
//! Request { POST, headers, "/", data, service }
//! ```
//!
//! Signing, sending and response parsing belong to the transport layer and are
//! not part of this crate.
//!
//! # Example
//!
//! ```
//! use codedeploy_wire::{param_map, tags_param, Operation, RequestFactory, Tag};
//! use serde_json::json;
//!
//! let factory = RequestFactory::default();
//! let req = factory
//!     .request(
//!         Operation::AddTagsToOnPremisesInstances,
//!         param_map! {
//!             "instance_names" => vec!["host-1"],
//!             "tags" => tags_param([Tag::new("env", "prod")]),
//!         },
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     req.data,
//!     json!({"instanceNames": ["host-1"], "tags": [{"Key": "env", "Value": "prod"}]})
//! );
//! assert_eq!(
//!     req.headers.get_unique("x-amz-target"),
//!     Some("CodeDeploy_20141006.AddTagsToOnPremisesInstances")
//! );
//! ```

#![allow(
    clippy::bool_assert_comparison,  // I don't like `assert!(!expression)`. It's very misleading.
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::doc_markdown,            // CodeDeploy, camelCase, PascalCase
)]

mod error;
mod http;
mod request;
mod transform;

pub mod case;
pub mod config;
pub mod header;
pub mod key;
pub mod operation;
pub mod options;
pub mod param;
pub mod rules;
pub mod tags;

pub use self::error::*;
pub use self::http::OrderedHeaders;

pub use self::case::{CasingPolicy, render, tokenize};
pub use self::config::WireConfig;
pub use self::key::RawKey;
pub use self::operation::Operation;
pub use self::options::{RawOptions, build_paging};
pub use self::param::{Param, ParamMap};
pub use self::request::{Request, RequestFactory, build_headers, build_request};
pub use self::rules::{CaseRuleTable, CaseRuleTableBuilder};
pub use self::tags::{Tag, normalize_tags, tags_param, try_normalize_tags};
pub use self::transform::{check_wire_keys, transform, transform_map};
