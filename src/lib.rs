//! Core library for the vehicle-catalog-tools command line application.
//!
//! The library exposes the conversion pipeline that powers the command-line
//! interface as well as the tests. The modules are structured to keep
//! responsibilities narrow and composable: the fixed category table lives in
//! [`catalog`], price normalisation in [`price`], the shared row collector in
//! [`extract`], IO adapters under [`io`], the output document shapes in
//! [`model`], and the end-to-end orchestration in [`convert`].

pub mod catalog;
pub mod convert;
pub mod error;
pub mod extract;
pub mod io;
pub mod model;
pub mod price;

pub use error::{Result, ToolError};
