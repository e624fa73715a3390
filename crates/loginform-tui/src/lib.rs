//! Terminal front end for the login form
//!
//! A thin shell over [`loginform_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`loginform_app::Runtime`].
//!
//! This crate only handles terminal input and rendering, plus a demo view
//! model that checks credentials against a configured pair.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod demo;
pub mod terminal;
pub mod ui;

pub use demo::{DemoConfig, DemoViewModel};
pub use loginform_app::{FormOutcome, LoginForm, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
