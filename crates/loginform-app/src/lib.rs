//! Login form core
//!
//! A username/password form bound to a pluggable view model. The crate holds
//! the interaction logic only: validation, the submission lifecycle, focus
//! changes and dismissal timing. Drawing the form is left to a [`Driver`].
//!
//! # Components
//!
//! - [`LoginViewModel`] / [`LoginPolicy`]: contract supplied by the embedding
//!   application (prompt, submit, validation rules)
//! - [`LoginForm`]: pure state machine (events in, actions out)
//! - [`Driver`]: trait for toolkit-specific input and rendering
//! - [`Runtime`]: generic orchestration loop using Driver
//! - [`DismissTimer`]: cancellable deferred dismissal

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod driver;
mod env;
mod error;
mod event;
mod form;
mod input;
mod policy;
mod runtime;
mod state;
mod timer;
mod view_model;

pub use action::FormAction;
pub use driver::Driver;
pub use env::{Environment, SystemEnv};
pub use error::{RuntimeError, SubmissionError, ValidationError};
pub use event::FormEvent;
pub use form::LoginForm;
pub use input::KeyInput;
pub use policy::LoginPolicy;
pub use runtime::{FormOutcome, Runtime};
pub use state::{Credentials, FocusTarget, FormField, Prompt, PromptIcon, SubmissionPhase};
pub use timer::DismissTimer;
pub use view_model::LoginViewModel;
pub use zeroize::Zeroizing;
