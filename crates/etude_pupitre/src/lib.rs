//! Session layer for interactive étude hosts.
//!
//! ## Name Origin
//!
//! A *pupitre* is the desk a music student works at: the score in front
//! of them, the teacher looking over their shoulder. This crate is that
//! desk for Vue components: it holds the editing [`Session`], debounces
//! keystrokes into validation runs, and talks to the execute backend
//! when the learner wants to hear the piece played.
//!
//! Diagnostics themselves come from [`etude_critique`]; this crate
//! decides *when* to ask for them and what to do with the answer.
//!
//! ## Usage
//!
//! ```
//! use std::time::Instant;
//! use etude_pupitre::{BufferSurface, Session};
//!
//! let mut session = Session::new(BufferSurface::default());
//! session.load_example("<template><p>{{ msg }}</p></template>", Instant::now());
//! let markers = session.validate_now();
//! assert!(markers.is_empty());
//! ```

pub mod client;
pub mod debounce;
pub mod feedback;
pub mod session;
pub mod surface;

pub use client::{
    ClientError, ExecuteClient, ExecuteFailure, ExecuteOutcome, ExecuteRequest, HelpLevel,
};
pub use debounce::{Debouncer, DEFAULT_WINDOW};
pub use session::Session;
pub use surface::{BufferSurface, EditorSurface};
