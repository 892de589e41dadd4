//! # Reflection Core
//!
//! The core of Kalaido: local persistence for user reflections and story
//! progress, plus the navigation state machine that sequences the app's
//! screens. Screen controllers own an instance of each and call in
//! response to user gestures; nothing here runs on a timer or a
//! background task.
//!
//! ## Core Components
//!
//! - **journal**: `ReflectionManager` and its storage backends - durable,
//!   process-local CRUD over reflections and the completed-story set
//! - **navigation**: `Route` and `NavigationCoordinator` - the ordered
//!   stack of logical screens above the implicit welcome root
//! - **preferences**: the display-preferences object threaded into the
//!   rendering layer
//!
//! ## Design Philosophy
//!
//! - **Single writer**: one controller owns each component; no locks, no async
//! - **Read-your-writes**: every mutating operation persists before returning
//! - **Availability over strictness**: storage failures are logged and
//!   absorbed, never surfaced to screens

pub mod journal;
pub mod navigation;
pub mod preferences;

pub use journal::*;
pub use navigation::*;
pub use preferences::*;
