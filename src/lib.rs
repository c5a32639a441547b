//! Galleypress: a book publishing workflow simulation
//!
//! Galleypress follows a "pure core, imperative shell" layering. The core is
//! a strict linear state machine moving a manuscript through Review, Editing,
//! and Approval stages to a Published terminal state, with every operation
//! total: nothing in the core can fail. The console shell owns all prompts,
//! parsing, and printing.
//!
//! # Core Concepts
//!
//! - **Stage**: one pipeline phase with its own completion rule
//! - **Role**: an actor entitled to specific operations on specific stages
//! - **Coordinator**: applies stage-to-stage transitions and journals them
//! - **Registry**: owns manuscripts, allocates serials, renders reports
//!
//! # Example
//!
//! ```rust
//! use galleypress::registry::Registry;
//! use galleypress::roles::Role;
//! use galleypress::workflow::{Coordinator, Phase, Stage};
//!
//! let mut registry = Registry::new();
//! let mut coordinator = Coordinator::new();
//!
//! let serial = registry.create("Dune", "Science Fiction", "Frank");
//! let reviewer = Role::reviewer("Ada");
//! let editor = Role::editor("Max");
//!
//! let manuscript = registry.get_mut(serial).unwrap();
//! manuscript.set_stage(Stage::review(2));
//! reviewer.act(manuscript);
//! reviewer.act(manuscript);
//! coordinator.advance(manuscript);
//!
//! editor.act(manuscript);
//! coordinator.advance(manuscript);
//! editor.act(manuscript);
//! coordinator.advance(manuscript);
//!
//! assert_eq!(manuscript.phase(), Phase::Published);
//! ```

pub mod console;
pub mod manuscript;
pub mod registry;
pub mod roles;
pub mod workflow;

// Re-export commonly used types
pub use manuscript::{Manuscript, SerialAllocator, SerialNumber, Status};
pub use registry::Registry;
pub use roles::{ActionOutcome, Role, RoleKind};
pub use workflow::{AdvanceOutcome, Coordinator, Phase, Stage, StageKind};
