//! # bridge_core - IRC 5:2015 Cross-Section Engine
//!
//! `bridge_core` checks a bridge cross-section against the geometric clauses
//! of IRC 5:2015 and produces the dimensioned geometry and self-weight of
//! the selected crash barrier or median. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Verdicts, not exceptions**: A failing clause is a [`clauses::ClauseResult`], not an error
//! - **Rich Errors**: Structured error types for invalid input
//!
//! ## Quick Start
//!
//! ```rust
//! use bridge_core::input::DesignInput;
//! use bridge_core::session::DesignSession;
//!
//! let session = DesignSession::evaluate(&DesignInput::sample()).unwrap();
//!
//! for clause in session.non_compliant() {
//!     println!("{}: {}", clause.clause, clause.remark);
//! }
//!
//! let json = serde_json::to_string_pretty(&session.record).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`session`] - Design session: metadata, record, layout and verdicts
//! - [`input`] - JSON design input
//! - [`clauses`] - Clause checks and code defaults
//! - [`barriers`] - Crash barrier and median geometry builders
//! - [`cross_section`] - Layout normalizer (Clause 105.2.1)
//! - [`record`] - Namespaced design record
//! - [`selectors`] - Closed sets of categorical inputs
//! - [`equations`] - Area formulas
//! - [`materials`] - Unit weights and area-to-load conversion
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod barriers;
pub mod clauses;
pub mod cross_section;
pub mod equations;
pub mod errors;
pub mod input;
pub mod materials;
pub mod record;
pub mod selectors;
pub mod session;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use barriers::{GeometryOutcome, VariantSelection};
pub use clauses::{ClauseId, ClauseResult, ClauseStatus};
pub use cross_section::{CrossSectionLayout, SectionElement};
pub use errors::{CalcError, CalcResult};
pub use input::DesignInput;
pub use record::{DesignRecord, DesignValue};
pub use session::{DesignSession, SessionMetadata};
