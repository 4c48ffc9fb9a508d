// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Allowances (mirrors [workspace.lints.clippy] in Cargo.toml)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::redundant_pub_crate)]

//! Step-by-step animation engine for classic search and sort algorithms.
//!
//! stepviz runs linear search, binary search, bubble sort and selection
//! sort one discrete step at a time over a collection of labeled elements
//! on a 2D surface. Every step emits visual effects (highlight, clear,
//! move, announce, dismiss) that must finish before the next step begins,
//! in automatic playback or manual single-stepping.
//!
//! # Key entry points
//!
//! - [`engine::Visualizer`] - the facade a UI talks to
//! - [`algorithm`] - the four algorithms as pure step functions
//! - [`animation::AnimationDriver`] - the presentation contract, with
//!   [`animation::TimedDriver`] and [`animation::RecordingDriver`]
//! - [`options::Options`] - runtime configuration (playback, timing,
//!   colors, layout)
//!
//! # Architecture
//!
//! Data flows one way per run: the [`scene::Scene`] is snapshotted into an
//! ordered view, a state machine turns `(state, view)` into a step outcome,
//! the [`playback::PlaybackController`] plays the outcome's effect batches
//! through the driver, and sort swaps are written back to the scene once
//! their moves resolved. Terminal results go to the
//! [`reporter::ResultReporter`], which keeps the engine busy until its
//! announcement is gone. Everything is driven by the host's frame clock:
//! no threads, no async runtime.

pub mod algorithm;
pub mod animation;
pub mod engine;
pub mod error;
pub mod options;
pub mod playback;
pub mod reporter;
pub mod scene;
pub mod util;
