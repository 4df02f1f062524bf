//! # Introduction
//!
//! stepviz records what classic algorithms do, one frame per observable
//! step, and replays the recording in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Recorder → Vec<Frame> → Timeline → TUI / JSON export
//! ```
//!
//! 1. [`input`]: parses arrays and edge lists, generates seeded arrays.
//! 2. [`sorting`]: fourteen sorting recorders producing [`frame::SortFrame`]s.
//! 3. [`structures`]: stack, queue, linked list with a simulated cycle and
//!    Floyd detection, and a binary tree with BST and AVL insertion.
//! 4. [`graph`]: adjacency-list graph with traversal, shortest path and
//!    spanning tree recorders producing [`frame::GraphFrame`]s.
//! 5. [`frame`]: frame types plus the [`frame::Timeline`] cursor.
//! 6. [`ui`]: ratatui-based player; not part of the stable library API.
//!
//! Recording never fails. A request the containers cannot honour comes back
//! as `None` or an empty frame list; [`errors`] covers the front end.

pub mod cli;
pub mod config;
pub mod errors;
pub mod frame;
pub mod graph;
pub mod input;
pub mod sorting;
pub mod structures;
pub mod ui;
