//! # Vellum
//!
//! A terminal front end for AI-generated programming articles.
//!
//! ## Architecture
//!
//! ```text
//! Generator (HTTP) → Session state machine → Markdown renderer → UI
//! ```
//!
//! - [`generator`]: HTTP client for the content-generation service
//! - [`domain`]: Article model and the session state machine
//! - [`markdown`]: markdown-subset parsing into display nodes
//! - [`tui`]: Terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate ten random programming tips
//! vellum tips
//!
//! # Generate articles about a topic, saving them as markdown
//! vellum topic "async Rust" --save ./articles
//!
//! # Launch the TUI
//! vellum tui
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the configuration and the
/// generation service client together.
pub mod app;

/// Command-line interface using clap.
///
/// - `tips [--save <dir>]` - Generate random programming tips
/// - `topic <topic> [--save <dir>]` - Generate articles about a topic
/// - `tui` - Launch the TUI (the default)
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/vellum/config.toml`, supporting the API base URL
/// and custom colors (named or hex).
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article): a generated content unit
/// - [`Session`](domain::Session): the screen/selection state machine
pub mod domain;

/// Export actions: save as markdown file, copy to clipboard.
pub mod export;

/// The content-generation service boundary.
///
/// - [`Generator`](generator::Generator): async trait for the service
/// - [`HttpGenerator`](generator::http::HttpGenerator): reqwest-based client
pub mod generator;

/// Markdown-subset renderer producing structured display nodes.
pub mod markdown;

/// Terminal user interface.
///
/// Three screens: Home (topic input), List (generated batch), Detail
/// (rendered article with AI edit actions, save and copy).
pub mod tui;
