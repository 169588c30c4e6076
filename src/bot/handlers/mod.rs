//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions other than slash commands,
//! currently the button presses on an inventory summary.

/// Button custom ids, the detail button row and the press subscription
pub mod buttons;
