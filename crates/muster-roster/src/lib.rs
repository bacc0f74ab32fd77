// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Workspace roster model and membership resolution for Muster.
//!
//! This crate holds the pure data model shared across Muster: the
//! [`Member`] directory entry, the [`MembershipFilter`] describing which
//! members an operation targets, and the [`resolve`] function that turns a
//! filter plus a roster into the concrete set of member ids to act on.
//!
//! Everything in here is deterministic and free of I/O so the selection
//! rules can be tested without a workspace to talk to.

mod filter;
mod member;
mod resolve;

pub use filter::{parse_name_list, MembershipFilter};
pub use member::{Member, MemberId};
pub use resolve::{resolve, Resolution};
