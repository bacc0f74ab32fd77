// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeSet;

/// Which members of a roster an operation should target.
///
/// The two named variants carry normalized member handles as produced by
/// [`parse_name_list`]. [`MembershipFilter::All`] selects every active
/// member and is the fallback when no names were given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MembershipFilter {
	All,
	/// Target exactly the named members.
	Include(BTreeSet<String>),
	/// Target every active member except the named ones.
	Exclude(BTreeSet<String>),
}

impl MembershipFilter {
	/// Builds an include filter from a raw comma-separated name list.
	pub fn include(spec: &str) -> Self {
		Self::Include(parse_name_list(spec))
	}

	/// Builds an exclude filter from a raw comma-separated name list.
	pub fn exclude(spec: &str) -> Self {
		Self::Exclude(parse_name_list(spec))
	}

	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}
}

/// Normalizes a comma-separated name list as typed on the command line.
///
/// Every whitespace character is stripped, including ones inside a name, so
/// `"alice, bob"` and `"alice,bob"` parse identically. Empty items left by
/// stray commas are dropped, and duplicates collapse into one entry.
pub fn parse_name_list(spec: &str) -> BTreeSet<String> {
	spec.split(',')
		.map(|item| item.chars().filter(|c| !c.is_whitespace()).collect::<String>())
		.filter(|name| !name.is_empty())
		.collect()
}
