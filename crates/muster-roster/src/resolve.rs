// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeSet;

use crate::filter::MembershipFilter;
use crate::member::{Member, MemberId};

/// Outcome of applying a [`MembershipFilter`] to a roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
	/// Ids of the selected members, deduplicated and sorted.
	pub ids: BTreeSet<MemberId>,
	/// Filter names that matched no active member.
	pub unknown_names: BTreeSet<String>,
}

/// Applies a membership filter to a roster.
///
/// Deactivated members are never selected, regardless of the filter: an
/// include list naming a deactivated member reports that name as unknown
/// rather than producing an id that cannot be invited. The result depends
/// only on the set of members, not on roster order.
pub fn resolve(roster: &[Member], filter: &MembershipFilter) -> Resolution {
	let active: Vec<&Member> = roster.iter().filter(|m| m.is_active()).collect();

	match filter {
		MembershipFilter::All => Resolution {
			ids: active.iter().map(|m| m.id.clone()).collect(),
			unknown_names: BTreeSet::new(),
		},
		MembershipFilter::Include(names) => Resolution {
			ids: active
				.iter()
				.filter(|m| names.contains(&m.name))
				.map(|m| m.id.clone())
				.collect(),
			unknown_names: unknown_names(&active, names),
		},
		MembershipFilter::Exclude(names) => Resolution {
			ids: active
				.iter()
				.filter(|m| !names.contains(&m.name))
				.map(|m| m.id.clone())
				.collect(),
			unknown_names: unknown_names(&active, names),
		},
	}
}

fn unknown_names(active: &[&Member], names: &BTreeSet<String>) -> BTreeSet<String> {
	let known: BTreeSet<&str> = active.iter().map(|m| m.name.as_str()).collect();
	names
		.iter()
		.filter(|name| !known.contains(name.as_str()))
		.cloned()
		.collect()
}
