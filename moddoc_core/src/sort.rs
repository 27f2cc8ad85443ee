use crate::Input;
use crate::Output;
use crate::Provider;
use crate::Requirement;
use crate::Resource;
use crate::Settings;

/// Which orderings to apply, derived from [`Settings`] once per render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortPolicy {
	pub by_name: bool,
	pub by_required: bool,
	pub by_type: bool,
}

impl SortPolicy {
	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			by_name: settings.sort_by_name,
			by_required: settings.sort_by_required,
			by_type: settings.sort_by_type,
		}
	}
}

/// Accessors the ordering engine needs from an entity kind.
///
/// `required_rank` and `type_key` have identity defaults so kinds without a
/// required/type notion still participate in every policy.
pub trait SortTarget {
	fn sort_name(&self) -> String;

	fn required_rank(&self) -> u8 {
		0
	}

	fn type_key(&self) -> String {
		self.sort_name()
	}
}

impl SortTarget for Input {
	fn sort_name(&self) -> String {
		self.name.clone()
	}

	fn required_rank(&self) -> u8 {
		u8::from(!self.is_required())
	}

	fn type_key(&self) -> String {
		self.type_of.clone()
	}
}

impl SortTarget for Output {
	fn sort_name(&self) -> String {
		self.name.clone()
	}
}

impl SortTarget for Provider {
	fn sort_name(&self) -> String {
		self.full_name()
	}
}

impl SortTarget for Requirement {
	fn sort_name(&self) -> String {
		self.name.clone()
	}
}

impl SortTarget for Resource {
	fn sort_name(&self) -> String {
		self.address()
	}

	fn type_key(&self) -> String {
		self.group_key()
	}
}

/// Produce a total order over `items` without mutating the source slice.
///
/// Comparisons are case-sensitive and byte-wise for determinism across
/// platforms. The underlying sort is stable, so every policy breaks ties by
/// declaration order:
///
/// - no flags: declaration order as given;
/// - `by_name`: ascending by name;
/// - `by_name` + `by_required`: required entries first, each partition
///   ascending by name;
/// - `by_type`: ascending by type category, ties by name.
pub fn order<'a, T: SortTarget>(items: &'a [T], policy: &SortPolicy) -> Vec<&'a T> {
	let mut view: Vec<&T> = items.iter().collect();

	if policy.by_type {
		view.sort_by_key(|item| (item.type_key(), item.sort_name()));
	} else if policy.by_name {
		if policy.by_required {
			view.sort_by_key(|item| (item.required_rank(), item.sort_name()));
		} else {
			view.sort_by_key(|item| item.sort_name());
		}
	}

	view
}
