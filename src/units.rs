//! Tag-keyed collection of unit snapshots.

use crate::unit::Tagged;
use indexmap::{
	map::{IntoValues, Keys, Values},
	IndexMap, IndexSet,
};
use rustc_hash::FxHasher;
use std::{hash::BuildHasherDefault, iter::FromIterator};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
pub(crate) type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;

/// Units keyed by tag.
///
/// Iteration order is the order units were pushed in,
/// so "first" unit is the same on every step given the same snapshot.
#[derive(Debug, Clone)]
pub struct Units<U>(FxIndexMap<u64, U>);

impl<U> Default for Units<U> {
	fn default() -> Self {
		Units(FxIndexMap::default())
	}
}

impl<U: Tagged> Units<U> {
	#[inline]
	pub fn new() -> Self {
		Self::default()
	}

	#[inline]
	pub fn push(&mut self, u: U) -> Option<U> {
		self.0.insert(u.tag(), u)
	}

	#[inline]
	pub fn remove(&mut self, tag: u64) -> Option<U> {
		self.0.shift_remove(&tag)
	}

	#[inline]
	pub fn get(&self, tag: u64) -> Option<&U> {
		self.0.get(&tag)
	}

	#[inline]
	pub fn get_mut(&mut self, tag: u64) -> Option<&mut U> {
		self.0.get_mut(&tag)
	}

	#[inline]
	pub fn contains_tag(&self, tag: u64) -> bool {
		self.0.contains_key(&tag)
	}

	#[inline]
	pub fn iter(&self) -> Values<u64, U> {
		self.0.values()
	}

	#[inline]
	pub fn tags(&self) -> Keys<u64, U> {
		self.0.keys()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}
}

impl<U: Tagged> FromIterator<U> for Units<U> {
	fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
		Units(iter.into_iter().map(|u| (u.tag(), u)).collect())
	}
}

impl<U: Tagged> Extend<U> for Units<U> {
	fn extend<T: IntoIterator<Item = U>>(&mut self, iter: T) {
		self.0.extend(iter.into_iter().map(|u| (u.tag(), u)));
	}
}

impl<U> IntoIterator for Units<U> {
	type Item = U;
	type IntoIter = IntoValues<u64, U>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_values()
	}
}

impl<'a, U: Tagged> IntoIterator for &'a Units<U> {
	type Item = &'a U;
	type IntoIter = Values<'a, u64, U>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
