// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page/size resolution and next-page bookkeeping for `/search`.

use crate::error::ServerError;

/// A validated page request. `page >= 1`, `1 <= size <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
	page: u32,
	size: u32,
}

impl Page {
	/// Applies defaults and rejects out-of-range values.
	pub fn resolve(
		page: Option<u32>,
		size: Option<u32>,
		default_size: u32,
		max_size: u32,
	) -> Result<Self, ServerError> {
		let page = page.unwrap_or(1);
		let size = size.unwrap_or(default_size);

		if page < 1 {
			return Err(ServerError::BadRequest(format!(
				"page must be at least 1, got {page}"
			)));
		}
		if size < 1 || size > max_size {
			return Err(ServerError::BadRequest(format!(
				"size must be between 1 and {max_size}, got {size}"
			)));
		}

		Ok(Self { page, size })
	}

	pub fn page(&self) -> u32 {
		self.page
	}

	pub fn size(&self) -> u32 {
		self.size
	}

	/// `(page - 1) * size`.
	pub fn offset(&self) -> u64 {
		u64::from(self.page - 1) * u64::from(self.size)
	}

	/// `page + 1` while results remain past this page, otherwise `None`.
	pub fn next_page(&self, total: u64) -> Option<u32> {
		if self.offset() + u64::from(self.size) < total {
			self.page.checked_add(1)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_defaults() {
		let page = Page::resolve(None, None, 10, 25).unwrap();
		assert_eq!(page, Page { page: 1, size: 10 });
		assert_eq!(page.offset(), 0);
	}

	#[test]
	fn test_resolved_values_are_exposed() {
		let page = Page::resolve(Some(3), Some(20), 10, 25).unwrap();
		assert_eq!((page.page(), page.size()), (3, 20));
		assert_eq!(page.offset(), 40);
	}

	#[test]
	fn test_rejects_out_of_range() {
		assert!(Page::resolve(Some(0), None, 10, 25).is_err());
		assert!(Page::resolve(None, Some(0), 10, 25).is_err());
		assert!(Page::resolve(None, Some(26), 10, 25).is_err());
		assert!(Page::resolve(Some(1), Some(25), 10, 25).is_ok());
	}

	#[test]
	fn test_last_full_page_has_no_next() {
		let page = Page { page: 4, size: 25 };
		assert_eq!(page.offset(), 75);
		assert_eq!(page.next_page(100), None);
		assert_eq!(page.next_page(101), Some(5));
	}

	#[test]
	fn test_zero_total_has_no_next() {
		assert_eq!(Page { page: 1, size: 10 }.next_page(0), None);
	}

	#[test]
	fn test_page_beyond_results_has_no_next() {
		assert_eq!(Page { page: 9, size: 25 }.next_page(30), None);
	}

	#[test]
	fn test_large_page_does_not_overflow() {
		let page = Page {
			page: u32::MAX,
			size: 25,
		};
		assert_eq!(page.offset(), (u64::from(u32::MAX) - 1) * 25);
		assert_eq!(page.next_page(u64::MAX), None);
	}

	proptest! {
		#[test]
		fn offset_is_page_minus_one_times_size(page in 1u32..100_000, size in 1u32..=25) {
			let resolved = Page::resolve(Some(page), Some(size), 10, 25).unwrap();
			prop_assert_eq!(resolved.offset(), u64::from(page - 1) * u64::from(size));
		}

		#[test]
		fn next_page_iff_results_remain(page in 1u32..10_000, size in 1u32..=25, total in 0u64..1_000_000) {
			let resolved = Page { page, size };
			let remaining = resolved.offset() + u64::from(size) < total;
			prop_assert_eq!(resolved.next_page(total).is_some(), remaining);
			if let Some(next) = resolved.next_page(total) {
				prop_assert_eq!(next, page + 1);
			}
		}
	}
}
