//! Page number pagination, inspired by Django REST Framework's pagination.
//!
//! Example URLs:
//! - `http://api.example.org/things/?page=4`
//! - `http://api.example.org/things/?page=4&page_size=100`

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
	pub count: usize,
	pub next: Option<String>,
	pub previous: Option<String>,
	pub results: Vec<T>,
}

/// Page number based pagination.
#[derive(Debug, Clone)]
pub struct PageNumberPagination {
	/// Default page size
	pub page_size: usize,
	/// Query parameter name for page number
	pub page_query_param: String,
	/// Query parameter name for a client-supplied page size (optional)
	pub page_size_query_param: Option<String>,
	/// Maximum allowed page size
	pub max_page_size: Option<usize>,
	/// Strings that represent the last page
	pub last_page_strings: Vec<String>,
}

impl Default for PageNumberPagination {
	fn default() -> Self {
		Self {
			page_size: 10,
			page_query_param: "page".to_string(),
			page_size_query_param: None,
			max_page_size: None,
			last_page_strings: vec!["last".to_string()],
		}
	}
}

impl PageNumberPagination {
	/// Creates a new PageNumberPagination with default settings
	///
	/// # Examples
	///
	/// ```
	/// use action_serializers::PageNumberPagination;
	///
	/// let paginator = PageNumberPagination::new();
	/// assert_eq!(paginator.page_size, 10);
	/// assert_eq!(paginator.page_query_param, "page");
	/// ```
	pub fn new() -> Self {
		Self::default()
	}
	/// Sets the default page size for pagination
	pub fn page_size(mut self, size: usize) -> Self {
		self.page_size = size;
		self
	}
	/// Sets the maximum allowed page size
	pub fn max_page_size(mut self, size: usize) -> Self {
		self.max_page_size = Some(size);
		self
	}
	/// Sets the query parameter name for a client-supplied page size
	///
	/// # Examples
	///
	/// ```
	/// use action_serializers::PageNumberPagination;
	///
	/// let paginator = PageNumberPagination::new()
	///     .page_size_query_param("page_size");
	/// assert_eq!(paginator.page_size_query_param, Some("page_size".to_string()));
	/// ```
	pub fn page_size_query_param(mut self, param: impl Into<String>) -> Self {
		self.page_size_query_param = Some(param.into());
		self
	}

	/// Paginate `items` according to the request query string.
	///
	/// `query` is the raw query string of the request; the page number and
	/// (when `page_size_query_param` is configured) the page size are read
	/// from it. `base_url` is the request path, used for next/previous links.
	pub fn paginate<T: Clone>(
		&self,
		items: &[T],
		query: Option<&str>,
		base_url: &str,
	) -> Result<PaginatedResponse<T>> {
		let query = query.unwrap_or("");
		let page_size = self.requested_page_size(query);
		let total_count = items.len();

		let total_pages = if total_count == 0 {
			1
		} else {
			total_count.div_ceil(page_size)
		};

		let page_number = match Self::query_value(query, &self.page_query_param) {
			Some(param) => self.parse_page_number(param, total_pages)?,
			None => 1,
		};

		if page_number > total_pages && total_count > 0 {
			return Err(Error::InvalidPage(
				"That page contains no results".to_string(),
			));
		}

		let start = (page_number - 1) * page_size;
		let end = std::cmp::min(start + page_size, total_count);
		let results = items[start.min(total_count)..end].to_vec();

		let next = (page_number < total_pages)
			.then(|| self.build_url(base_url, query, page_number + 1));
		let previous = (page_number > 1).then(|| self.build_url(base_url, query, page_number - 1));

		Ok(PaginatedResponse {
			count: total_count,
			next,
			previous,
			results,
		})
	}

	fn requested_page_size(&self, query: &str) -> usize {
		let requested = self
			.page_size_query_param
			.as_ref()
			.and_then(|param| Self::query_value(query, param))
			.and_then(|value| value.parse::<usize>().ok())
			.filter(|&size| size > 0);

		match requested {
			Some(size) => match self.max_page_size {
				Some(max) => std::cmp::min(size, max),
				None => size,
			},
			None => self.page_size,
		}
	}

	fn query_value<'a>(query: &'a str, name: &str) -> Option<&'a str> {
		query.split('&').find_map(|pair| {
			let mut parts = pair.splitn(2, '=');
			if parts.next()? == name {
				Some(parts.next().unwrap_or(""))
			} else {
				None
			}
		})
	}

	fn parse_page_number(&self, page_str: &str, total_pages: usize) -> Result<usize> {
		// Check if it's a "last" page string
		if self.last_page_strings.iter().any(|s| s == page_str) {
			return Ok(total_pages);
		}

		match page_str.parse::<usize>() {
			Ok(0) => Err(Error::InvalidPage(
				"That page number is less than 1".to_string(),
			)),
			Ok(n) => Ok(n),
			Err(_) => Err(Error::InvalidPage("Invalid page number".to_string())),
		}
	}

	fn build_url(&self, base_url: &str, query: &str, page: usize) -> String {
		let full = if query.is_empty() {
			base_url.to_string()
		} else {
			format!("{}?{}", base_url, query)
		};
		let url = url::Url::parse(&full)
			.unwrap_or_else(|_| url::Url::parse(&format!("http://localhost{}", full)).unwrap());

		let mut new_url = url.clone();
		new_url
			.query_pairs_mut()
			.clear()
			.append_pair(&self.page_query_param, &page.to_string());

		// Copy other query parameters
		for (key, value) in url.query_pairs() {
			if key != self.page_query_param {
				new_url.query_pairs_mut().append_pair(&key, &value);
			}
		}

		new_url.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_page() {
		let items: Vec<i32> = (1..=25).collect();
		let paginator = PageNumberPagination::new().page_size(10);

		let page = paginator.paginate(&items, Some("page=1"), "/items/").unwrap();
		assert_eq!(page.results.len(), 10);
		assert_eq!(page.results[0], 1);
		assert_eq!(page.count, 25);
		assert!(page.next.is_some());
		assert!(page.previous.is_none());
	}

	#[test]
	fn test_middle_page_has_both_links() {
		let items: Vec<i32> = (1..=25).collect();
		let paginator = PageNumberPagination::new().page_size(10);

		let page = paginator.paginate(&items, Some("page=2"), "/items/").unwrap();
		assert_eq!(page.results[0], 11);
		assert!(page.next.is_some());
		assert!(page.previous.is_some());
	}

	#[test]
	fn test_last_page_keyword() {
		let items: Vec<i32> = (1..=25).collect();
		let paginator = PageNumberPagination::new().page_size(10);

		let page = paginator
			.paginate(&items, Some("page=last"), "/items/")
			.unwrap();
		assert_eq!(page.results.len(), 5);
		assert_eq!(page.results[0], 21);
		assert!(page.next.is_none());
	}

	#[test]
	fn test_no_page_param_defaults_to_first_page() {
		let items: Vec<i32> = (1..=25).collect();
		let paginator = PageNumberPagination::new().page_size(5);

		let page = paginator.paginate(&items, None, "/items/").unwrap();
		assert_eq!(page.results, vec![1, 2, 3, 4, 5]);
	}

	#[test]
	fn test_invalid_page_number() {
		let items: Vec<i32> = (1..=25).collect();
		let paginator = PageNumberPagination::new().page_size(10);

		let result = paginator.paginate(&items, Some("page=invalid"), "/items/");
		assert!(matches!(result, Err(Error::InvalidPage(_))));
	}

	#[test]
	fn test_zero_page_number() {
		let items: Vec<i32> = (1..=25).collect();
		let paginator = PageNumberPagination::new().page_size(10);

		let result = paginator.paginate(&items, Some("page=0"), "/items/");
		assert!(matches!(result, Err(Error::InvalidPage(_))));
	}

	#[test]
	fn test_out_of_range_page() {
		let items: Vec<i32> = (1..=25).collect();
		let paginator = PageNumberPagination::new().page_size(10);

		let result = paginator.paginate(&items, Some("page=10"), "/items/");
		assert!(matches!(result, Err(Error::InvalidPage(_))));
	}

	#[test]
	fn test_client_page_size_clamped_to_max() {
		let items: Vec<i32> = (1..=50).collect();
		let paginator = PageNumberPagination::new()
			.page_size(10)
			.page_size_query_param("page_size")
			.max_page_size(20);

		let page = paginator
			.paginate(&items, Some("page_size=40"), "/items/")
			.unwrap();
		assert_eq!(page.results.len(), 20);
	}

	#[test]
	fn test_client_page_size_changes_slicing() {
		let items: Vec<i32> = (1..=15).collect();
		let paginator = PageNumberPagination::new()
			.page_size(10)
			.page_size_query_param("page_size")
			.max_page_size(100);

		let page = paginator
			.paginate(&items, Some("page=2&page_size=5"), "/items/")
			.unwrap();
		assert_eq!(page.count, 15);
		assert_eq!(page.results, vec![6, 7, 8, 9, 10]);
		assert!(page.next.is_some());
		assert!(page.previous.is_some());
	}

	#[test]
	fn test_links_preserve_other_query_params() {
		let items: Vec<i32> = (1..=15).collect();
		let paginator = PageNumberPagination::new()
			.page_size(10)
			.page_size_query_param("page_size")
			.max_page_size(100);

		let page = paginator
			.paginate(&items, Some("page=1&page_size=5"), "/items/")
			.unwrap();
		let next = page.next.unwrap();
		assert!(next.contains("page=2"));
		assert!(next.contains("page_size=5"));
	}

	#[test]
	fn test_empty_list_is_a_single_empty_page() {
		let items: Vec<i32> = vec![];
		let paginator = PageNumberPagination::new().page_size(10);

		let page = paginator.paginate(&items, Some("page=1"), "/items/").unwrap();
		assert_eq!(page.count, 0);
		assert!(page.results.is_empty());
		assert!(page.next.is_none());
		assert!(page.previous.is_none());
	}
}
