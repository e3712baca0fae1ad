//! Pagination types.

use serde::{Deserialize, Serialize};

/// Pagination parameters shared across all list endpoints.
///
/// - `per_page`: 1–100, default 20
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page", rename = "per-page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    20
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` to the valid range 1–100 and `page` to ≥ 1.
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, 100),
            page: self.page.max(1),
        }
    }

    /// Row offset for the clamped request.
    pub fn offset(self) -> u64 {
        let p = self.clamped();
        u64::from(p.page - 1) * u64::from(p.per_page)
    }

    /// Row limit for the clamped request.
    pub fn limit(self) -> u64 {
        u64::from(self.clamped().per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_per_page_20_page_1() {
        let p = PageRequest::default();
        assert_eq!(p.per_page, 20);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn should_deserialize_defaults_when_fields_absent() {
        let p: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(p.per_page, 20);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn should_clamp_per_page_to_1_100() {
        let low = PageRequest {
            per_page: 0,
            page: 1,
        };
        let high = PageRequest {
            per_page: 500,
            page: 1,
        };
        assert_eq!(low.clamped().per_page, 1);
        assert_eq!(high.clamped().per_page, 100);
    }

    #[test]
    fn should_clamp_page_to_minimum_1() {
        let p = PageRequest {
            per_page: 20,
            page: 0,
        };
        assert_eq!(p.clamped().page, 1);
    }

    #[test]
    fn should_compute_offset_and_limit_from_clamped_values() {
        let p = PageRequest {
            per_page: 10,
            page: 3,
        };
        assert_eq!(p.offset(), 20);
        assert_eq!(p.limit(), 10);

        // Out-of-range inputs clamp before the arithmetic.
        let p = PageRequest {
            per_page: 500,
            page: 0,
        };
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 100);
    }

}
