use serde::{Deserialize, Serialize};

use crate::domain::validation::{Validate, ValidationErrors};

pub const DEFAULT_LIMIT: usize = 100;

/// Search-and-page parameters shared by several list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for CommonQueryParams {
    fn default() -> Self {
        Self {
            q: None,
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl CommonQueryParams {
    /// Returns the `skip..skip + limit` window of `items`, clamped to bounds
    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.skip.min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }

    /// The search term, ignoring an empty `q`
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

/// Query for looking up a person by name and age
#[derive(Debug, Clone, Deserialize)]
pub struct PersonDetailQuery {
    #[serde(default)]
    pub name: Option<String>,
    pub age: String,
}

impl Validate for PersonDetailQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            errors.check_length("name", name, 1, Some(50));
        }
        errors.into_result()
    }
}

/// Path id that must be strictly positive
pub fn check_positive_id(id: i64) -> Result<i64, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if id <= 0 {
        errors.add("person_id", "must be greater than 0");
    }
    errors.into_result().map(|()| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [&str; 3] = ["Foo", "Bar", "Baz"];

    #[test]
    fn defaults() {
        let params: CommonQueryParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, CommonQueryParams::default());
        assert_eq!(params.limit, 100);
    }

    #[test]
    fn page_everything_by_default() {
        assert_eq!(CommonQueryParams::default().page(&ITEMS), &ITEMS);
    }

    #[test]
    fn page_window() {
        let params = CommonQueryParams {
            skip: 1,
            limit: 1,
            ..Default::default()
        };
        assert_eq!(params.page(&ITEMS), &["Bar"]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let params = CommonQueryParams {
            skip: 10,
            ..Default::default()
        };
        assert!(params.page(&ITEMS).is_empty());
    }

    #[test]
    fn page_huge_limit_does_not_overflow() {
        let params = CommonQueryParams {
            skip: 2,
            limit: usize::MAX,
            ..Default::default()
        };
        assert_eq!(params.page(&ITEMS), &["Baz"]);
    }

    #[test]
    fn empty_search_is_ignored() {
        let params = CommonQueryParams {
            q: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(params.search(), None);
    }

    #[test]
    fn detail_query_name_bounds() {
        let ok = PersonDetailQuery {
            name: Some("Bender".to_string()),
            age: "26".to_string(),
        };
        assert!(ok.validate().is_ok());

        let too_long = PersonDetailQuery {
            name: Some("x".repeat(51)),
            age: "26".to_string(),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn positive_id() {
        assert_eq!(check_positive_id(7).unwrap(), 7);
        assert!(check_positive_id(0).is_err());
        assert!(check_positive_id(-3).is_err());
    }
}
