//! # Search Types
//!
//! Search results, the static category list, and the substring matcher
//! that merges categories and catalog products into one ordered response.

use crate::catalog::CatalogProduct;
use crate::error::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};

/// Identifier of a search hit: categories use slugs, catalog products use
/// whatever the provider returned (usually a number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Number(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        ItemId::Number(i64::from(id))
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Text(id)
    }
}

/// Kind of a search hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Category,
    Product,
}

/// A single entry of the search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
}

/// A browsable category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Slug (e.g., "electronics")
    pub id: String,
    /// Display name (e.g., "Electronics")
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn to_result(&self) -> SearchResult {
        SearchResult {
            id: ItemId::Text(self.id.clone()),
            name: self.name.clone(),
            kind: ResultKind::Category,
        }
    }
}

/// Ordered, read-only list of categories shared by every request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryCatalog {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories served when no categories file is configured
    pub fn builtin() -> Self {
        Self::new(vec![
            Category::new("electronics", "Electronics"),
            Category::new("jewelery", "Jewelery"),
            Category::new("mens-category", "Men's Category"),
            Category::new("womens-category", "Women's Category"),
        ])
    }

    /// Load categories from a TOML string of `[[categories]]` tables
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Categories whose name contains the query, in catalog order
    pub fn matching<'a>(&'a self, query: &'a SearchQuery) -> impl Iterator<Item = &'a Category> {
        self.categories
            .iter()
            .filter(move |c| query.matches(&c.name))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A validated search query.
///
/// Validation looks at the trimmed text, but matching uses the query as
/// given, so leading or trailing spaces still have to appear in the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Parse the `query` parameter; missing or blank is rejected
    pub fn parse(raw: Option<&str>) -> ShopResult<Self> {
        match raw {
            Some(q) if !q.trim().is_empty() => Ok(Self {
                raw: q.to_string(),
                needle: q.to_lowercase(),
            }),
            _ => Err(ShopError::MissingQuery),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive substring test
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Build the search response: matching categories first, then matching
/// products, each in input order.
pub fn merge_results(
    categories: &CategoryCatalog,
    products: &[CatalogProduct],
    query: &SearchQuery,
) -> Vec<SearchResult> {
    let category_hits = categories.matching(query).map(Category::to_result);
    let product_hits = products
        .iter()
        .filter(|p| query.matches(&p.title))
        .map(CatalogProduct::to_result);

    category_hits.chain(product_hits).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<CatalogProduct> {
        vec![
            CatalogProduct::new(1, "Fjallraven Backpack"),
            CatalogProduct::new(2, "Mens Casual Premium Slim Fit T-Shirts"),
            CatalogProduct::new(9, "WD 2TB Elements Portable External Hard Drive"),
            CatalogProduct::new(15, "BIYLACLESEN Women's Snowboard Jacket"),
        ]
    }

    #[test]
    fn test_parse_rejects_missing_and_blank() {
        assert!(matches!(SearchQuery::parse(None), Err(ShopError::MissingQuery)));
        assert!(matches!(SearchQuery::parse(Some("")), Err(ShopError::MissingQuery)));
        assert!(matches!(
            SearchQuery::parse(Some(" \t\n ")),
            Err(ShopError::MissingQuery)
        ));
        assert!(SearchQuery::parse(Some("bag")).is_ok());
    }

    #[test]
    fn test_untrimmed_query_is_matched_verbatim() {
        let query = SearchQuery::parse(Some(" backpack")).unwrap();
        assert!(query.matches("Fjallraven Backpack"));
        assert!(!query.matches("Backpack"));
        assert_eq!(query.as_str(), " backpack");
    }

    #[test]
    fn test_category_prefix_match() {
        let catalog = CategoryCatalog::builtin();
        let query = SearchQuery::parse(Some("elect")).unwrap();
        let results = merge_results(&catalog, &products()[..2], &query);

        assert_eq!(
            results,
            vec![SearchResult {
                id: ItemId::from("electronics"),
                name: "Electronics".to_string(),
                kind: ResultKind::Category,
            }]
        );
    }

    #[test]
    fn test_categories_precede_products() {
        let catalog = CategoryCatalog::builtin();
        let query = SearchQuery::parse(Some("WOMEN")).unwrap();
        let results = merge_results(&catalog, &products(), &query);

        let kinds: Vec<_> = results.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ResultKind::Category, ResultKind::Product]);
        assert_eq!(results[0].id, ItemId::from("womens-category"));
        assert_eq!(results[1].id, ItemId::Number(15));
    }

    #[test]
    fn test_every_hit_contains_query() {
        let catalog = CategoryCatalog::builtin();
        let query = SearchQuery::parse(Some("e")).unwrap();
        let results = merge_results(&catalog, &products(), &query);

        assert_eq!(results.len(), catalog.len() + products().len());
        assert!(results
            .iter()
            .all(|r| r.name.to_lowercase().contains("e")));
    }

    #[test]
    fn test_no_hits_is_empty() {
        let query = SearchQuery::parse(Some("zzz")).unwrap();
        assert!(merge_results(&CategoryCatalog::builtin(), &products(), &query).is_empty());
    }

    #[test]
    fn test_result_json_shape() {
        let hit = CatalogProduct::new(3, "Mens Cotton Jacket").to_result();
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "name": "Mens Cotton Jacket", "type": "product" })
        );

        let cat = Category::new("jewelery", "Jewelery").to_result();
        let json = serde_json::to_value(&cat).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "jewelery", "name": "Jewelery", "type": "category" })
        );
    }

    #[test]
    fn test_categories_from_toml() {
        let toml_str = r#"
            [[categories]]
            id = "books"
            name = "Books"

            [[categories]]
            id = "garden"
            name = "Garden & Outdoor"
        "#;
        let catalog = CategoryCatalog::from_toml(toml_str).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories[1], Category::new("garden", "Garden & Outdoor"));
    }
}
