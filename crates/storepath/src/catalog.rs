use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::routing::StopLookup;
use crate::routing::types::Location;

/// Demo products placed on the bundled supercenter layout.
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.yaml");

/// A product shelved somewhere on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub location: Location,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Products keyed by SKU, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_sku: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_sku = HashMap::with_capacity(products.len());
        for (i, product) in products.iter().enumerate() {
            if !product.location.is_finite() {
                return Err(CatalogError::NonFiniteLocation {
                    sku: product.sku.clone(),
                });
            }
            if by_sku.insert(product.sku.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSku(product.sku.clone()));
            }
        }
        Ok(Self { products, by_sku })
    }

    /// The demo catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml(BUNDLED_CATALOG)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(contents)?;
        Self::new(file.products)
    }

    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.by_sku.get(sku).map(|&i| &self.products[i])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product name for a SKU, or the id itself for anything else (entrance, checkout,
    /// unknown SKUs).
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |p| p.name.as_str())
    }
}

impl StopLookup for Catalog {
    fn locate(&self, id: &str) -> Option<Location> {
        self.get(id).map(|p| p.location)
    }
}
