//! Multi-line, stock-aware product selection
//!
//! Customers, parcels and bills all carry an ordered list of products. The
//! first line is the *primary* product and is mirrored into the legacy
//! single-product fields (`product`, `productId`) that older records and
//! older backend code paths still read.
//!
//! Editing is pure local state: nothing here touches the network. Stock is
//! only checked softly while editing ([`StockWarning`]) and strictly at submit
//! time through [`validate_submission`].

mod catalog;
mod validate;

pub use catalog::ProductCatalog;
pub use validate::{parse_quantity, validate_submission};

use crate::error::{AppError, AppResult};
use crate::models::{Allocations, Product, ProductInfo};
use std::fmt;

/// One selected product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub model: String,
    pub quantity: i64,
}

impl LineItem {
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            model: product.model.clone(),
            quantity,
        }
    }
}

/// Legacy singular fields mirroring the primary line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyFields {
    /// Primary product name
    pub product: Option<String>,
    /// Primary product id
    pub product_id: Option<String>,
}

/// Non-blocking notice raised while typing a quantity above current stock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockWarning {
    pub product: String,
    pub available: i64,
    pub requested: i64,
}

impl fmt::Display for StockWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Only {} in stock for {} (entered {})",
            self.available, self.product, self.requested
        )
    }
}

/// Ordered product selection of one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSelection {
    lines: Vec<LineItem>,
    legacy: LegacyFields,
}

impl LineSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the selection from a record being edited
    ///
    /// Names and models come from `catalog`; products missing from it keep
    /// their id as the display name so validation can still name them.
    pub fn from_existing(lines: &[ProductInfo], catalog: &ProductCatalog) -> Self {
        let mut selection = Self::new();
        for info in lines {
            let line = match catalog.get(&info.product_id) {
                Some(product) => LineItem::from_product(product, info.quantity),
                None => LineItem {
                    product_id: info.product_id.clone(),
                    name: info.product_id.clone(),
                    model: String::new(),
                    quantity: info.quantity,
                },
            };
            selection.lines.push(line);
        }
        selection.mirror_primary();
        selection
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn primary(&self) -> Option<&LineItem> {
        self.lines.first()
    }

    pub fn legacy(&self) -> &LegacyFields {
        &self.legacy
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn total_units(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Make `product` the primary line with quantity 1
    ///
    /// A previous primary is replaced; secondary lines are kept. If the
    /// product was already selected as a secondary it moves to the front
    /// instead of appearing twice.
    pub fn select_primary(&mut self, product: &Product) {
        if self
            .lines
            .first()
            .is_some_and(|first| first.product_id != product.id)
        {
            self.lines.remove(0);
        }
        self.lines.retain(|l| l.product_id != product.id);
        self.lines.insert(0, LineItem::from_product(product, 1));
        self.mirror_primary();
    }

    /// Add one unit of `product`
    ///
    /// Out-of-stock products are refused. A product already in the list gets
    /// its quantity bumped by one; stock is not enforced here.
    pub fn add_secondary(&mut self, product: &Product) -> AppResult<()> {
        if product.stock <= 0 {
            return Err(AppError::out_of_stock(product.name.clone()));
        }
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => {
                self.lines.push(LineItem::from_product(product, 1));
                if self.lines.len() == 1 {
                    self.mirror_primary();
                }
            }
        }
        Ok(())
    }

    /// Set a line's quantity, clamped to at least 1
    ///
    /// Returns a warning when the new quantity is above the product's current
    /// stock. The value is kept either way; the hard check happens on submit.
    pub fn set_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
        catalog: &ProductCatalog,
    ) -> Option<StockWarning> {
        let line = self.lines.iter_mut().find(|l| l.product_id == product_id)?;
        line.quantity = quantity.max(1);

        let available = catalog.stock(product_id)?;
        (line.quantity > available).then(|| StockWarning {
            product: line.name.clone(),
            available,
            requested: line.quantity,
        })
    }

    /// Remove a line, promoting the next one when the primary goes
    pub fn remove_line(&mut self, product_id: &str) {
        let Some(index) = self.lines.iter().position(|l| l.product_id == product_id) else {
            return;
        };
        self.lines.remove(index);
        if index == 0 {
            self.mirror_primary();
        }
    }

    /// Drop every line and the legacy fields
    pub fn clear(&mut self) {
        self.lines.clear();
        self.legacy = LegacyFields::default();
    }

    pub fn to_product_info(&self) -> Vec<ProductInfo> {
        self.lines
            .iter()
            .map(|l| ProductInfo::new(l.product_id.clone(), l.quantity))
            .collect()
    }

    /// Submit-time check against live stock, see [`validate_submission`]
    pub fn validate(
        &self,
        catalog: &ProductCatalog,
        previous: &Allocations,
    ) -> AppResult<Vec<ProductInfo>> {
        validate_submission(&self.lines, catalog, previous)
    }

    fn mirror_primary(&mut self) {
        self.legacy = match self.lines.first() {
            Some(primary) => LegacyFields {
                product: Some(primary.name.clone()),
                product_id: Some(primary.product_id.clone()),
            },
            None => LegacyFields::default(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn product(id: &str, name: &str, stock: i64) -> Product {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": name,
            "model": format!("{}-M", id),
            "stock": stock,
            "lowStockThreshold": 2,
        }))
        .unwrap()
    }

    fn line(id: &str, name: &str, quantity: i64) -> LineItem {
        LineItem {
            product_id: id.into(),
            name: name.into(),
            model: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_select_primary_mirrors_legacy_fields() {
        let mut sel = LineSelection::new();
        sel.select_primary(&product("a", "Kettle", 4));

        assert_eq!(sel.len(), 1);
        assert_eq!(sel.primary().unwrap().quantity, 1);
        assert_eq!(sel.legacy().product.as_deref(), Some("Kettle"));
        assert_eq!(sel.legacy().product_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_select_primary_replaces_previous_primary() {
        let mut sel = LineSelection::new();
        sel.select_primary(&product("a", "Kettle", 4));
        sel.add_secondary(&product("b", "Iron", 2)).unwrap();
        sel.select_primary(&product("c", "Fan", 9));

        let ids: Vec<_> = sel.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
        assert_eq!(sel.legacy().product_id.as_deref(), Some("c"));
    }

    #[test]
    fn test_select_primary_moves_existing_secondary_to_front() {
        let mut sel = LineSelection::new();
        sel.select_primary(&product("a", "Kettle", 4));
        sel.add_secondary(&product("b", "Iron", 2)).unwrap();
        sel.select_primary(&product("b", "Iron", 2));

        assert_eq!(sel.len(), 1);
        assert_eq!(sel.primary().unwrap().product_id, "b");
    }

    #[test]
    fn test_add_existing_product_increments_by_one() {
        let mut sel = LineSelection::new();
        let kettle = product("a", "Kettle", 1);
        sel.add_secondary(&kettle).unwrap();
        sel.add_secondary(&kettle).unwrap();
        sel.add_secondary(&kettle).unwrap();

        assert_eq!(sel.len(), 1);
        assert_eq!(sel.lines()[0].quantity, 3);
        assert_eq!(sel.legacy().product_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_add_out_of_stock_product_is_refused() {
        let mut sel = LineSelection::new();
        let err = sel.add_secondary(&product("z", "Heater", 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductOutOfStock);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_and_warns() {
        let catalog = ProductCatalog::new(vec![product("a", "Kettle", 3)]);
        let mut sel = LineSelection::from_existing(&[ProductInfo::new("a", 1)], &catalog);

        assert_eq!(sel.set_quantity("a", 0, &catalog), None);
        assert_eq!(sel.lines()[0].quantity, 1);
        assert_eq!(sel.set_quantity("a", -4, &catalog), None);
        assert_eq!(sel.lines()[0].quantity, 1);

        let warning = sel.set_quantity("a", 7, &catalog).unwrap();
        assert_eq!(warning.available, 3);
        assert_eq!(warning.requested, 7);
        assert_eq!(sel.lines()[0].quantity, 7);

        assert_eq!(sel.set_quantity("missing", 2, &catalog), None);
    }

    #[test]
    fn test_remove_primary_promotes_next_line() {
        let mut sel = LineSelection::new();
        sel.select_primary(&product("a", "Kettle", 4));
        sel.add_secondary(&product("b", "Iron", 2)).unwrap();
        sel.add_secondary(&product("c", "Fan", 5)).unwrap();

        sel.remove_line("a");
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.legacy().product.as_deref(), Some("Iron"));
        assert_eq!(sel.legacy().product_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_remove_secondary_keeps_primary() {
        let mut sel = LineSelection::new();
        sel.select_primary(&product("a", "Kettle", 4));
        sel.add_secondary(&product("b", "Iron", 2)).unwrap();

        sel.remove_line("b");
        assert_eq!(sel.len(), 1);
        assert_eq!(sel.legacy().product_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_remove_only_line_clears_everything() {
        let mut sel = LineSelection::new();
        sel.select_primary(&product("a", "Kettle", 4));
        sel.remove_line("a");

        assert!(sel.is_empty());
        assert_eq!(sel.legacy(), &LegacyFields::default());
    }

    #[test]
    fn test_delta_rule_for_edited_record() {
        // stock 5, already allocated 2
        let catalog = ProductCatalog::new(vec![product("x", "Blender", 5)]);
        let mut previous = Allocations::new();
        previous.insert("x", 2);

        let ok = validate_submission(&[line("x", "Blender", 6)], &catalog, &previous).unwrap();
        assert_eq!(ok, vec![ProductInfo::new("x", 6)]);

        let boundary = validate_submission(&[line("x", "Blender", 7)], &catalog, &previous);
        assert!(boundary.is_ok());

        let err = validate_submission(&[line("x", "Blender", 8)], &catalog, &previous).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(
            err.message,
            "Insufficient stock for Blender. Available: 5, Requested: 6"
        );
    }

    #[test]
    fn test_reducing_quantity_never_needs_stock() {
        let catalog = ProductCatalog::new(vec![product("x", "Blender", 0)]);
        let mut previous = Allocations::new();
        previous.insert("x", 4);

        assert!(validate_submission(&[line("x", "Blender", 4)], &catalog, &previous).is_ok());
        assert!(validate_submission(&[line("x", "Blender", 1)], &catalog, &previous).is_ok());
        assert!(validate_submission(&[line("x", "Blender", 5)], &catalog, &previous).is_err());
    }

    #[test]
    fn test_first_failing_line_halts_new_record() {
        let catalog = ProductCatalog::new(vec![product("a", "Kettle", 3), product("b", "Iron", 1)]);
        let mut sel = LineSelection::new();
        sel.select_primary(catalog.get("a").unwrap());
        sel.set_quantity("a", 3, &catalog);
        sel.add_secondary(catalog.get("b").unwrap()).unwrap();
        sel.set_quantity("b", 2, &catalog);

        let err = sel.validate(&catalog, &Allocations::new()).unwrap_err();
        assert_eq!(
            err.message,
            "Insufficient stock for Iron. Available: 1, Requested: 2"
        );
        assert!(!err.message.contains("Kettle"));
    }

    #[test]
    fn test_quantity_checked_before_stock() {
        let catalog = ProductCatalog::new(vec![product("a", "Kettle", 0)]);
        for bad in [0, -3] {
            let err = validate_submission(&[line("a", "Kettle", bad)], &catalog, &Allocations::new())
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidQuantity);
            assert_eq!(err.message, "Quantity must be at least 1");
        }

        // quantity problem wins even when the product is unknown
        let err = validate_submission(&[line("nope", "Ghost", 0)], &catalog, &Allocations::new())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
    }

    #[test]
    fn test_unknown_product_is_named() {
        let catalog = ProductCatalog::default();
        let err = validate_submission(&[line("p404", "Toaster", 1)], &catalog, &Allocations::new())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product not found: Toaster");
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert_eq!(parse_quantity("2.0").unwrap(), 2);

        for bad in ["0", "-1", "abc", "", "1.5", "NaN", "inf", "-inf"] {
            let err = parse_quantity(bad).unwrap_err();
            assert_eq!(err.message, "Quantity must be at least 1", "input {:?}", bad);
        }
    }

    #[test]
    fn test_from_existing_keeps_unknown_products() {
        let catalog = ProductCatalog::new(vec![product("a", "Kettle", 3)]);
        let sel = LineSelection::from_existing(
            &[ProductInfo::new("gone", 2), ProductInfo::new("a", 1)],
            &catalog,
        );
        assert_eq!(sel.legacy().product.as_deref(), Some("gone"));
        assert_eq!(sel.lines()[1].name, "Kettle");
        assert_eq!(sel.total_units(), 3);
        assert_eq!(
            sel.to_product_info(),
            vec![ProductInfo::new("gone", 2), ProductInfo::new("a", 1)]
        );
    }
}
