//! Submit-time quantity and stock checks

use super::{LineItem, ProductCatalog};
use crate::error::{AppError, AppResult};
use crate::models::{Allocations, ProductInfo};

/// Parse a quantity typed into a form field
///
/// Accepts whole numbers >= 1 (surrounding whitespace allowed, `"3.0"` is 3).
/// Anything else, including `NaN`, infinities and fractions, is rejected with
/// `Quantity must be at least 1`.
pub fn parse_quantity(raw: &str) -> AppResult<i64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_quantity())?;
    if !value.is_finite() || value < 1.0 || value.fract() != 0.0 || value > i64::MAX as f64 {
        return Err(AppError::invalid_quantity());
    }
    Ok(value as i64)
}

/// Check every line against live stock before anything is sent
///
/// For each line, in order: the quantity must be >= 1, the product must exist
/// in `catalog`, and the delta `requested - previous` must fit in the
/// available stock when positive. `previous` holds what the edited record
/// already consumed (empty for new records). The first failing line aborts
/// the whole submission.
pub fn validate_submission(
    lines: &[LineItem],
    catalog: &ProductCatalog,
    previous: &Allocations,
) -> AppResult<Vec<ProductInfo>> {
    let mut accepted = Vec::with_capacity(lines.len());

    for line in lines {
        if line.quantity < 1 {
            return Err(AppError::invalid_quantity().with_detail("product", line.name.clone()));
        }

        let product = catalog.get(&line.product_id).ok_or_else(|| {
            let name = if line.name.is_empty() {
                line.product_id.clone()
            } else {
                line.name.clone()
            };
            AppError::product_not_found(name)
        })?;

        let delta = line.quantity - previous.previous(&line.product_id);
        if delta > 0 && delta > product.stock {
            tracing::debug!(
                product_id = %line.product_id,
                available = product.stock,
                delta,
                "stock check rejected line"
            );
            return Err(AppError::insufficient_stock(
                product.name.clone(),
                product.stock,
                delta,
            ));
        }

        accepted.push(ProductInfo::new(line.product_id.clone(), line.quantity));
    }

    Ok(accepted)
}
