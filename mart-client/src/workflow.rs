//! Submit flows for forms that allocate stock
//!
//! Customers, parcels and bills all go through the same steps: fetch the live
//! product list, check every line against it (crediting what the edited
//! record already holds), mirror the primary line into the legacy fields,
//! then create or update. A failed check publishes an error notice and
//! nothing is written.

use crate::client::MartClient;
use crate::error::{ClientError, ClientResult};
use crate::notify::Notifier;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    Allocations, Bill, BillCustomer, BillInput, BillItem, Customer, CustomerInput, Parcel,
    ParcelInput, PriceTier, ProductInfo,
};
use shared::selection::{LineSelection, ProductCatalog};
use std::collections::HashMap;

/// Bill fields other than the product lines
#[derive(Debug, Clone)]
pub struct BillDraft {
    pub customer: BillCustomer,
    /// Tier used to price lines that are new to the bill
    pub price_tier: PriceTier,
    pub discount: Decimal,
    pub amount_paid: Decimal,
    pub notes: Option<String>,
}

/// Shared submit path of the order-like forms
pub struct OrderForm<'a> {
    client: &'a MartClient,
    notifier: &'a Notifier,
}

impl<'a> OrderForm<'a> {
    pub fn new(client: &'a MartClient, notifier: &'a Notifier) -> Self {
        Self { client, notifier }
    }

    async fn checked_lines(
        &self,
        selection: &LineSelection,
        previous: &Allocations,
    ) -> ClientResult<(ProductCatalog, Vec<ProductInfo>)> {
        let catalog = self.client.products().catalog().await?;
        match selection.validate(&catalog, previous) {
            Ok(lines) => Ok((catalog, lines)),
            Err(e) => {
                tracing::info!(code = %e.code, message = %e.message, "submission blocked");
                Err(ClientError::App(e))
            }
        }
    }

    pub async fn submit_customer(
        &self,
        mut draft: CustomerInput,
        selection: &LineSelection,
        editing: Option<&Customer>,
    ) -> ClientResult<Customer> {
        let done = if editing.is_some() {
            "Customer updated successfully"
        } else {
            "Customer added successfully"
        };

        let action = async move {
            if draft.name.trim().is_empty() {
                return Err(AppError::required("Name").into());
            }
            let previous = editing.map(Customer::allocations).unwrap_or_default();
            let (_, lines) = self.checked_lines(selection, &previous).await?;

            draft.products_info = lines;
            draft.product = selection.legacy().product.clone();
            draft.product_id = selection.legacy().product_id.clone();

            let customers = self.client.customers();
            match editing {
                Some(existing) => customers.update(&existing.id, &draft).await,
                None => customers.create(&draft).await,
            }
        };
        self.notifier.guard(action, done).await
    }

    pub async fn submit_parcel(
        &self,
        mut draft: ParcelInput,
        selection: &LineSelection,
        editing: Option<&Parcel>,
    ) -> ClientResult<Parcel> {
        let done = if editing.is_some() {
            "Parcel updated successfully"
        } else {
            "Parcel added successfully"
        };

        let action = async move {
            if draft.customer_name.trim().is_empty() {
                return Err(AppError::required("Customer name").into());
            }
            if draft.cod_amount < Decimal::ZERO {
                return Err(AppError::validation("COD amount cannot be negative").into());
            }
            let previous = editing.map(Parcel::allocations).unwrap_or_default();
            let (_, lines) = self.checked_lines(selection, &previous).await?;

            draft.products_info = lines;
            draft.product = selection.legacy().product.clone();
            draft.product_id = selection.legacy().product_id.clone();

            let parcels = self.client.parcels();
            match editing {
                Some(existing) => parcels.update(&existing.id, &draft).await,
                None => parcels.create(&draft).await,
            }
        };
        self.notifier.guard(action, done).await
    }

    /// Lines already on the bill keep the price they were sold at
    pub async fn submit_bill(
        &self,
        draft: BillDraft,
        selection: &LineSelection,
        editing: Option<&Bill>,
    ) -> ClientResult<Bill> {
        let done = if editing.is_some() {
            "Bill updated successfully"
        } else {
            "Bill created successfully"
        };

        let action = async move {
            if draft.customer.name.trim().is_empty() {
                return Err(AppError::required("Customer name").into());
            }
            if selection.is_empty() {
                return Err(AppError::new(ErrorCode::BillEmpty).into());
            }
            let previous = editing.map(Bill::allocations).unwrap_or_default();
            let (catalog, lines) = self.checked_lines(selection, &previous).await?;

            let items = price_lines(&lines, &catalog, draft.price_tier, editing);
            let input = BillInput::new(
                draft.customer,
                items,
                draft.discount,
                draft.amount_paid,
                draft.notes,
            );

            let bills = self.client.bills();
            match editing {
                Some(existing) => bills.update(&existing.id, &input).await,
                None => bills.create(&input).await,
            }
        };
        self.notifier.guard(action, done).await
    }
}

/// Turn validated lines into bill items
fn price_lines(
    lines: &[ProductInfo],
    catalog: &ProductCatalog,
    tier: PriceTier,
    editing: Option<&Bill>,
) -> Vec<BillItem> {
    let sold: HashMap<&str, &BillItem> = editing
        .map(|bill| {
            bill.items
                .iter()
                .map(|item| (item.product_id.as_str(), item))
                .collect()
        })
        .unwrap_or_default();

    lines
        .iter()
        .filter_map(|line| {
            if let Some(item) = sold.get(line.product_id.as_str()) {
                return Some(BillItem {
                    quantity: line.quantity,
                    ..(*item).clone()
                });
            }
            let product = catalog.get(&line.product_id)?;
            Some(BillItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                model: product.model.clone(),
                selected_price: product.price(tier),
                price_tier: Some(tier),
                quantity: line.quantity,
            })
        })
        .collect()
}
