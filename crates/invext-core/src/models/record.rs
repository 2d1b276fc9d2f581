//! The fixed-schema invoice record emitted for every processed document.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder for text fields no rule matched.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for monetary fields no rule matched.
pub const ZERO_AMOUNT: &str = "0.00";

/// Output date layout produced by the date standardizer.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// One column of the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FileName,
    InvoiceSource,
    OrderNumber,
    InvoiceNumber,
    OrderDate,
    InvoiceDate,
    ProductName,
    HsnCode,
    Quantity,
    UnitPrice,
    NetAmount,
    TaxRate,
    TaxAmount,
    TotalAmount,
    ShippingCharges,
    GrandTotal,
    PaymentMode,
    SellerName,
    SellerGst,
    BillingAddress,
    ShippingAddress,
}

impl Field {
    /// Number of columns in a record.
    pub const COUNT: usize = 21;

    /// All fields in output column order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::FileName,
        Field::InvoiceSource,
        Field::OrderNumber,
        Field::InvoiceNumber,
        Field::OrderDate,
        Field::InvoiceDate,
        Field::ProductName,
        Field::HsnCode,
        Field::Quantity,
        Field::UnitPrice,
        Field::NetAmount,
        Field::TaxRate,
        Field::TaxAmount,
        Field::TotalAmount,
        Field::ShippingCharges,
        Field::GrandTotal,
        Field::PaymentMode,
        Field::SellerName,
        Field::SellerGst,
        Field::BillingAddress,
        Field::ShippingAddress,
    ];

    /// Column header as written to the output table.
    pub fn column(self) -> &'static str {
        match self {
            Field::FileName => "File Name",
            Field::InvoiceSource => "Invoice Source",
            Field::OrderNumber => "Order Number",
            Field::InvoiceNumber => "Invoice Number",
            Field::OrderDate => "Order Date",
            Field::InvoiceDate => "Invoice Date",
            Field::ProductName => "Product Name",
            Field::HsnCode => "HSN Code",
            Field::Quantity => "Quantity",
            Field::UnitPrice => "Unit Price",
            Field::NetAmount => "Net Amount",
            Field::TaxRate => "Tax Rate",
            Field::TaxAmount => "Tax Amount",
            Field::TotalAmount => "Total Amount",
            Field::ShippingCharges => "Shipping Charges",
            Field::GrandTotal => "Grand Total",
            Field::PaymentMode => "Payment Mode",
            Field::SellerName => "Seller Name",
            Field::SellerGst => "Seller GST",
            Field::BillingAddress => "Billing Address",
            Field::ShippingAddress => "Shipping Address",
        }
    }

    /// Value a field keeps when no rule matches it.
    ///
    /// `FileName` and `InvoiceSource` are always set by the assembler, so
    /// their default is never observed in an emitted record.
    pub fn default_value(self) -> &'static str {
        match self {
            Field::FileName | Field::InvoiceSource => "",
            Field::Quantity => "1",
            Field::UnitPrice
            | Field::NetAmount
            | Field::TaxAmount
            | Field::TotalAmount
            | Field::ShippingCharges
            | Field::GrandTotal => ZERO_AMOUNT,
            _ => NOT_AVAILABLE,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A fully populated invoice row.
///
/// Every column exists from construction onward; rules can only replace a
/// default with a matched value while the assembler owns the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    #[serde(rename = "File Name")]
    file_name: String,
    #[serde(rename = "Invoice Source")]
    invoice_source: String,
    #[serde(rename = "Order Number")]
    order_number: String,
    #[serde(rename = "Invoice Number")]
    invoice_number: String,
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Invoice Date")]
    invoice_date: String,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(rename = "HSN Code")]
    hsn_code: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "Unit Price")]
    unit_price: String,
    #[serde(rename = "Net Amount")]
    net_amount: String,
    #[serde(rename = "Tax Rate")]
    tax_rate: String,
    #[serde(rename = "Tax Amount")]
    tax_amount: String,
    #[serde(rename = "Total Amount")]
    total_amount: String,
    #[serde(rename = "Shipping Charges")]
    shipping_charges: String,
    #[serde(rename = "Grand Total")]
    grand_total: String,
    #[serde(rename = "Payment Mode")]
    payment_mode: String,
    #[serde(rename = "Seller Name")]
    seller_name: String,
    #[serde(rename = "Seller GST")]
    seller_gst: String,
    #[serde(rename = "Billing Address")]
    billing_address: String,
    #[serde(rename = "Shipping Address")]
    shipping_address: String,
}

impl InvoiceRecord {
    /// Create a record with every field at its default.
    pub fn new(file_name: impl Into<String>, invoice_source: impl Into<String>) -> Self {
        let default = |field: Field| field.default_value().to_string();
        Self {
            file_name: file_name.into(),
            invoice_source: invoice_source.into(),
            order_number: default(Field::OrderNumber),
            invoice_number: default(Field::InvoiceNumber),
            order_date: default(Field::OrderDate),
            invoice_date: default(Field::InvoiceDate),
            product_name: default(Field::ProductName),
            hsn_code: default(Field::HsnCode),
            quantity: default(Field::Quantity),
            unit_price: default(Field::UnitPrice),
            net_amount: default(Field::NetAmount),
            tax_rate: default(Field::TaxRate),
            tax_amount: default(Field::TaxAmount),
            total_amount: default(Field::TotalAmount),
            shipping_charges: default(Field::ShippingCharges),
            grand_total: default(Field::GrandTotal),
            payment_mode: default(Field::PaymentMode),
            seller_name: default(Field::SellerName),
            seller_gst: default(Field::SellerGst),
            billing_address: default(Field::BillingAddress),
            shipping_address: default(Field::ShippingAddress),
        }
    }

    /// Read one column.
    pub fn get(&self, field: Field) -> &str {
        self.cells()[field.index()]
    }

    /// All values in output column order.
    pub fn cells(&self) -> [&str; Field::COUNT] {
        [
            self.file_name.as_str(),
            self.invoice_source.as_str(),
            self.order_number.as_str(),
            self.invoice_number.as_str(),
            self.order_date.as_str(),
            self.invoice_date.as_str(),
            self.product_name.as_str(),
            self.hsn_code.as_str(),
            self.quantity.as_str(),
            self.unit_price.as_str(),
            self.net_amount.as_str(),
            self.tax_rate.as_str(),
            self.tax_amount.as_str(),
            self.total_amount.as_str(),
            self.shipping_charges.as_str(),
            self.grand_total.as_str(),
            self.payment_mode.as_str(),
            self.seller_name.as_str(),
            self.seller_gst.as_str(),
            self.billing_address.as_str(),
            self.shipping_address.as_str(),
        ]
    }

    /// Pairs of (column header, value) in output order.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::ALL
            .into_iter()
            .zip(self.cells())
            .map(|(field, value)| (field.column(), value))
    }

    /// Whether a field still holds its default.
    pub fn is_default(&self, field: Field) -> bool {
        self.get(field) == field.default_value()
    }

    pub(crate) fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FileName => &mut self.file_name,
            Field::InvoiceSource => &mut self.invoice_source,
            Field::OrderNumber => &mut self.order_number,
            Field::InvoiceNumber => &mut self.invoice_number,
            Field::OrderDate => &mut self.order_date,
            Field::InvoiceDate => &mut self.invoice_date,
            Field::ProductName => &mut self.product_name,
            Field::HsnCode => &mut self.hsn_code,
            Field::Quantity => &mut self.quantity,
            Field::UnitPrice => &mut self.unit_price,
            Field::NetAmount => &mut self.net_amount,
            Field::TaxRate => &mut self.tax_rate,
            Field::TaxAmount => &mut self.tax_amount,
            Field::TotalAmount => &mut self.total_amount,
            Field::ShippingCharges => &mut self.shipping_charges,
            Field::GrandTotal => &mut self.grand_total,
            Field::PaymentMode => &mut self.payment_mode,
            Field::SellerName => &mut self.seller_name,
            Field::SellerGst => &mut self.seller_gst,
            Field::BillingAddress => &mut self.billing_address,
            Field::ShippingAddress => &mut self.shipping_address,
        };
        *slot = value;
    }

    /// Check the record for inconsistencies and return any issues found.
    ///
    /// Purely advisory: a record with issues is still a valid output row.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.is_default(Field::OrderNumber) {
            issues.push("Missing order number".to_string());
        }

        for field in [Field::OrderDate, Field::InvoiceDate] {
            let value = self.get(field);
            if value != NOT_AVAILABLE && NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
                issues.push(format!("{} is not a calendar date: {}", field.column(), value));
            }
        }

        let amount = |field: Field| Decimal::from_str(self.get(field)).ok();

        if let (Some(net), Some(tax), Some(total)) = (
            amount(Field::NetAmount),
            amount(Field::TaxAmount),
            amount(Field::TotalAmount),
        ) {
            if !total.is_zero() && (net + tax - total).abs() > Decimal::new(1, 2) {
                issues.push(format!(
                    "Net amount ({}) plus tax ({}) differs from total ({})",
                    net, tax, total
                ));
            }
        }

        if amount(Field::GrandTotal).is_none_or(|total| total.is_zero()) {
            issues.push("Grand total is zero".to_string());
        }

        issues
    }
}
