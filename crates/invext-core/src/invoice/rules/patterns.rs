//! Common regex patterns for Amazon and Flipkart invoice extraction.
//!
//! All patterns run against whitespace-normalized text. Address patterns
//! consume their stop marker instead of looking ahead; only the capture group
//! is ever read, so the captured span is the same.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Normalization
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Date layouts, tried in this order
    pub static ref DATE_DOTTED: Regex = Regex::new(r"(\d{2})\.(\d{2})\.(\d{4})").unwrap();
    pub static ref DATE_SLASHED: Regex = Regex::new(r"(\d{2})/(\d{2})/(\d{4})").unwrap();
    pub static ref DATE_DASHED: Regex = Regex::new(r"(\d{2})-(\d{2})-(\d{4})").unwrap();
    pub static ref DATE_ISO: Regex = Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap();

    // Labeled dates (both vendors)
    pub static ref ORDER_DATE: Regex = Regex::new(
        r"(?i)Order\s*Date[:\s]*([0-9./\-]+)"
    ).unwrap();

    pub static ref INVOICE_DATE: Regex = Regex::new(
        r"(?i)Invoice\s*Date[:\s]*([0-9./\-]+)"
    ).unwrap();

    // HSN code (both vendors)
    pub static ref HSN_CODE: Regex = Regex::new(r"(?i)HSN[:\s]*([0-9]+)").unwrap();

    // Amazon order and invoice identifiers
    pub static ref AMAZON_ORDER_NUMBER: Regex = Regex::new(
        r"(?i)Order\s*Number[:\s]*([0-9\-]+)"
    ).unwrap();

    pub static ref AMAZON_ORDER_ID: Regex = Regex::new(
        r"(?i)Order\s*ID[:\s]*([0-9\-]+)"
    ).unwrap();

    pub static ref AMAZON_ORDER_LABEL: Regex = Regex::new(
        r"(?i)Amazon\s*Order[:\s]*([0-9\-]+)"
    ).unwrap();

    pub static ref AMAZON_INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)Invoice\s*Number[:\s]*([A-Z0-9\-]+)"
    ).unwrap();

    // Amazon line-item table row
    pub static ref ITEM_ROW_START: Regex = Regex::new(r"^\s*1\s+").unwrap();

    pub static ref ITEM_SECTION_BREAK: Regex = Regex::new(
        r"^(HSN|₹|\d+%|IGST|Shipping)"
    ).unwrap();

    pub static ref ITEM_PRICE_ARTIFACT: Regex = Regex::new(
        r"₹[\d,.]+ \d+ ₹[\d,.]+.*$"
    ).unwrap();

    // Amazon "<₹unit> <qty> <₹net>" columns
    pub static ref AMAZON_UNIT_PRICE: Regex = Regex::new(
        r"₹([\d,]+\.?\d*)\s+1\s+₹"
    ).unwrap();

    pub static ref AMAZON_QUANTITY: Regex = Regex::new(
        r"₹[\d,]+\.?\d*\s+(\d+)\s+₹"
    ).unwrap();

    // (quantity, net amount)
    pub static ref AMAZON_ITEM_ROW: Regex = Regex::new(
        r"₹[\d,]+\.?\d*\s+(\d+)\s+₹([\d,]+\.?\d*)"
    ).unwrap();

    // Amazon tax columns (IGST only)
    pub static ref AMAZON_TAX_RATE: Regex = Regex::new(r"(\d+)%\s+IGST").unwrap();

    pub static ref AMAZON_TAX_AMOUNT: Regex = Regex::new(
        r"IGST\s+₹([\d,]+\.?\d*)"
    ).unwrap();

    // (tax amount, line total)
    pub static ref AMAZON_TAX_COLUMNS: Regex = Regex::new(
        r"IGST\s+₹([\d,]+\.?\d*)\s+₹([\d,]+\.?\d*)"
    ).unwrap();

    // Amazon totals
    pub static ref AMAZON_SHIPPING_CHARGES: Regex = Regex::new(
        r"(?i)Shipping\s+Charges\s+₹([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref AMAZON_TOTAL_LABEL: Regex = Regex::new(
        r"(?i)TOTAL[:\s]*₹([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref AMAZON_INVOICE_VALUE: Regex = Regex::new(
        r"(?i)Invoice\s*Value[:\s]*₹?([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref AMAZON_GRAND_TOTAL: Regex = Regex::new(
        r"(?i)Grand\s*Total[:\s]*₹([\d,]+\.?\d*)"
    ).unwrap();

    // Amazon payment and seller
    pub static ref AMAZON_PAYMENT_MODE: Regex = Regex::new(
        r"(?i)Mode\s*of\s*Payment[:\s]*([^\n]+)"
    ).unwrap();

    pub static ref AMAZON_SELLER: Regex = Regex::new(
        r"(?i)Sold\s*By[:\s]*([^\n*]+)"
    ).unwrap();

    pub static ref SELLER_FOOTNOTE: Regex = Regex::new(r"\*.*$").unwrap();

    pub static ref AMAZON_GST: Regex = Regex::new(
        r"(?i)GST\s*Registration\s*No[:\s]*([A-Z0-9]+)"
    ).unwrap();

    // Amazon addresses
    pub static ref AMAZON_BILLING_ADDRESS: Regex = Regex::new(
        r"(?is)Billing\s*Address[:\s]*([^:]+?)(?:Shipping\s*Address|State/UT|$)"
    ).unwrap();

    pub static ref AMAZON_SHIPPING_ADDRESS: Regex = Regex::new(
        r"(?is)Shipping\s*Address[:\s]*([^:]+?)(?:Place\s*of|State/UT|$)"
    ).unwrap();

    // Flipkart order and invoice identifiers
    pub static ref FLIPKART_ORDER_ID: Regex = Regex::new(
        r"(?i)Order\s*(?:ID|Number)[:\s]*([A-Z0-9]+)"
    ).unwrap();

    pub static ref FLIPKART_INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)Invoice\s*(?:Number|No)[:\s#]*([A-Z0-9]+)"
    ).unwrap();

    pub static ref FLIPKART_INVOICE_HASH: Regex = Regex::new(
        r"(?i)#\s*([A-Z0-9]{10,})"
    ).unwrap();

    // Flipkart product name candidates
    pub static ref FLIPKART_PRODUCT_TABLE: Regex = Regex::new(
        r"(?is)Product\s*Description\s+Qty.*?\n([^\n]+)"
    ).unwrap();

    pub static ref FLIPKART_DESCRIPTION_TABLE: Regex = Regex::new(
        r"(?is)Description\s+Qty.*?\n([^\n]+)"
    ).unwrap();

    pub static ref FLIPKART_PRODUCT_BEFORE_HSN: Regex = Regex::new(
        r"(?is)([A-Za-z].*?)\s+HSN[:\s]*\d+"
    ).unwrap();

    pub static ref FLIPKART_ORDERED_THROUGH: Regex = Regex::new(
        r"(?is)Ordered\s*Through.*?\n([^\n]+)"
    ).unwrap();

    pub static ref PRODUCT_TRAILING_FIGURES: Regex = Regex::new(
        r"\d+\s+[\d,]+\.?\d*.*$"
    ).unwrap();

    pub static ref PRODUCT_LEADING_INDEX: Regex = Regex::new(r"^\d+\s+").unwrap();

    // Flipkart amounts
    pub static ref FLIPKART_QUANTITY: Regex = Regex::new(r"(?i)Qty\s+(\d+)").unwrap();

    pub static ref FLIPKART_GROSS_AMOUNT: Regex = Regex::new(
        r"(?i)Gross\s*Amount[^₹]*₹?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref FLIPKART_TAXABLE_VALUE: Regex = Regex::new(
        r"(?i)Taxable\s*[Vv]alue[^₹]*₹?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref FLIPKART_TAX_RATE: Regex = Regex::new(r"(\d+\.?\d*)%\s*IGST").unwrap();

    pub static ref FLIPKART_TAX_AMOUNT: Regex = Regex::new(
        r"(?i)IGST[^₹]*₹?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref FLIPKART_TOTAL: Regex = Regex::new(
        r"(?i)Total[^₹]*₹?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref FLIPKART_GRAND_TOTAL: Regex = Regex::new(
        r"(?i)Grand\s*Total[^₹]*₹?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref FLIPKART_SHIPPING_CHARGES: Regex = Regex::new(
        r"(?i)Shipping\s*(?:and\s*)?(?:Handling\s*)?Charges[^₹]*₹?\s*([\d,]+\.?\d*)"
    ).unwrap();

    pub static ref FLIPKART_DELIVERY_CHARGES: Regex = Regex::new(
        r"(?i)Delivery\s*Charges[^₹]*₹?\s*([\d,]+\.?\d*)"
    ).unwrap();

    // Flipkart seller
    pub static ref FLIPKART_SELLER: Regex = Regex::new(
        r"(?i)Sold\s*By[:\s]*([^,\n]+)"
    ).unwrap();

    pub static ref FLIPKART_GSTIN: Regex = Regex::new(
        r"(?i)GSTIN[:\s\-]*([A-Z0-9]{15})"
    ).unwrap();

    pub static ref FLIPKART_GST: Regex = Regex::new(
        r"(?i)GST[:\s]*([A-Z0-9]{15})"
    ).unwrap();

    // Flipkart addresses
    pub static ref FLIPKART_BILLING_ADDRESS: Regex = Regex::new(
        r"(?is)Bill\s*To\s*([^:]+?)(?:Ship\s*To|Order\s*ID|$)"
    ).unwrap();

    pub static ref FLIPKART_SHIPPING_ADDRESS: Regex = Regex::new(
        r"(?is)Ship\s*To\s*([^:]+?)(?:Bill\s*To|Order\s*ID|$)"
    ).unwrap();
}
