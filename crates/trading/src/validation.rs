use rust_decimal::{Decimal, RoundingStrategy};
use tokens::units;
use tracing::debug;

/// Validation result with errors and warnings
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks run before a sale is offered for confirmation
pub struct SaleValidator {
    price_decimals: u32,
}

impl SaleValidator {
    pub fn new(price_decimals: u32) -> Self {
        Self { price_decimals }
    }

    /// Validate the quantity and asking price entered on the sell screen
    pub fn validate(&self, quantity: u32, available: u32, price_text: &str) -> ValidationResult {
        let mut result = ValidationResult::new();

        if quantity == 0 {
            result.add_error("Quantity must be at least one ticket".to_string());
        } else if quantity > available {
            result.add_error(format!(
                "Quantity exceeds selected tickets: {} > {}",
                quantity, available
            ));
        }

        if price_text.trim().is_empty() {
            result.add_error("Price is required".to_string());
        } else {
            match units::parse_amount(price_text) {
                Ok(price) if price > Decimal::ZERO => {
                    let kept = price
                        .round_dp_with_strategy(self.price_decimals, RoundingStrategy::ToZero);
                    if kept.is_zero() {
                        result.add_error(format!(
                            "Price {} is below the smallest listable amount",
                            price
                        ));
                    } else if kept != price {
                        result.add_warning(format!(
                            "Price {} will be listed as {}",
                            price,
                            kept.normalize()
                        ));
                    }
                }
                Ok(price) => {
                    result.add_error(format!("Price must be positive, got {}", price));
                }
                Err(_) => {
                    result.add_error(format!("Invalid price format: {}", price_text.trim()));
                }
            }
        }

        debug!(
            "Sale validation: quantity={}, price={}, valid={}, errors={}, warnings={}",
            quantity,
            price_text,
            result.valid,
            result.errors.len(),
            result.warnings.len()
        );

        result
    }
}

impl Default for SaleValidator {
    fn default() -> Self {
        Self::new(3)
    }
}
