//! Input validation utilities

/// Validate the product name
pub fn validate_name(name: Option<&str>) -> Result<(), String> {
    let name = name.unwrap_or("");

    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }

    Ok(())
}

/// Validate the product price
///
/// A price of zero is legal; NaN, infinities, and negative values are not.
pub fn validate_price(price: Option<f64>) -> Result<(), String> {
    let price = match price {
        Some(price) => price,
        None => return Err("Price is required".to_string()),
    };

    if !price.is_finite() {
        return Err("Price must be a finite number".to_string());
    }

    if price < 0.0 {
        return Err("Price must not be negative".to_string());
    }

    Ok(())
}
