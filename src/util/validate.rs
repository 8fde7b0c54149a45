//! Declarative field validation for login, registration, and readings.
//!
//! DESIGN
//! ======
//! Every rule is a synchronous function from raw input to a fixed message,
//! so forms can run the whole set against current values at any point.
//! The reading rules mirror the server-side validators, message for
//! message, so users see rejections before a round trip.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

const BP_FORMAT: &str = "Blood pressure must be in format \"systolic/diastolic\" (e.g., 120/80)";

/// Validate an email address. Returns the error message, or `None`.
pub fn validate_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Email is required");
    }
    if !is_valid_email(email) {
        return Some("Invalid email address");
    }
    None
}

/// Syntactic email check: one `@`, a non-empty local part, and a dotted
/// domain. Deliberately shallow; the server has the final say.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Validate a password: required, minimum six characters.
pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some("Password is required");
    }
    if password.chars().count() < 6 {
        return Some("Password must be at least 6 characters");
    }
    None
}

/// Parse and validate a weight reading in kilograms.
///
/// # Errors
///
/// Returns the message to show next to the weight input.
pub fn validate_weight(input: &str) -> Result<f64, &'static str> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(round2(value)),
        _ => Err("Weight must be a positive number"),
    }
}

/// Parse and validate a blood-glucose reading in mg/dL.
///
/// # Errors
///
/// Returns the message to show next to the glucose input.
pub fn validate_glucose(input: &str) -> Result<f64, &'static str> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(round2(value)),
        _ => Err("Glucose level must be a positive number"),
    }
}

/// Validate a blood-pressure reading, normalizing to `systolic/diastolic`.
///
/// # Errors
///
/// Returns the message to show next to the blood-pressure input.
pub fn validate_bp(input: &str) -> Result<String, &'static str> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let Some((systolic_raw, diastolic_raw)) = cleaned.split_once('/') else {
        return Err(BP_FORMAT);
    };
    if !is_bp_component(systolic_raw) || !is_bp_component(diastolic_raw) {
        return Err(BP_FORMAT);
    }
    let systolic: u32 = systolic_raw.parse().map_err(|_| BP_FORMAT)?;
    let diastolic: u32 = diastolic_raw.parse().map_err(|_| BP_FORMAT)?;
    if !(70..=250).contains(&systolic) {
        return Err("Systolic pressure must be between 70 and 250");
    }
    if !(40..=150).contains(&diastolic) {
        return Err("Diastolic pressure must be between 40 and 150");
    }
    Ok(cleaned)
}

fn is_bp_component(part: &str) -> bool {
    (2..=3).contains(&part.len()) && part.chars().all(|c| c.is_ascii_digit())
}

/// Round a reading to two decimal places, as the server does.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
