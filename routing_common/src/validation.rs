//! Input validation and lookup of routing numbers
//!
//! The checks run in a fixed order and stop at the first failure:
//! presence, routing number format, account number format,
//! table readiness, and finally the lookup itself.

use crate::core::BankTable;
use crate::errors::ValidationError;
use crate::requests::ValidationRequest;
use crate::types::Verdict;

pub const ROUTING_NUMBER_LEN: usize = 9;
pub const ACCOUNT_NUMBER_MIN_LEN: usize = 8;
pub const ACCOUNT_NUMBER_MAX_LEN: usize = 17;

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// **Format check for a routing number**
///
/// Checks for:
/// - Exactly 9 characters;
/// - Only ASCII digits.
pub fn is_valid_routing_number(routing_number: &str) -> bool {
    routing_number.len() == ROUTING_NUMBER_LEN && all_digits(routing_number)
}

/// **Format check for an account number**
///
/// Checks for:
/// - 8 to 17 characters, inclusive;
/// - Only ASCII digits.
pub fn is_valid_account_number(account_number: &str) -> bool {
    (ACCOUNT_NUMBER_MIN_LEN..=ACCOUNT_NUMBER_MAX_LEN).contains(&account_number.len())
        && all_digits(account_number)
}

/// **Checks the shape of a request, without looking anything up**
///
/// Returns the routing number on success.
///
/// # Errors
/// - Either number is absent or empty, `ValidationError::MissingFields`;
/// - Malformed routing number, `ValidationError::RoutingNumberFormat`;
/// - Malformed account number, `ValidationError::AccountNumberFormat`.
pub fn check_format(request: &ValidationRequest) -> Result<&str, ValidationError> {
    let routing_number = request.routing_number.as_deref().unwrap_or_default();
    let account_number = request.account_number.as_deref().unwrap_or_default();

    if routing_number.is_empty() || account_number.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_routing_number(routing_number) {
        return Err(ValidationError::RoutingNumberFormat);
    }
    if !is_valid_account_number(account_number) {
        return Err(ValidationError::AccountNumberFormat);
    }

    Ok(routing_number)
}

/// **Runs the whole validation pipeline**
///
/// `table` is `None` while the bank table is still loading.
///
/// A well-formed routing number that isn't in the table yields [`Verdict::Unknown`],
/// which is a normal answer, not an error.
///
/// # Errors
/// - Any of the [`check_format`] errors;
/// - The table isn't loaded yet, `ValidationError::NotReady`.
pub fn validate(
    request: &ValidationRequest,
    table: Option<&BankTable>,
) -> Result<Verdict, ValidationError> {
    let routing_number = check_format(request)?;
    let table = table.ok_or(ValidationError::NotReady)?;

    let verdict = match table.lookup(routing_number) {
        Some(bank) => Verdict::Valid {
            bank_name: bank.bank_name.clone(),
            display_address: bank.display_address(),
        },
        None => Verdict::Unknown,
    };

    Ok(verdict)
}
