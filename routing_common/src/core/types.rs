/// **A single bank, as read from one row of the routing table**
///
/// The routing number is kept as text; it must never be parsed
/// into an integer, because that would strip its leading zeros.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BankRecord {
    pub routing_number: String,
    pub bank_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

impl BankRecord {
    pub fn new(
        routing_number: &str,
        bank_name: &str,
        address: &str,
        city: &str,
        state: &str,
    ) -> Self {
        BankRecord {
            routing_number: routing_number.to_string(),
            bank_name: bank_name.to_string(),
            address: address.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        }
    }

    /// **The bank's address as shown to users**
    ///
    /// Format: `"{address}, {city}, {state}"`.
    pub fn display_address(&self) -> String {
        format!("{}, {}, {}", self.address, self.city, self.state)
    }
}

/// **The outcome of a successful pass through the validation pipeline**
///
/// A routing number that is well-formed but unknown is not an error,
/// so it has its own variant here.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// The routing number exists in the table.
    Valid {
        bank_name: String,
        display_address: String,
    },

    /// The routing number is well-formed, but no bank has it.
    Unknown,
}
