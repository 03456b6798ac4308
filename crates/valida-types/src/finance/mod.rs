//! Banking and payment primitives.

mod bank_account;
mod bban;
mod credit_card;
mod iban;
mod money;
mod percentage;
mod routing;
mod sort_code;
mod swift;

pub use bank_account::BankAccountNumber;
pub use bban::BbanNumber;
pub use credit_card::{CreditCardExpiration, CreditCardNumber, CreditCardSecurityNumber};
pub use iban::IbanNumber;
pub use money::Money;
pub use percentage::Percentage;
pub use routing::RoutingNumber;
pub use sort_code::SortCode;
pub use swift::SwiftCode;
