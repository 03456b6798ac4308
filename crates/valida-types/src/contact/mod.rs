//! Contact details: telephone numbers, postal codes and addresses, email
//! addresses, and websites.

mod address;
mod email;
mod phone;
mod postal_code;
mod website;

pub use address::PostalAddress;
pub use email::EmailAddress;
pub use phone::PhoneNumber;
pub use postal_code::PostalCode;
pub use website::WebsiteUrl;
