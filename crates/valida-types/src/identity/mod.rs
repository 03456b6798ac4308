//! Personal identity primitives.

mod date_of_birth;
mod driving_license;
mod name;
mod passport;
mod ssn;

pub use date_of_birth::DateOfBirth;
pub use driving_license::DrivingLicenseNumber;
pub use name::HumanName;
pub use passport::Passport;
pub use ssn::SocialSecurityNumber;
