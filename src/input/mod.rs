pub mod form;
pub mod validation;

pub use form::{default_loan_amount, EducationLevel, FormInput};
pub use validation::validate_form;
