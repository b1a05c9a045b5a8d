pub mod constants;
pub mod templates;
pub mod test_helpers;
