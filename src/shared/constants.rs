/// Training sessions offered on the registration form
pub const TRAINING_SESSIONS: [&str; 3] = [
    "7.08, Bachata",
    "9.08, Strength training",
    "13.08, Zumba",
];

// =============================================================================
// VALIDATION MESSAGES
// =============================================================================

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PHONE_REQUIRED: &str = "Phone number is required";

pub const NAME_MISSING: &str = "Name field is missing";
pub const EMAIL_MISSING: &str = "Email field is missing";
pub const PHONE_MISSING: &str = "Phone field is missing";
