//! Messages and markup class names used by the contact form

/// Shown when the name field is blank
pub const NAME_REQUIRED_MESSAGE: &str = "Please enter your name";

/// Shown when the email field is blank
pub const EMAIL_REQUIRED_MESSAGE: &str = "Please enter your email";

/// Shown when the email field does not look like `local@domain.tld`
pub const EMAIL_INVALID_MESSAGE: &str = "Please enter a valid email";

/// Shown when the message field is blank
pub const MESSAGE_REQUIRED_MESSAGE: &str = "Please enter your message";

/// Static confirmation that replaces the form after a successful submit
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for your message! We'll get back to you soon.";

/// Class of the form element itself
pub const FORM_CLASS: &str = "contact-form";

/// Class of the wrapper around one input and its annotation
pub const FORM_GROUP_CLASS: &str = "form-group";

/// Class added to an input that failed validation
pub const INVALID_CLASS: &str = "error";

/// Class of the annotation element placed below an invalid input
pub const ERROR_MESSAGE_CLASS: &str = "error-message";

/// Class of the confirmation element
pub const SUCCESS_MESSAGE_CLASS: &str = "success-message";
