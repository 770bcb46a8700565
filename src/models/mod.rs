// Module exports for models
// Plain data for the page: timer state, gallery images, registration and static content

pub mod carousel;
pub mod countdown;
pub mod festival;
pub mod registration;
