pub(crate) mod analyze;
pub(crate) mod dashboard;
pub(crate) mod faq;
pub(crate) mod serve;
