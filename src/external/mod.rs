pub mod sms;

pub use sms::SmsService;
