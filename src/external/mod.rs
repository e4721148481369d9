pub mod google_maps;
pub mod infobip;
pub mod mailjet;
pub mod razorpay;
