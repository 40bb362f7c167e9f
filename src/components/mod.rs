pub mod announcement_card;
pub mod create_form;

pub use announcement_card::AnnouncementCard;
pub use create_form::CreateAnnouncementForm;
