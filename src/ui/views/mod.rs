pub mod glossary;
pub mod home;
pub mod lesson;
pub mod quiz;
pub mod term_modal;
