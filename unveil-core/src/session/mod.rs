pub mod page_session;
pub mod script;
