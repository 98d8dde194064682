pub mod auth;
pub mod login_request;
pub mod session_info_response;
pub mod session_response;
pub mod signup_request;
pub mod user_dto;
