pub mod invite_request;
pub mod invite_response;
pub mod tenant_dto;
pub mod tenants;
pub mod upgrade_response;
