//! # adopt-service
//!
//! Application layer: every business operation is a service whose `execute`
//! returns `ServiceResult<Outcome<T>>`. Expected problems come back as
//! `Either::Failure`; infrastructure faults as `Err(ServiceError)`.

pub mod dto;
pub mod services;

pub use services::{
    format_animal_images, AuthenticateUserService, CreateUserChatMessageParams,
    CreateUserChatMessageService, GetAvailableAnimalsParams, GetAvailableAnimalsService,
    GetUserChatMessagesParams, GetUserChatMessagesService, RegisterUserService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
