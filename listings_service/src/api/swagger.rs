use utoipa::OpenApi;

use model::inquiry::{Inquiry, InquiryRequest};
use model::payment::Payment;
use model::property::{
    CreatePropertyRequest, Property, PropertyInformation, PropertyLocation, PropertyStatus,
    PropertyType, PropertyWithDetails, UpdatePropertyRequest,
};
use model::response::GenericResponse;
use model::review::{CreateReviewRequest, Review};
use model::tour::{BookTourRequest, Tour};
use model::user::{LoginRequest, PublicUser, RegisterUserRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::auth::login::login_user,
        crate::api::auth::login::login_admin,
        crate::api::user::register::register_user,
        crate::api::property::list::get_properties,
        crate::api::property::get::get_property,
        crate::api::property::update::update_property,
        crate::api::property::delete::delete_property,
        crate::api::tour::book::book_tour,
        crate::api::tour::get::get_tour,
        crate::api::inquiry::create::make_inquiry,
    ),
    components(schemas(
        GenericResponse,
        Property,
        PropertyLocation,
        PropertyInformation,
        PropertyWithDetails,
        PropertyStatus,
        PropertyType,
        CreatePropertyRequest,
        UpdatePropertyRequest,
        Tour,
        BookTourRequest,
        Payment,
        Inquiry,
        InquiryRequest,
        Review,
        CreateReviewRequest,
        PublicUser,
        LoginRequest,
        RegisterUserRequest,
    )),
    tags(
        (name = "Auth", description = "Login and session endpoints"),
        (name = "User", description = "Account management"),
        (name = "Property", description = "Listings and their details"),
        (name = "Tour", description = "Tour booking and review"),
        (name = "Inquiry", description = "Customer inquiries"),
    )
)]
pub struct ApiDoc;
