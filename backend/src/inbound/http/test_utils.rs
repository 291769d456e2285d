//! Test helpers for inbound HTTP components.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::inbound::http::accounts::validate_account;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::visits::get_visit_details;

/// Build an app exposing the `/api/v1` handlers over `state`, wrapped in the
/// trace middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(
            web::scope("/api/v1")
                .service(validate_account)
                .service(get_visit_details),
        )
}
