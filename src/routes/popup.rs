use actix_http::header;
use actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use serde::Deserialize;

use crate::{
    errors::ServiceError,
    popup::{self, lock, StatePoisoned},
    state::State,
};

#[derive(Deserialize)]
pub struct InputRequest {
    pub address: String,
}

impl From<StatePoisoned> for ServiceError {
    fn from(_: StatePoisoned) -> Self {
        ServiceError::StateLockError
    }
}

pub async fn popup_view(state: Data<State>) -> Result<HttpResponse, ServiceError> {
    let popup = lock(&state.popup)?;

    Ok(HttpResponse::Ok().json(popup.view()))
}

/// The raw text is stored as typed; validation happens when an action runs.
pub async fn popup_input(
    request: Json<InputRequest>,
    state: Data<State>,
) -> Result<HttpResponse, ServiceError> {
    let mut popup = lock(&state.popup)?;

    popup.set_input(request.0.address);

    Ok(HttpResponse::Ok().json(popup.view()))
}

pub async fn popup_check(state: Data<State>) -> Result<HttpResponse, ServiceError> {
    let view = popup::check(&state.popup, &state.client).await?;
    Ok(HttpResponse::Ok().json(view))
}

pub async fn popup_report(state: Data<State>) -> Result<HttpResponse, ServiceError> {
    let view = popup::report(&state.popup, &state.client).await?;
    Ok(HttpResponse::Ok().json(view))
}

pub async fn open_dashboard(state: Data<State>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, state.dashboard_url.as_str()))
        .finish()
}
