use actix_web::{web::Data, HttpResponse};

use crate::state::State;

pub async fn dashboard(state: Data<State>) -> HttpResponse {
    let dashboard = state.dashboard.read().await;
    HttpResponse::Ok().json(&*dashboard)
}
