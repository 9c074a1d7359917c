//! Server-rendered survey form

mod render;

use axum::{
    extract::{rejection::FormRejection, Form, State},
    response::Html,
    routing::get,
    Router,
};
use tracing::{debug, warn};

use super::state::AppState;
use crate::domain::SurveyInput;

pub use render::{render_page, Outcome};

/// Create the form router
pub fn create_ui_router() -> Router<AppState> {
    Router::new().route("/", get(show_form).post(submit_form))
}

/// GET / - blank form with default answers
pub async fn show_form() -> Html<String> {
    Html(render_page(&SurveyInput::default(), None))
}

/// POST / - classify the submitted answers and render the result under the form
pub async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<SurveyInput>, FormRejection>,
) -> Html<String> {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Unreadable form submission");
            let message = format!("Invalid form data: {}", rejection.body_text());
            return Html(render_page(
                &SurveyInput::default(),
                Some(Outcome::Failed(&message)),
            ));
        }
    };

    debug!(?input, "Form submitted");

    match state.prediction_service.predict(&input).await {
        Ok(prediction) => Html(render_page(
            &prediction.input,
            Some(Outcome::Predicted(&prediction)),
        )),
        Err(e) => {
            let message = e.to_string();
            Html(render_page(&input, Some(Outcome::Failed(&message))))
        }
    }
}
