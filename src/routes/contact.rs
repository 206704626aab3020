use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use seaworth_page::{Page, Section};

use crate::{
    routes::AppState,
    template::{CONTACT_FORM_FRAGMENT, ContactFormTemplate, IndexTemplate, Template},
};

/// POST /contact - submits the inquiry to the backend and renders the result.
///
/// `site.js` asks for the form fragment only; plain form posts get the whole
/// page back, scrolled to the contact section.
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let mut page = Page::default();

    for (name, value) in fields {
        if let Err(err) = page.form.update_named(&name, value) {
            tracing::debug!(err = %err, "ignoring form field");
        }
    }

    page.scroll_to(Section::Contact.as_ref());

    if let Some(outcome) = page.submit(&app.inquiry_client).await {
        tracing::info!(outcome = %outcome.kind, "contact form submitted");
    }

    if template.is_fragment(CONTACT_FORM_FRAGMENT) {
        return template.render(ContactFormTemplate { page: &page });
    }

    template.render(IndexTemplate::new(&page))
}
