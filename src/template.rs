use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use seaworth_page::Page;
use std::convert::Infallible;

use crate::content::{self, ContactDetail, Customer, Feature, Member, NavLink, Service, Stat};

/// Header sent by `site.js` when it only wants a fragment back.
pub const FRAGMENT_HEADER: &str = "x-fragment";
pub const CONTACT_FORM_FRAGMENT: &str = "contact-form";

pub struct Template {
    fragment: Option<String>,
}

impl Template {
    pub fn is_fragment(&self, name: &str) -> bool {
        self.fragment.as_deref() == Some(name)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");

                match askama::Template::render(&ServerTemplate::default()) {
                    Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
                    Err(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to render template. Error: {err}"),
                    )
                        .into_response(),
                }
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let fragment = parts
            .headers
            .get(FRAGMENT_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(Template { fragment })
    }
}

/// Static copy shared by every full-page template.
pub struct Layout {
    pub company: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub nav_links: &'static [NavLink],
    pub footer_links: &'static [NavLink],
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            company: content::COMPANY,
            tagline: content::TAGLINE,
            phone: content::PHONE,
            email: content::EMAIL,
            nav_links: content::NAV_LINKS,
            footer_links: content::FOOTER_LINKS,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub layout: Layout,
    pub page: &'a Page,
    pub stats: &'static [Stat],
    pub features: &'static [Feature],
    pub services: &'static [Service],
    pub team: &'static [Member],
    pub customers: &'static [Customer],
    pub contact_details: &'static [ContactDetail],
}

impl<'a> IndexTemplate<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self {
            layout: Layout::default(),
            page,
            stats: content::STATS,
            features: content::FEATURES,
            services: content::SERVICES,
            team: content::TEAM,
            customers: content::CUSTOMERS,
            contact_details: content::CONTACT_DETAILS,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate<'a> {
    pub page: &'a Page,
}

#[derive(askama::Template, Default)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

#[derive(askama::Template, Default)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub layout: Layout,
}
