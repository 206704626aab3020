use axum::{extract::Query, response::IntoResponse};
use seaworth_page::Page;
use serde::Deserialize;

use crate::template::{IndexTemplate, Template};

/// Navigation without JavaScript: `?menu=open` shows the mobile menu and
/// `?section=<id>` asks the page to land on a section.
#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub section: Option<String>,
    pub menu: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let mut page = Page::default();

    if query.menu.as_deref() == Some("open") {
        page.navigator.open_menu();
    }

    if let Some(section) = query.section.as_deref() {
        if page.scroll_to(section).is_none() {
            tracing::debug!(section, "ignoring unknown section");
        }
    }

    template.render(IndexTemplate::new(&page))
}
