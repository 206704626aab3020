use axum::{body::Body, response::Response};
cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::{body::to_bytes, http::header};
        use std::sync::LazyLock;

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_doctype: false,
            minify_css: true,
            minify_js: true,
            ..Default::default()
        });
    }
}

/// Minifies `text/html` responses in release builds.
///
/// Contact form fragments go through here as well, so the partial swapped in
/// by `site.js` is minified the same way as the full page.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            let is_html = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|h| h.to_str().ok())
                .is_some_and(|h| h.contains("text/html"));

            if is_html {
                let (mut parts, body) = response.into_parts();
                let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
                let minified = minify_html::minify(&bytes, &MINIFY_CFG);
                parts.headers.remove(header::CONTENT_LENGTH);
                return Response::from_parts(parts, Body::from(minified));
            }
        }
    }

    response
}
