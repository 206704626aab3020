#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;

/// Serves `router` on an ephemeral local port and returns its base url.
pub async fn spawn_backend(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{addr}"))
}

/// Base url of a port nothing listens on.
pub async fn closed_backend() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{addr}"))
}

pub fn inquiry() -> seaworth_page::Inquiry {
    seaworth_page::Inquiry {
        name: "A".to_owned(),
        email: "a@x.com".to_owned(),
        subject: "S".to_owned(),
        message: "M".to_owned(),
    }
}
