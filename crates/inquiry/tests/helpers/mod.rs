#![allow(dead_code)]

use std::{path::Path, str::FromStr};

use seaworth_inquiry::{Command, Query, SubmitInquiryInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};

pub struct State {
    pub command: Command,
    pub query: Query,
}

pub async fn setup_test_state(path: &Path) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    seaworth_inquiry::MIGRATOR.run(&pool).await?;

    Ok(State {
        command: Command(pool.clone()),
        query: Query(pool),
    })
}

pub fn input(name: impl Into<String>) -> SubmitInquiryInput {
    let name = name.into();

    SubmitInquiryInput {
        email: format!("{name}@seaworth.localhost"),
        name,
        subject: "Quotation".to_owned(),
        message: "Please send a quote for 200 litres of solvent.".to_owned(),
    }
}

pub async fn submit_all(
    state: &State,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<String>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        ids.push(state.command.submit(input(name)).await?);
    }

    Ok(ids)
}
