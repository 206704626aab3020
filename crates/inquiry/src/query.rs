use sea_query::{Expr, ExprTrait, Func, Order, Query as Select, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::table::Inquiries;

#[derive(Debug, Clone, FromRow)]
pub struct InquiryRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: i64,
}

/// JSON shape of a stored inquiry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InquiryView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: String,
}

impl InquiryRow {
    pub fn timestamp(&self) -> anyhow::Result<String> {
        Ok(OffsetDateTime::from_unix_timestamp(self.created_at)?.format(&Rfc3339)?)
    }
}

impl TryFrom<InquiryRow> for InquiryView {
    type Error = anyhow::Error;

    fn try_from(row: InquiryRow) -> Result<Self, Self::Error> {
        let timestamp = row.timestamp()?;

        Ok(Self {
            id: row.id,
            name: row.name,
            email: row.email,
            subject: row.subject,
            message: row.message,
            timestamp,
        })
    }
}

#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    /// Most recent inquiries first.
    pub async fn list(&self, limit: u64) -> anyhow::Result<Vec<InquiryRow>> {
        let statement = Select::select()
            .columns([
                Inquiries::Id,
                Inquiries::Name,
                Inquiries::Email,
                Inquiries::Subject,
                Inquiries::Message,
                Inquiries::CreatedAt,
            ])
            .from(Inquiries::Table)
            .order_by(Inquiries::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .limit(limit)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, InquiryRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<InquiryRow>> {
        let statement = Select::select()
            .columns([
                Inquiries::Id,
                Inquiries::Name,
                Inquiries::Email,
                Inquiries::Subject,
                Inquiries::Message,
                Inquiries::CreatedAt,
            ])
            .from(Inquiries::Table)
            .and_where(Expr::col(Inquiries::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, InquiryRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        let statement = Select::select()
            .expr(Func::count(Expr::col(Inquiries::Id)))
            .from(Inquiries::Table)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (count,): (i64,) = sqlx::query_as_with(&sql, values)
            .fetch_one(&self.0)
            .await?;

        Ok(count as u64)
    }
}
