use std::time::{SystemTime, UNIX_EPOCH};

use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use seaworth_shared::Inquiry;
use sqlx::SqlitePool;
use validator::Validate;

use crate::table::Inquiries;

/// Text fields only need to be present; there is no upper bound on length.
#[derive(Validate, Clone, Debug)]
pub struct SubmitInquiryInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl From<Inquiry> for SubmitInquiryInput {
    fn from(value: Inquiry) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    /// Validates and stores an inquiry, returning its id.
    pub async fn submit(&self, input: SubmitInquiryInput) -> seaworth_shared::Result<String> {
        input.validate()?;

        let id = ulid::Ulid::new().to_string();
        let created_at = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;

        let statement = Query::insert()
            .into_table(Inquiries::Table)
            .columns([
                Inquiries::Id,
                Inquiries::Name,
                Inquiries::Email,
                Inquiries::Subject,
                Inquiries::Message,
                Inquiries::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.name.into(),
                input.email.into(),
                input.subject.into(),
                input.message.into(),
                created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            seaworth_shared::bail!("inquiry {id} was not stored");
        }

        tracing::info!(inquiry.id = %id, "inquiry stored");

        Ok(id)
    }
}
