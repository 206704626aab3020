use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Inquiries {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    CreatedAt,
}
