pub mod sea_orm_entity;
pub mod submission_query_postgres;
pub mod submission_repository_postgres;
