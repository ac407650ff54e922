pub mod assignment_query_postgres;
pub mod assignment_repository_postgres;
pub mod sea_orm_entity;
