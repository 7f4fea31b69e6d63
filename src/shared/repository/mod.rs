pub mod user_repository;

#[cfg(feature = "dynamodb")]
pub mod dynamo_user_repository;
#[cfg(feature = "mongodb")]
pub mod mongo_user_repository;
