#[cfg(any(feature = "dynamodb", feature = "mongodb"))]
use super::config::Config;

#[cfg(feature = "dynamodb")]
pub struct DynamoDatabase {
  pub dynamo_client: aws_sdk_dynamodb::Client,
}

#[cfg(feature = "dynamodb")]
impl DynamoDatabase {
  pub async fn new(_config: &Config) -> Self {
    let aws_config = aws_config::load_from_env().await;
    Self {
      dynamo_client: aws_sdk_dynamodb::Client::new(&aws_config),
    }
  }
}

#[cfg(feature = "mongodb")]
pub struct MongoDatabase {
  pub mongo_client: mongodb::Client,
}

#[cfg(feature = "mongodb")]
impl MongoDatabase {
  pub async fn new(config: &Config) -> Result<Self, mongodb::error::Error> {
    let mongo_client =
      mongodb::Client::with_uri_str(&config.database.mongo_uri).await?;
    Ok(Self { mongo_client })
  }
}
