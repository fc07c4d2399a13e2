use std::time::Duration;

#[cfg(feature = "mongodb")]
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

#[cfg(feature = "mongodb")]
use super::entity::{post::PostDocument, user::UserDocument};
#[cfg(feature = "mongodb")]
use super::mongo_repo::{MongoPostRepository, MongoUserRepository};

/// Collection holding [`blog_core::domain::BlogUser`] documents.
pub const USER_COLLECTION: &str = "blogUser";
/// Collection holding [`blog_core::domain::BlogPost`] documents.
pub const POST_COLLECTION: &str = "blogPost";

/// Configuration for the document database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
    /// Bounds both the initial connect and server selection.
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            name: "blogDB".to_string(),
            connect_timeout: Duration::from_secs(60),
        }
    }
}

/// The single MongoDB client shared by every request.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config).await?;
/// let users = db.users();
/// let user = users.find_by_id(id).await?;
/// ```
#[cfg(feature = "mongodb")]
#[derive(Clone)]
pub struct DatabaseConnections {
    pub client: Client,
    pub db: Database,
}

#[cfg(feature = "mongodb")]
impl DatabaseConnections {
    /// Connect and verify the server answers a `ping`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing database connection...");

        let mut options = ClientOptions::parse(&config.url).await?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        options.app_name = Some("blog-api".to_string());

        let client = Client::with_options(options)?;
        let db = client.database(&config.name);
        db.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(database = %config.name, "Database connected");

        Ok(Self { client, db })
    }

    pub fn users(&self) -> MongoUserRepository {
        MongoUserRepository::new(self.db.collection::<UserDocument>(USER_COLLECTION))
    }

    pub fn posts(&self) -> MongoPostRepository {
        MongoPostRepository::new(self.db.collection::<PostDocument>(POST_COLLECTION))
    }
}
