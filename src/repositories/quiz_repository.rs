use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, FindOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::time::Duration;
use uuid::Uuid;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{Quiz, QuizSummary},
};

/// Document store holding quizzes.
///
/// Errors surface as `AppError::Store` carrying the driver's message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Inserts the quiz under a freshly generated id and returns that id.
    async fn create(&self, quiz: Quiz) -> AppResult<String>;
    async fn list_by_owner(&self, uid: &str) -> AppResult<Vec<QuizSummary>>;
    async fn find_by_perma_url(&self, perma_url: &str) -> AppResult<Option<Quiz>>;
    /// Deleting an id that does not exist is not an error.
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    /// Connects to the configured deployment, pings it, and binds the quizzes collection.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_options(client_options(&config.mongo_conn_string).await?)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        log::info!(
            "Connected to MongoDB, quizzes in '{}.{}'",
            config.mongo_db_name,
            config.quizzes_collection
        );

        Ok(Self::new(
            client
                .database(&config.mongo_db_name)
                .collection(&config.quizzes_collection),
        ))
    }

    pub fn new(collection: Collection<Quiz>) -> Self {
        Self { collection }
    }
}

async fn client_options(conn_string: &str) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(conn_string).await?;

    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.max_pool_size = Some(10);
    options.min_pool_size = Some(2);
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));

    Ok(options)
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, mut quiz: Quiz) -> AppResult<String> {
        let id = Uuid::new_v4().simple().to_string();
        quiz.id = Some(id.clone());

        self.collection.insert_one(&quiz).await?;
        Ok(id)
    }

    async fn list_by_owner(&self, uid: &str) -> AppResult<Vec<QuizSummary>> {
        let find_options = FindOptions::builder()
            .projection(doc! { "_id": 1, "description": 1, "permaUrl": 1 })
            .build();

        let cursor = self
            .collection
            .clone_with_type::<QuizSummary>()
            .find(doc! { "uid": uid })
            .with_options(find_options)
            .await?;
        let items: Vec<QuizSummary> = cursor.try_collect().await?;

        Ok(items)
    }

    async fn find_by_perma_url(&self, perma_url: &str) -> AppResult<Option<Quiz>> {
        let quiz = self
            .collection
            .find_one(doc! { "permaUrl": perma_url })
            .await?;
        Ok(quiz)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        log::debug!("Deleted {} quiz document(s) for id {}", result.deleted_count, id);
        Ok(())
    }
}
