// src/db.rs
use anyhow::Result;
use bson::{doc, Document};
use mongodb::error::{Error, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use crate::task::Task;

pub const DB_NAME: &str = "personalTasks";
pub const TASKS_COLLECTION: &str = "tasks";

/// Owned handle to the bootstrapped `tasks` collection. Clone it into every
/// component that needs persistence access.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Collection<Task>,
}

impl TaskStore {
    pub fn tasks(&self) -> &Collection<Task> {
        &self.tasks
    }
}

/// Connects to the deployment at `uri`, ensures the `tasks` collection of
/// `personalTasks` carries the task validator, and returns the typed handle.
///
/// The driver connects lazily, so a `ping` forces the handshake and makes
/// connection failures surface from this call. The connection is attempted
/// exactly once; there are no retries and no local timeouts beyond the
/// driver's defaults. Errors keep the driver's own kind and can be
/// downcast from the returned `anyhow::Error`.
pub async fn connect(uri: &str) -> Result<TaskStore> {
    let client_options = ClientOptions::parse(uri).await?;
    let client = Client::with_options(client_options)?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    let db = client.database(DB_NAME);
    ensure_task_schema(&db).await?;
    info!(
        database = DB_NAME,
        collection = TASKS_COLLECTION,
        "connected, task schema ensured"
    );

    Ok(TaskStore {
        tasks: db.collection::<Task>(TASKS_COLLECTION),
    })
}

// Kept in sync with the Task model: three required fields, no extras.
fn task_json_schema() -> Document {
    doc! {
        "bsonType": "object",
        "required": ["title", "priority", "completed"],
        "additionalProperties": false,
        "properties": {
            "_id": {},
            "title": { "bsonType": "string" },
            "priority": { "bsonType": "string", "enum": ["high", "medium", "low"] },
            "completed": { "bsonType": "bool" },
        },
    }
}

/// Attaches the task validator to the `tasks` collection, creating the
/// collection when it does not exist yet.
///
/// Two callers bootstrapping concurrently may race on creation; the loser
/// sees `NamespaceExists` and re-applies the validator to the winner's
/// collection, so both converge on the same end state.
async fn ensure_task_schema(db: &Database) -> Result<()> {
    let validator = doc! { "$jsonSchema": task_json_schema() };

    match apply_validator(db, &validator).await {
        Ok(_) => Ok(()),
        Err(err) if command_failed_with(&err, "NamespaceNotFound") => {
            debug!(
                collection = TASKS_COLLECTION,
                "collection missing, creating it with the validator"
            );
            match db
                .create_collection(TASKS_COLLECTION)
                .validator(validator.clone())
                .await
            {
                Ok(()) => Ok(()),
                Err(err) if command_failed_with(&err, "NamespaceExists") => {
                    apply_validator(db, &validator).await?;
                    Ok(())
                }
                Err(err) => Err(err.into()),
            }
        }
        Err(err) => Err(err.into()),
    }
}

async fn apply_validator(db: &Database, validator: &Document) -> mongodb::error::Result<Document> {
    db.run_command(doc! { "collMod": TASKS_COLLECTION, "validator": validator.clone() })
        .await
}

fn command_failed_with(err: &Error, code_name: &str) -> bool {
    matches!(err.kind.as_ref(), ErrorKind::Command(c) if c.code_name == code_name)
}
