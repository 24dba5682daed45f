use anyhow::{bail, Result};
use salesdash_core::FaqInput;
use salesdash_service::FaqService;
use salesdash_storage::{FaqRepository, SqliteStore};
use std::path::PathBuf;
use std::sync::Arc;

use crate::{ensure_db_dir, get_db_path, FaqAction};

pub(crate) async fn run(action: FaqAction, db: Option<PathBuf>) -> Result<()> {
    let db_path = get_db_path(db);
    ensure_db_dir(&db_path)?;
    let store = Arc::new(SqliteStore::new(&db_path)?);
    let service = FaqService::open(Arc::new(FaqRepository::new(store))).await?;

    match action {
        FaqAction::List => {
            println!("{}", serde_json::to_string_pretty(&service.list().await)?);
        },
        FaqAction::Add { question, answer } => {
            let entry = service.add(FaqInput::new(question, answer)).await?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        },
        FaqAction::Edit { id, question, answer } => {
            let entry = service.update(&id, FaqInput::new(question, answer)).await?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        },
        FaqAction::Delete { id } => {
            if !service.delete(&id).await? {
                bail!("FAQ not found: {id}");
            }
            println!("Deleted FAQ {id}");
        },
    }
    Ok(())
}
