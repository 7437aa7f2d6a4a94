use bson::{doc, oid::ObjectId, DateTime};
use futures_util::TryStreamExt;
use shared::RegisterUserRequest;

use super::{models::User, Database};
use crate::error::AppError;

pub struct UserRepository;

impl UserRepository {
    /// Find a user by external identity uid
    pub async fn find_by_uid(db: &Database, uid: &str) -> Result<Option<User>, AppError> {
        Ok(db.users.find_one(doc! { "uid": uid }).await?)
    }

    pub async fn find_all(db: &Database) -> Result<Vec<User>, AppError> {
        Ok(db.users.find(doc! {}).await?.try_collect().await?)
    }

    /// Case-insensitive substring match against display name or email.
    pub async fn search(db: &Database, query: &str) -> Result<Vec<User>, AppError> {
        let filter = doc! {
            "$or": [
                { "displayName": { "$regex": query, "$options": "i" } },
                { "email": { "$regex": query, "$options": "i" } },
            ]
        };
        Ok(db.users.find(filter).await?.try_collect().await?)
    }

    /// Insert a new user; the role defaults to `student`.
    pub async fn create(db: &Database, req: &RegisterUserRequest) -> Result<ObjectId, AppError> {
        let now = DateTime::now();
        let user = User {
            id: ObjectId::new(),
            uid: req.uid.clone(),
            display_name: req.name.clone(),
            email: req.email.clone(),
            photo_url: req.photo_url.clone(),
            role: req.role.clone().unwrap_or_else(|| "student".to_string()),
            created_at: Some(now),
            updated_at: Some(now),
        };
        db.users.insert_one(&user).await?;
        Ok(user.id)
    }

    /// Overwrite the role; returns false when the user does not exist.
    pub async fn update_role(db: &Database, id: &ObjectId, role: &str) -> Result<bool, AppError> {
        let result = db
            .users
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "role": role, "updatedAt": DateTime::now() } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }
}
