use crate::domain::errors::DomainError;
use crate::domain::post::Title;

const CNT_POST_TITLE_ACTIVE: &str = "posts_title_active_key";
const CNT_COMMENT_POST: &str = "post_comments_post_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_TITLE_ACTIVE => {
                        DomainError::DuplicateTitle("title already in use".into())
                    }
                    CNT_COMMENT_POST => DomainError::NotFound("post not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::DuplicateTitle("title already in use".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Like [`map_sqlx`], but a hit on the title index names the offending title.
pub fn map_sqlx_for_title(err: sqlx::Error, title: Option<&Title>) -> DomainError {
    match (map_sqlx(err), title) {
        (DomainError::DuplicateTitle(_), Some(title)) => {
            DomainError::DuplicateTitle(title.to_string())
        }
        (other, _) => other,
    }
}
