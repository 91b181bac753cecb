use crate::{
    dto::{boards::BoardRequest, comments::CommentRequest},
    error::AppError,
};

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_CONTENT_LENGTH: usize = 5000;
pub const MIN_AUTHOR_LENGTH: usize = 2;
pub const MAX_AUTHOR_LENGTH: usize = 20;
pub const MAX_COMMENT_LENGTH: usize = 1000;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Checks title, content and author in that order; the first violation
/// wins and is reported as a "field: message" entry.
pub fn validate_board_request(req: &BoardRequest) -> Result<(), AppError> {
    validate_text_field("title", &req.title, MAX_TITLE_LENGTH)?;
    validate_text_field("content", &req.content, MAX_CONTENT_LENGTH)?;
    validate_name_field("author", &req.author)?;
    Ok(())
}

pub fn validate_comment_request(req: &CommentRequest) -> Result<(), AppError> {
    validate_text_field("textBody", &req.text_body, MAX_COMMENT_LENGTH)?;
    validate_name_field("user", &req.user)?;
    match req.board_id {
        None => {
            return Err(field_error("boardId", "Board id is required"));
        }
        Some(board_id) if board_id <= 0 => {
            return Err(field_error("boardId", "Board id must be a positive number"));
        }
        Some(_) => {}
    }
    if let Some(parent_id) = req.parent_comment_id {
        if parent_id <= 0 {
            return Err(field_error(
                "parentCommentId",
                "Parent comment id must be a positive number",
            ));
        }
    }
    Ok(())
}

pub fn validate_id(field: &str, id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::BadRequest(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

pub fn validate_paging(page: i64, size: i64) -> Result<(), AppError> {
    if page < 0 {
        return Err(AppError::BadRequest(
            "Page number must be 0 or greater".to_string(),
        ));
    }
    if size <= 0 {
        return Err(AppError::BadRequest(
            "Page size must be 1 or greater".to_string(),
        ));
    }
    if size > MAX_PAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "Page size must be {MAX_PAGE_SIZE} or less"
        )));
    }
    Ok(())
}

fn validate_text_field(field: &str, value: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(field_error(field, "Value is required"));
    }
    if value.chars().count() > max_len {
        return Err(field_error(
            field,
            &format!("Value must be {max_len} characters or less"),
        ));
    }
    Ok(())
}

fn validate_name_field(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(field_error(field, "Value is required"));
    }
    let len = value.chars().count();
    if !(MIN_AUTHOR_LENGTH..=MAX_AUTHOR_LENGTH).contains(&len) {
        return Err(field_error(
            field,
            &format!("Value must be {MIN_AUTHOR_LENGTH} to {MAX_AUTHOR_LENGTH} characters"),
        ));
    }
    if !value.chars().all(is_allowed_name_char) {
        return Err(field_error(
            field,
            "Only Korean, English letters and digits are allowed",
        ));
    }
    Ok(())
}

// Hangul syllables, ASCII letters, digits and whitespace.
fn is_allowed_name_char(c: char) -> bool {
    ('가'..='힣').contains(&c) || c.is_ascii_alphanumeric() || c.is_whitespace()
}

fn field_error(field: &str, message: &str) -> AppError {
    AppError::Validation(vec![format!("{field}: {message}")])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_request(title: &str, content: &str, author: &str) -> BoardRequest {
        BoardRequest {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        }
    }

    fn comment_request(text: &str, user: &str, board_id: Option<i64>) -> CommentRequest {
        CommentRequest {
            text_body: text.to_string(),
            user: user.to_string(),
            board_id,
            parent_comment_id: None,
        }
    }

    fn first_entry(err: AppError) -> String {
        match err {
            AppError::Validation(entries) => entries.into_iter().next().expect("entry"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_board_request() {
        let req = board_request("Title", "Content", "Kim");
        assert!(validate_board_request(&req).is_ok());
    }

    #[test]
    fn rejects_blank_title_first() {
        let req = board_request("   ", "", "!");
        let entry = first_entry(validate_board_request(&req).unwrap_err());
        assert!(entry.starts_with("title:"));
    }

    #[test]
    fn rejects_title_over_limit() {
        let req = board_request(&"a".repeat(MAX_TITLE_LENGTH + 1), "Content", "Kim");
        let entry = first_entry(validate_board_request(&req).unwrap_err());
        assert!(entry.starts_with("title:"));
    }

    #[test]
    fn accepts_title_at_limit() {
        let req = board_request(&"a".repeat(MAX_TITLE_LENGTH), "Content", "Kim");
        assert!(validate_board_request(&req).is_ok());
    }

    #[test]
    fn rejects_content_over_limit() {
        let req = board_request("Title", &"a".repeat(MAX_CONTENT_LENGTH + 1), "Kim");
        let entry = first_entry(validate_board_request(&req).unwrap_err());
        assert!(entry.starts_with("content:"));
    }

    #[test]
    fn rejects_short_author() {
        let req = board_request("Title", "Content", "K");
        let entry = first_entry(validate_board_request(&req).unwrap_err());
        assert!(entry.starts_with("author:"));
    }

    #[test]
    fn rejects_author_with_symbols() {
        let req = board_request("Title", "Content", "Kim!");
        let entry = first_entry(validate_board_request(&req).unwrap_err());
        assert!(entry.contains("Only Korean, English letters and digits"));
    }

    #[test]
    fn accepts_hangul_author() {
        let req = board_request("Title", "Content", "김철수");
        assert!(validate_board_request(&req).is_ok());
    }

    #[test]
    fn accepts_author_with_interior_space() {
        let req = board_request("Title", "Content", "Kim Lee");
        assert!(validate_board_request(&req).is_ok());
    }

    #[test]
    fn rejects_comment_without_board_id() {
        let req = comment_request("hi", "Lee", None);
        let entry = first_entry(validate_comment_request(&req).unwrap_err());
        assert!(entry.starts_with("boardId:"));
    }

    #[test]
    fn rejects_comment_over_limit() {
        let req = comment_request(&"a".repeat(MAX_COMMENT_LENGTH + 1), "Lee", Some(1));
        let entry = first_entry(validate_comment_request(&req).unwrap_err());
        assert!(entry.starts_with("textBody:"));
    }

    #[test]
    fn rejects_non_positive_parent_comment_id() {
        let mut req = comment_request("hi", "Lee", Some(1));
        req.parent_comment_id = Some(0);
        let entry = first_entry(validate_comment_request(&req).unwrap_err());
        assert!(entry.starts_with("parentCommentId:"));
    }

    #[test]
    fn rejects_non_positive_id() {
        assert!(validate_id("id", 0).is_err());
        assert!(validate_id("id", -5).is_err());
        assert!(validate_id("id", 1).is_ok());
    }

    #[test]
    fn paging_boundaries() {
        assert!(validate_paging(0, 1).is_ok());
        assert!(validate_paging(0, MAX_PAGE_SIZE).is_ok());
        assert!(validate_paging(0, MAX_PAGE_SIZE + 1).is_err());
        assert!(validate_paging(-1, 10).is_err());
        assert!(validate_paging(0, 0).is_err());
    }
}
