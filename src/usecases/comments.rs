use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sqlx::PgPool;

use crate::{
    dto::comments::{CommentRequest, CommentResponse},
    error::AppError,
    models::comments::Comment,
    repositories::boards as board_repo,
    repositories::comments as comment_repo,
    repositories::comments::CreateCommentParams,
    telemetry::BusinessEvent,
    usecases::validation,
};

pub struct CommentService;

impl CommentService {
    /// Creates a top-level comment or, when `parent_comment_id` is set,
    /// a reply one level below its parent.
    pub async fn create_comment(
        pool: &PgPool,
        req: CommentRequest,
    ) -> Result<CommentResponse, AppError> {
        validation::validate_comment_request(&req)?;
        let board_id = req
            .board_id
            .ok_or_else(|| AppError::BadRequest("Board id is required".to_string()))?;

        board_repo::find_board_by_id(pool, board_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Board not found: {board_id}")))?;

        let (depth, is_reply) = match req.parent_comment_id {
            Some(parent_id) => {
                let parent = comment_repo::find_comment_by_id(pool, parent_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Parent comment not found: {parent_id}"))
                    })?;
                (parent.depth + 1, true)
            }
            None => (0, false),
        };

        let now = Utc::now();
        let comment = comment_repo::create_comment(
            pool,
            CreateCommentParams {
                text_body: req.text_body,
                user_name: req.user,
                board_id,
                parent_comment_id: req.parent_comment_id,
                is_comment_for_comment: is_reply,
                depth,
                created_date: now,
                modified_date: now,
            },
        )
        .await?;

        BusinessEvent::CommentCreated {
            comment_id: comment.id,
            board_id,
            parent_comment_id: comment.parent_comment_id,
        }
        .log();

        Ok(map_comment_response(comment))
    }

    /// Returns the board's comments as a nested reply tree, root comments
    /// first, siblings ordered by creation time at every level.
    pub async fn list_board_comments(
        pool: &PgPool,
        board_id: i64,
    ) -> Result<Vec<CommentResponse>, AppError> {
        validation::validate_id("Board id", board_id)?;

        let comments = comment_repo::list_comments_by_board(pool, board_id).await?;
        Ok(organize_hierarchy(comments))
    }

    /// Only the text body is mutable; author, parent and depth are fixed
    /// at creation.
    pub async fn update_comment(
        pool: &PgPool,
        comment_id: i64,
        req: CommentRequest,
    ) -> Result<CommentResponse, AppError> {
        validation::validate_id("Comment id", comment_id)?;
        validation::validate_comment_request(&req)?;

        comment_repo::find_comment_by_id(pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment not found: {comment_id}")))?;

        let comment =
            comment_repo::update_comment_text(pool, comment_id, req.text_body, Utc::now()).await?;

        BusinessEvent::CommentUpdated { comment_id }.log();

        Ok(map_comment_response(comment))
    }

    /// Descendant replies go with the comment via the store's cascade rule.
    pub async fn delete_comment(pool: &PgPool, comment_id: i64) -> Result<(), AppError> {
        validation::validate_id("Comment id", comment_id)?;

        comment_repo::find_comment_by_id(pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment not found: {comment_id}")))?;

        comment_repo::delete_comment(pool, comment_id).await?;

        BusinessEvent::CommentDeleted { comment_id }.log();

        Ok(())
    }

    pub async fn count_board_comments(pool: &PgPool, board_id: i64) -> Result<i64, AppError> {
        validation::validate_id("Board id", board_id)?;

        comment_repo::count_comments_by_board(pool, board_id).await
    }
}

/// Converts a flat, creation-time-ordered comment list into a nested
/// reply tree. Children are grouped by parent id up front, so assembly
/// is linear in the number of comments while producing the same output
/// as a per-level scan. A comment whose parent is missing from the set
/// is promoted to a root rather than dropped.
fn organize_hierarchy(comments: Vec<Comment>) -> Vec<CommentResponse> {
    let ids: HashSet<i64> = comments.iter().map(|comment| comment.id).collect();

    let mut roots: Vec<CommentResponse> = Vec::new();
    let mut children: HashMap<i64, Vec<CommentResponse>> = HashMap::new();
    for comment in comments {
        let view = map_comment_response(comment);
        match view.parent_comment_id {
            Some(parent_id) if ids.contains(&parent_id) => {
                children.entry(parent_id).or_default().push(view);
            }
            _ => roots.push(view),
        }
    }

    for root in &mut roots {
        attach_replies(root, &mut children);
    }
    roots
}

fn attach_replies(parent: &mut CommentResponse, children: &mut HashMap<i64, Vec<CommentResponse>>) {
    let mut replies = children.remove(&parent.id).unwrap_or_default();
    for reply in &mut replies {
        attach_replies(reply, children);
    }
    parent.replies = Some(replies);
}

fn map_comment_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        text_body: comment.text_body,
        user: comment.user_name,
        board_id: comment.board_id,
        parent_comment_id: comment.parent_comment_id,
        is_comment_for_comment: comment.is_comment_for_comment,
        depth: comment.depth,
        order_number: comment.order_number,
        created_date: comment.created_date,
        modified_date: comment.modified_date,
        replies: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn comment(id: i64, parent_id: Option<i64>, minute: i64) -> Comment {
        let created = Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap()
            + Duration::minutes(minute);
        let depth = i32::from(parent_id.is_some());
        Comment {
            id,
            text_body: format!("comment {id}"),
            user_name: "Lee".to_string(),
            board_id: 1,
            parent_comment_id: parent_id,
            is_comment_for_comment: parent_id.is_some(),
            depth,
            order_number: None,
            created_date: created,
            modified_date: created,
        }
    }

    fn collect_ids(nodes: &[CommentResponse], out: &mut Vec<i64>) {
        for node in nodes {
            out.push(node.id);
            if let Some(replies) = &node.replies {
                collect_ids(replies, out);
            }
        }
    }

    #[test]
    fn empty_input_yields_empty_tree() {
        assert!(organize_hierarchy(Vec::new()).is_empty());
    }

    #[test]
    fn single_root_with_one_reply() {
        let tree = organize_hierarchy(vec![comment(1, None, 0), comment(2, Some(1), 1)]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, 1);
        let replies = tree[0].replies.as_ref().expect("replies set");
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].id, 2);
        assert!(replies[0].replies.as_ref().expect("replies set").is_empty());
    }

    #[test]
    fn siblings_keep_creation_order() {
        let tree = organize_hierarchy(vec![
            comment(1, None, 0),
            comment(2, Some(1), 1),
            comment(3, Some(1), 2),
            comment(4, Some(1), 3),
        ]);

        let replies = tree[0].replies.as_ref().unwrap();
        let ids: Vec<i64> = replies.iter().map(|reply| reply.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn nests_to_arbitrary_depth() {
        let tree = organize_hierarchy(vec![
            comment(1, None, 0),
            comment(2, Some(1), 1),
            comment(3, Some(2), 2),
            comment(4, Some(3), 3),
        ]);

        let level1 = &tree[0].replies.as_ref().unwrap()[0];
        let level2 = &level1.replies.as_ref().unwrap()[0];
        let level3 = &level2.replies.as_ref().unwrap()[0];
        assert_eq!(level3.id, 4);
        assert!(level3.replies.as_ref().unwrap().is_empty());
    }

    #[test]
    fn every_comment_appears_exactly_once() {
        let tree = organize_hierarchy(vec![
            comment(1, None, 0),
            comment(2, None, 1),
            comment(3, Some(1), 2),
            comment(4, Some(2), 3),
            comment(5, Some(3), 4),
        ]);

        let mut ids = Vec::new();
        collect_ids(&tree, &mut ids);
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn dangling_parent_promotes_to_root() {
        let tree = organize_hierarchy(vec![comment(1, None, 0), comment(2, Some(99), 1)]);

        let root_ids: Vec<i64> = tree.iter().map(|node| node.id).collect();
        assert_eq!(root_ids, vec![1, 2]);
    }

    #[test]
    fn interleaved_roots_keep_creation_order() {
        let tree = organize_hierarchy(vec![
            comment(1, None, 0),
            comment(2, Some(1), 1),
            comment(3, None, 2),
            comment(4, Some(3), 3),
            comment(5, None, 4),
        ]);

        let root_ids: Vec<i64> = tree.iter().map(|node| node.id).collect();
        assert_eq!(root_ids, vec![1, 3, 5]);
        assert_eq!(tree[0].replies.as_ref().unwrap()[0].id, 2);
        assert_eq!(tree[1].replies.as_ref().unwrap()[0].id, 4);
    }

    #[test]
    fn flat_view_leaves_replies_unset() {
        let view = map_comment_response(comment(1, None, 0));
        assert!(view.replies.is_none());
    }
}
