use serde::Serialize;
use tracing::info;

/// Structured events emitted on successful mutations, logged under the
/// `business_events` target for downstream log pipelines.
#[derive(Debug, Serialize)]
#[serde(tag = "event_type")]
pub enum BusinessEvent {
    BoardCreated {
        board_id: i64,
    },
    BoardUpdated {
        board_id: i64,
    },
    BoardDeleted {
        board_id: i64,
    },
    CommentCreated {
        comment_id: i64,
        board_id: i64,
        parent_comment_id: Option<i64>,
    },
    CommentUpdated {
        comment_id: i64,
    },
    CommentDeleted {
        comment_id: i64,
    },
}

impl BusinessEvent {
    pub fn log(&self) {
        let event_json = serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self));
        info!(
            target: "business_events",
            event = %event_json,
            "Business event occurred"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::BusinessEvent;

    #[test]
    fn events_carry_a_tag() {
        let event = BusinessEvent::CommentCreated {
            comment_id: 7,
            board_id: 1,
            parent_comment_id: Some(3),
        };
        let value = serde_json::to_value(&event).expect("serializable");
        assert_eq!(value["event_type"], "CommentCreated");
        assert_eq!(value["parent_comment_id"], 3);
    }
}
