//! Kanban Board Model
//!
//! Pure column-assignment state for the operations board. A task's column is
//! determined entirely by its `status` field; moves always rewrite both
//! together, so membership and status cannot drift apart.

use crate::state::global::Order;

/// Workflow stage of an order. Doubles as the board column identifier and the
/// wire value of the order's `status` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKey {
    NewRequests,
    InProgress,
    Review,
    Completed,
}

impl ColumnKey {
    /// Columns in visual order, left to right
    pub const ALL: [ColumnKey; 4] = [
        ColumnKey::NewRequests,
        ColumnKey::InProgress,
        ColumnKey::Review,
        ColumnKey::Completed,
    ];

    /// Wire name used by the API
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::NewRequests => "new_requests",
            ColumnKey::InProgress => "in_progress",
            ColumnKey::Review => "review",
            ColumnKey::Completed => "completed",
        }
    }

    /// Parse a status string; unknown values yield `None`
    pub fn parse(s: &str) -> Option<ColumnKey> {
        match s {
            "new_requests" => Some(ColumnKey::NewRequests),
            "in_progress" => Some(ColumnKey::InProgress),
            "review" => Some(ColumnKey::Review),
            "completed" => Some(ColumnKey::Completed),
            _ => None,
        }
    }

    /// Column header shown on the board
    pub fn title(self) -> &'static str {
        match self {
            ColumnKey::NewRequests => "New Requests",
            ColumnKey::InProgress => "In Progress",
            ColumnKey::Review => "Review",
            ColumnKey::Completed => "Completed",
        }
    }

    fn index(self) -> usize {
        match self {
            ColumnKey::NewRequests => 0,
            ColumnKey::InProgress => 1,
            ColumnKey::Review => 2,
            ColumnKey::Completed => 3,
        }
    }
}

/// Board state: one ordered task sequence per column.
///
/// Intra-column order is visual stacking only and is not persisted; a reload
/// re-buckets strictly by status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    columns: [Vec<Order>; 4],
}

impl Board {
    /// Bucket a flat order list into columns. Orders with an unknown or
    /// missing status land in `new_requests`.
    pub fn from_orders(orders: Vec<Order>) -> Self {
        let mut board = Board::default();
        for order in orders {
            let column = ColumnKey::parse(&order.status).unwrap_or(ColumnKey::NewRequests);
            board.columns[column.index()].push(order);
        }
        board
    }

    /// Tasks currently in a column, in stacking order
    pub fn tasks(&self, column: ColumnKey) -> &[Order] {
        &self.columns[column.index()]
    }

    /// Number of tasks in a column
    pub fn count(&self, column: ColumnKey) -> usize {
        self.columns[column.index()].len()
    }

    /// True when no column holds any task
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.is_empty())
    }

    /// Move a task between columns, rewriting its status to match the target.
    ///
    /// Returns `false` without touching the board when the target equals the
    /// source or the task is not found in the source column.
    pub fn move_task(&mut self, task_id: &str, source: ColumnKey, target: ColumnKey) -> bool {
        if source == target {
            return false;
        }
        let source_list = &mut self.columns[source.index()];
        let Some(pos) = source_list.iter().position(|t| t.id == task_id) else {
            return false;
        };
        let mut task = source_list.remove(pos);
        task.status = target.as_str().to_string();
        self.columns[target.index()].push(task);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: &str) -> Order {
        Order {
            id: id.to_string(),
            title: format!("Task {}", id),
            status: status.to_string(),
            priority: "normal".to_string(),
            client_id: None,
            due_date: None,
            tags: Vec::new(),
            created_at: None,
        }
    }

    #[test]
    fn test_column_wire_names_round_trip() {
        for column in ColumnKey::ALL {
            assert_eq!(ColumnKey::parse(column.as_str()), Some(column));
        }
        assert_eq!(ColumnKey::parse("archived"), None);
        assert_eq!(ColumnKey::parse(""), None);
    }

    #[test]
    fn test_column_titles() {
        assert_eq!(ColumnKey::NewRequests.title(), "New Requests");
        assert_eq!(ColumnKey::InProgress.title(), "In Progress");
        assert_eq!(ColumnKey::Review.title(), "Review");
        assert_eq!(ColumnKey::Completed.title(), "Completed");
    }

    #[test]
    fn test_bucketing_places_each_task_in_exactly_one_column() {
        let board = Board::from_orders(vec![
            order("a", "new_requests"),
            order("b", "in_progress"),
            order("c", "review"),
            order("d", "completed"),
        ]);

        for column in ColumnKey::ALL {
            assert_eq!(board.count(column), 1);
        }
        assert_eq!(board.tasks(ColumnKey::InProgress)[0].id, "b");

        let total: usize = ColumnKey::ALL.iter().map(|&c| board.count(c)).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_unknown_status_defaults_to_new_requests() {
        let board = Board::from_orders(vec![order("a", "shipped"), order("b", "")]);
        assert_eq!(board.count(ColumnKey::NewRequests), 2);
        assert!(board.tasks(ColumnKey::InProgress).is_empty());
    }

    #[test]
    fn test_move_rewrites_status_and_appends_to_target() {
        let mut board = Board::from_orders(vec![
            order("a", "new_requests"),
            order("b", "new_requests"),
            order("c", "review"),
        ]);

        assert!(board.move_task("a", ColumnKey::NewRequests, ColumnKey::Review));

        assert_eq!(board.count(ColumnKey::NewRequests), 1);
        assert_eq!(board.tasks(ColumnKey::NewRequests)[0].id, "b");

        // Appended after the existing task, status rewritten
        let review = board.tasks(ColumnKey::Review);
        assert_eq!(review.len(), 2);
        assert_eq!(review[1].id, "a");
        assert_eq!(review[1].status, "review");
    }

    #[test]
    fn test_move_to_same_column_is_a_noop() {
        let mut board = Board::from_orders(vec![order("a", "new_requests")]);
        let before = board.clone();

        assert!(!board.move_task("a", ColumnKey::NewRequests, ColumnKey::NewRequests));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_of_unknown_task_is_a_noop() {
        let mut board = Board::from_orders(vec![order("a", "new_requests")]);
        let before = board.clone();

        assert!(!board.move_task("zzz", ColumnKey::NewRequests, ColumnKey::Completed));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_with_stale_source_column_is_a_noop() {
        // The gesture claims the task sits in new_requests, but a reload has
        // already put it in completed. Nothing moves, and the false return
        // tells the caller there is nothing to persist.
        let mut board = Board::from_orders(vec![order("a", "completed")]);
        let before = board.clone();

        assert!(!board.move_task("a", ColumnKey::NewRequests, ColumnKey::Review));
        assert_eq!(board, before);
        assert_eq!(board.tasks(ColumnKey::Completed)[0].status, "completed");
    }

    #[test]
    fn test_reload_discards_optimistic_placement() {
        let server_orders = vec![order("a", "new_requests"), order("b", "in_progress")];

        let mut board = Board::from_orders(server_orders.clone());
        board.move_task("a", ColumnKey::NewRequests, ColumnKey::Completed);
        assert_eq!(board.count(ColumnKey::Completed), 1);

        // Failed PATCH: the server never saw the move, so a full reload puts
        // the task back where the server says it belongs.
        let reloaded = Board::from_orders(server_orders);
        assert_eq!(reloaded.count(ColumnKey::Completed), 0);
        assert_eq!(reloaded.tasks(ColumnKey::NewRequests)[0].id, "a");
        assert_eq!(reloaded.tasks(ColumnKey::NewRequests)[0].status, "new_requests");
    }
}
