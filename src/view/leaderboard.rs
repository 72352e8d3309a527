use crate::domain::User;

/// Metric by which to rank the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    /// Resources shared.
    Shared,
    /// Resources claimed.
    Claimed,
    /// Cumulative rupee value.
    Value,
    /// Cumulative point score.
    Points,
}

impl RankBy {
    const fn key(self, user: &User) -> u32 {
        match self {
            Self::Shared => user.resources_shared,
            Self::Claimed => user.resources_claimed,
            Self::Value => user.total_value,
            Self::Points => user.points,
        }
    }
}

/// The top `n` users by the given metric.
///
/// Descending order; the sort is stable, so users with equal scores keep
/// their original roster order.
#[must_use]
pub fn top_users(users: &[User], by: RankBy, n: usize) -> Vec<&User> {
    let mut ranked: Vec<&User> = users.iter().collect();
    ranked.sort_by(|a, b| by.key(b).cmp(&by.key(a)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Branch, Semester};

    fn user(name: &str, shared: u32, claimed: u32, value: u32, points: u32) -> User {
        User {
            name: name.to_string(),
            branch: Branch::Cse,
            semester: Semester::new(5).unwrap(),
            resources_shared: shared,
            resources_claimed: claimed,
            total_value: value,
            points,
        }
    }

    #[test]
    fn top_by_shared_orders_descending() {
        let users = vec![
            user("A", 12, 0, 0, 0),
            user("B", 8, 0, 0, 0),
            user("C", 15, 0, 0, 0),
            user("D", 6, 0, 0, 0),
            user("E", 10, 0, 0, 0),
        ];
        let top: Vec<u32> = top_users(&users, RankBy::Shared, 3)
            .iter()
            .map(|u| u.resources_shared)
            .collect();
        assert_eq!(top, [15, 12, 10]);
    }

    #[test]
    fn ties_keep_roster_order() {
        let users = vec![
            user("First", 10, 0, 0, 0),
            user("Second", 10, 0, 0, 0),
            user("Third", 10, 0, 0, 0),
        ];
        let top: Vec<&str> = top_users(&users, RankBy::Shared, 3)
            .iter()
            .map(|u| u.name.as_str())
            .collect();
        assert_eq!(top, ["First", "Second", "Third"]);
    }

    #[test]
    fn n_larger_than_roster_returns_everyone() {
        let users = vec![user("A", 1, 0, 0, 0), user("B", 2, 0, 0, 0)];
        assert_eq!(top_users(&users, RankBy::Shared, 5).len(), 2);
    }

    #[test]
    fn each_metric_ranks_by_its_own_field() {
        let users = vec![
            user("A", 1, 9, 100, 40),
            user("B", 9, 1, 900, 10),
        ];
        assert_eq!(top_users(&users, RankBy::Shared, 1)[0].name, "B");
        assert_eq!(top_users(&users, RankBy::Claimed, 1)[0].name, "A");
        assert_eq!(top_users(&users, RankBy::Value, 1)[0].name, "B");
        assert_eq!(top_users(&users, RankBy::Points, 1)[0].name, "A");
    }
}
