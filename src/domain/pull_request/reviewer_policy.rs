//! Reviewer selection policy.
//!
//! Stores load the author's whole team and hand it to these functions, so
//! PostgreSQL and the in-memory adapter pick exactly the same reviewers.
//! Candidates are always considered in ascending `user_id` order regardless
//! of the order the store returned them in.

use crate::domain::foundation::UserId;
use crate::domain::team::TeamMember;

/// Upper bound on reviewers assigned when a pull request is opened.
pub const MAX_REVIEWERS: usize = 2;

fn eligible_in_order<'a>(
    team: &'a [TeamMember],
    excluded: impl Fn(&UserId) -> bool,
) -> Vec<&'a UserId> {
    let mut ids: Vec<&UserId> = team
        .iter()
        .filter(|m| m.is_active && !excluded(&m.user_id))
        .map(|m| &m.user_id)
        .collect();
    ids.sort();
    ids.dedup();
    ids
}

/// Picks up to [`MAX_REVIEWERS`] active teammates of `author`.
///
/// An empty result is valid: the pull request is opened without reviewers.
pub fn select_initial_reviewers(author: &UserId, team: &[TeamMember]) -> Vec<UserId> {
    eligible_in_order(team, |id| id == author)
        .into_iter()
        .take(MAX_REVIEWERS)
        .cloned()
        .collect()
}

/// Picks the replacement for `old_reviewer`.
///
/// Skips inactive members, the author, the reviewer being replaced and
/// everyone already assigned. `None` means there is no candidate.
pub fn select_replacement(
    author: &UserId,
    old_reviewer: &UserId,
    assigned: &[UserId],
    team: &[TeamMember],
) -> Option<UserId> {
    eligible_in_order(team, |id| {
        id == author || id == old_reviewer || assigned.contains(id)
    })
    .first()
    .map(|id| (*id).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn member(id: &str, active: bool) -> TeamMember {
        TeamMember::new(uid(id), id.to_uppercase(), active)
    }

    #[test]
    fn skips_inactive_teammates() {
        let team = vec![member("a", true), member("b", true), member("c", false)];
        assert_eq!(select_initial_reviewers(&uid("a"), &team), vec![uid("b")]);
    }

    #[test]
    fn caps_at_two_in_id_order() {
        let team = vec![
            member("e", true),
            member("a", true),
            member("d", true),
            member("c", true),
            member("b", true),
        ];
        assert_eq!(
            select_initial_reviewers(&uid("a"), &team),
            vec![uid("b"), uid("c")]
        );
    }

    #[test]
    fn lone_author_gets_no_reviewers() {
        let team = vec![member("a", true)];
        assert!(select_initial_reviewers(&uid("a"), &team).is_empty());
    }

    #[test]
    fn replacement_skips_author_old_and_assigned() {
        let team = vec![
            member("a", true),
            member("b", true),
            member("c", true),
            member("d", false),
            member("e", true),
        ];
        let assigned = vec![uid("b"), uid("c")];
        assert_eq!(
            select_replacement(&uid("a"), &uid("b"), &assigned, &team),
            Some(uid("e"))
        );
    }

    #[test]
    fn replacement_none_when_only_inactive_left() {
        let team = vec![member("a", true), member("b", true), member("c", false)];
        assert_eq!(
            select_replacement(&uid("a"), &uid("b"), &[uid("b")], &team),
            None
        );
    }

    fn arb_team() -> impl Strategy<Value = Vec<TeamMember>> {
        prop::collection::vec(("[a-f][0-9]", any::<bool>()), 0..12).prop_map(|rows| {
            rows.into_iter()
                .map(|(id, active)| TeamMember::new(UserId::new(id).unwrap(), "user", active))
                .collect()
        })
    }

    proptest! {
        /// Property: selection never returns the author, an inactive user or an outsider
        #[test]
        fn prop_initial_reviewers_are_eligible(team in arb_team(), author_idx in 0usize..12) {
            let author = team
                .get(author_idx)
                .map(|m| m.user_id.clone())
                .unwrap_or_else(|| UserId::new("z9").unwrap());
            let picked = select_initial_reviewers(&author, &team);

            prop_assert!(picked.len() <= MAX_REVIEWERS);
            prop_assert!(!picked.contains(&author));
            for reviewer in &picked {
                prop_assert!(team.iter().any(|m| &m.user_id == reviewer && m.is_active));
            }
            let mut unique = picked.clone();
            unique.dedup();
            prop_assert_eq!(unique.len(), picked.len());
        }

        /// Property: input order does not influence the result
        #[test]
        fn prop_selection_is_order_independent(team in arb_team()) {
            let author = UserId::new("a0").unwrap();
            let mut reversed = team.clone();
            reversed.reverse();
            prop_assert_eq!(
                select_initial_reviewers(&author, &team),
                select_initial_reviewers(&author, &reversed)
            );
        }

        /// Property: a replacement is never already assigned
        #[test]
        fn prop_replacement_is_fresh(team in arb_team()) {
            let author = UserId::new("a0").unwrap();
            let assigned = select_initial_reviewers(&author, &team);
            if let Some(old) = assigned.first() {
                if let Some(new) = select_replacement(&author, old, &assigned, &team) {
                    prop_assert!(!assigned.contains(&new));
                    prop_assert!(&new != old);
                    prop_assert!(new != author);
                }
            }
        }
    }
}
