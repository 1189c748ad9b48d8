//! Candidate filtering and expiry ranking.
//!
//! Names follow `<root><monthCode><yy>` (e.g. `ENQH25`). Ranking puts the
//! latest expiry first: year descending, then month descending. Note that
//! this is the farthest-dated contract, not the nearest-to-expiry one.

use std::cmp::Ordering;

use super::Contract;

/// Quarterly futures month code → calendar month.
pub fn month_from_code(code: char) -> Option<u8> {
    match code {
        'H' => Some(3),
        'M' => Some(6),
        'U' => Some(9),
        'Z' => Some(12),
        _ => None,
    }
}

/// Expiry derived from a contract name. Field order gives year-then-month
/// ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpiryKey {
    /// Two-digit year, `00..=99`.
    pub year: u8,
    pub month: u8,
}

impl ExpiryKey {
    /// Parse the trailing month code and two-digit year. Names shorter than
    /// five characters, or with an unknown month code, have no key.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.chars().count() < 5 {
            return None;
        }
        let tail: Vec<char> = name.chars().rev().take(3).collect();
        let (y2, y1, code) = (tail[0], tail[1], tail[2]);
        let month = month_from_code(code)?;
        let year = y1.to_digit(10)? * 10 + y2.to_digit(10)?;
        Some(Self {
            year: year as u8,
            month,
        })
    }
}

/// Active contracts whose id contains `target_symbol`, in input order.
pub fn candidates<'a>(contracts: &'a [Contract], target_symbol: &str) -> Vec<&'a Contract> {
    contracts
        .iter()
        .filter(|c| c.active_contract && c.id.as_str().contains(target_symbol))
        .collect()
}

/// Total order used to rank candidates; the best candidate sorts first.
///
/// A name is keyed when its last three characters parse as a quarterly
/// month code plus a two-digit year. In a mixed pair the keyed name always
/// ranks first, whatever the ids or the unkeyed name's apparent year. Two
/// keyed names compare by expiry descending, then by id. Two unkeyed names
/// compare by id lexicographically.
pub fn compare(a: &Contract, b: &Contract) -> Ordering {
    compare_keyed(a.expiry(), a, b.expiry(), b)
}

fn compare_keyed(
    ka: Option<ExpiryKey>,
    a: &Contract,
    kb: Option<ExpiryKey>,
    b: &Contract,
) -> Ordering {
    match (ka, kb) {
        (Some(ka), Some(kb)) => kb.cmp(&ka).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

/// Sort candidates best-first.
pub fn rank(candidates: Vec<&Contract>) -> Vec<&Contract> {
    let mut keyed: Vec<(Option<ExpiryKey>, &Contract)> =
        candidates.into_iter().map(|c| (c.expiry(), c)).collect();
    keyed.sort_by(|(ka, a), (kb, b)| compare_keyed(*ka, a, *kb, b));
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// The top-ranked active contract matching `target_symbol`, if any.
pub fn select<'a>(contracts: &'a [Contract], target_symbol: &str) -> Option<&'a Contract> {
    rank(candidates(contracts, target_symbol)).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ContractId;

    fn contract(id: &str, name: &str, active: bool) -> Contract {
        Contract {
            id: ContractId::from(id),
            name: name.to_string(),
            description: String::new(),
            tick_size: None,
            tick_value: None,
            active_contract: active,
        }
    }

    fn selected(contracts: &[Contract], symbol: &str) -> Option<String> {
        select(contracts, symbol).map(|c| c.id.to_string())
    }

    #[test]
    fn test_expiry_key_parsing() {
        assert_eq!(
            ExpiryKey::from_name("ENQH25"),
            Some(ExpiryKey { year: 25, month: 3 })
        );
        assert_eq!(
            ExpiryKey::from_name("ENQZ24"),
            Some(ExpiryKey { year: 24, month: 12 })
        );
        assert_eq!(ExpiryKey::from_name("ENQX25"), None);
        assert_eq!(ExpiryKey::from_name("H25"), None);
        assert_eq!(ExpiryKey::from_name("ENQH2A"), None);
        assert_eq!(ExpiryKey::from_name(""), None);
    }

    #[test]
    fn test_higher_year_wins_regardless_of_order() {
        let a = contract("CON.F.US.ENQ.Z24", "ENQZ24", true);
        let b = contract("CON.F.US.ENQ.H25", "ENQH25", true);
        assert_eq!(selected(&[a.clone(), b.clone()], "ENQ").as_deref(), Some("CON.F.US.ENQ.H25"));
        assert_eq!(selected(&[b, a], "ENQ").as_deref(), Some("CON.F.US.ENQ.H25"));
    }

    #[test]
    fn test_same_year_later_month_wins() {
        let h = contract("CON.F.US.ENQ.H25", "ENQH25", true);
        let m = contract("CON.F.US.ENQ.M25", "ENQM25", true);
        assert_eq!(selected(&[h.clone(), m.clone()], "ENQ").as_deref(), Some("CON.F.US.ENQ.M25"));
        assert_eq!(selected(&[m, h], "ENQ").as_deref(), Some("CON.F.US.ENQ.M25"));
    }

    #[test]
    fn test_inactive_and_non_matching_are_never_selected() {
        let contracts = vec![
            contract("CON.F.US.ENQ.U25", "ENQU25", false),
            contract("CON.F.US.MNQ.Z25", "MNQZ25", true),
            contract("CON.F.US.ENQ.H25", "ENQH25", true),
        ];
        assert_eq!(selected(&contracts, "ENQ").as_deref(), Some("CON.F.US.ENQ.H25"));
    }

    #[test]
    fn test_no_candidates() {
        let contracts = vec![
            contract("CON.F.US.ENQ.U25", "ENQU25", false),
            contract("CON.F.US.MNQ.Z25", "MNQZ25", true),
        ];
        assert_eq!(selected(&contracts, "ENQ"), None);
    }

    #[test]
    fn test_unkeyed_names_fall_back_to_id() {
        let contracts = vec![
            contract("CON.F.US.ENQ.B", "NASDAQ", true),
            contract("CON.F.US.ENQ.A", "NASDAQ", true),
        ];
        assert_eq!(selected(&contracts, "ENQ").as_deref(), Some("CON.F.US.ENQ.A"));
    }

    #[test]
    fn test_keyed_names_rank_ahead_of_unrecognized() {
        // X is not a quarterly code, so ENQX26 has no key despite its later year.
        let keyed = contract("CON.F.US.ENQ.Z", "ENQH24", true);
        let unknown = contract("CON.F.US.ENQ.A", "ENQX26", true);
        assert_eq!(compare(&keyed, &unknown), Ordering::Less);
        assert_eq!(compare(&unknown, &keyed), Ordering::Greater);

        let contracts = vec![unknown, keyed];
        assert_eq!(selected(&contracts, "ENQ").as_deref(), Some("CON.F.US.ENQ.Z"));
    }

    #[test]
    fn test_compare_is_a_total_order() {
        let pool = vec![
            contract("CON.F.US.ENQ.H25", "ENQH25", true),
            contract("CON.F.US.ENQ.M25", "ENQM25", true),
            contract("CON.F.US.ENQ.Z24", "ENQZ24", true),
            contract("CON.F.US.ENQ.X", "ENQX", true),
            contract("CON.F.US.ENQ.Q", "ENQQ25", true),
            contract("CON.F.US.ENQ.A", "A", true),
            contract("CON.F.US.ENQ.M25b", "ENQM25", true),
        ];
        for a in &pool {
            assert_eq!(compare(a, a), Ordering::Equal);
            for b in &pool {
                // antisymmetry
                assert_eq!(compare(a, b), compare(b, a).reverse());
                for c in &pool {
                    // transitivity
                    if compare(a, b) != Ordering::Greater && compare(b, c) != Ordering::Greater {
                        assert_ne!(compare(a, c), Ordering::Greater);
                    }
                }
            }
        }
    }

    #[test]
    fn test_rank_orders_full_candidate_list() {
        let contracts = vec![
            contract("CON.F.US.ENQ.H25", "ENQH25", true),
            contract("CON.F.US.ENQ.Y", "ENQ", true),
            contract("CON.F.US.ENQ.U25", "ENQU25", true),
            contract("CON.F.US.ENQ.Z24", "ENQZ24", true),
        ];
        let ranked: Vec<_> = rank(candidates(&contracts, "ENQ"))
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(ranked, ["ENQU25", "ENQH25", "ENQZ24", "ENQ"]);
    }
}
