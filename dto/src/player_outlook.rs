use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct PlayerOutlook {
    week: u16,
    outlook: String,
}

impl PlayerOutlook {
    pub fn new(week: u16, outlook: String) -> Self {
        Self { week, outlook }
    }
}

/// Order in which weekly outlooks are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlookOrder {
    Chronological,
    #[default]
    ReverseChronological,
}

impl OutlookOrder {
    /// Parse the value of a `data-outlook-order` attribute.
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value.trim() {
            "chronological" => Some(OutlookOrder::Chronological),
            "reverse-chronological" => Some(OutlookOrder::ReverseChronological),
            _ => None,
        }
    }

    /// Sort outlooks by week. Outlooks of the same week keep their fetch order.
    pub fn sort(&self, outlooks: &mut [PlayerOutlook]) {
        match self {
            OutlookOrder::Chronological => outlooks.sort_by_key(|outlook| outlook.week),
            OutlookOrder::ReverseChronological => {
                outlooks.sort_by_key(|outlook| Reverse(outlook.week))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    fn fetched_outlooks() -> Vec<PlayerOutlook> {
        vec![
            PlayerOutlook::new(2, "Week 2".to_owned()),
            PlayerOutlook::new(1, "Week 1".to_owned()),
            PlayerOutlook::new(3, "Week 3".to_owned()),
        ]
    }

    #[parameterized(
        order = {OutlookOrder::Chronological, OutlookOrder::ReverseChronological},
        expected_weeks = {vec![1, 2, 3], vec![3, 2, 1]}
    )]
    fn should_sort_outlooks(order: OutlookOrder, expected_weeks: Vec<u16>) {
        let mut outlooks = fetched_outlooks();

        order.sort(&mut outlooks);

        let weeks = outlooks.iter().map(|o| *o.week()).collect::<Vec<_>>();
        assert_eq!(expected_weeks, weeks);
    }

    #[test]
    fn should_keep_fetch_order_within_same_week() {
        let mut outlooks = vec![
            PlayerOutlook::new(1, "first".to_owned()),
            PlayerOutlook::new(1, "second".to_owned()),
        ];

        OutlookOrder::ReverseChronological.sort(&mut outlooks);

        assert_eq!("first", outlooks[0].outlook());
    }

    #[parameterized(
        value = {"chronological", " reverse-chronological ", "random"},
        expected = {Some(OutlookOrder::Chronological), Some(OutlookOrder::ReverseChronological), None}
    )]
    fn should_parse_order_attribute(value: &str, expected: Option<OutlookOrder>) {
        assert_eq!(expected, OutlookOrder::from_attribute(value));
    }

    #[test]
    fn should_default_to_reverse_chronological() {
        assert_eq!(OutlookOrder::ReverseChronological, OutlookOrder::default());
    }
}
