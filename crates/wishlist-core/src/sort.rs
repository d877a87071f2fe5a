//! Sort Controls
//!
//! Two independent sort axes; the last one touched decides the next fetch.

use crate::query::{SortField, SortOrder, SortSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    #[default]
    Newest,
    Oldest,
}

impl DateOrder {
    pub const ALL: [DateOrder; 2] = [DateOrder::Newest, DateOrder::Oldest];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateOrder::Newest => "newest",
            DateOrder::Oldest => "oldest",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "oldest" => DateOrder::Oldest,
            _ => DateOrder::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateOrder::Newest => "Newest First",
            DateOrder::Oldest => "Oldest First",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceOrder {
    #[default]
    HighToLow,
    LowToHigh,
}

impl PriceOrder {
    pub const ALL: [PriceOrder; 2] = [PriceOrder::HighToLow, PriceOrder::LowToHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceOrder::HighToLow => "highToLow",
            PriceOrder::LowToHigh => "lowToHigh",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "lowToHigh" => PriceOrder::LowToHigh,
            _ => PriceOrder::HighToLow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceOrder::HighToLow => "High to Low",
            PriceOrder::LowToHigh => "Low to High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAxis {
    #[default]
    Date,
    Price,
}

/// Both axes keep their last direction; only `active` is used for fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortControls {
    pub date: DateOrder,
    pub price: PriceOrder,
    pub active: SortAxis,
}

impl SortControls {
    pub fn select_date(&mut self, order: DateOrder) {
        self.date = order;
        self.active = SortAxis::Date;
    }

    pub fn select_price(&mut self, order: PriceOrder) {
        self.price = order;
        self.active = SortAxis::Price;
    }

    pub fn spec(&self) -> SortSpec {
        match self.active {
            SortAxis::Date => SortSpec::new(
                SortField::CreatedAt,
                match self.date {
                    DateOrder::Newest => SortOrder::Desc,
                    DateOrder::Oldest => SortOrder::Asc,
                },
            ),
            SortAxis::Price => SortSpec::new(
                SortField::Price,
                match self.price {
                    PriceOrder::HighToLow => SortOrder::Desc,
                    PriceOrder::LowToHigh => SortOrder::Asc,
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_newest_first() {
        let controls = SortControls::default();
        assert_eq!(
            controls.spec(),
            SortSpec::new(SortField::CreatedAt, SortOrder::Desc)
        );
    }

    #[test]
    fn test_switching_axis_retains_other_direction() {
        let mut controls = SortControls::default();
        controls.select_date(DateOrder::Oldest);
        controls.select_price(PriceOrder::LowToHigh);
        assert_eq!(controls.spec(), SortSpec::new(SortField::Price, SortOrder::Asc));

        // Re-selecting the date axis brings back "oldest"
        controls.select_date(controls.date);
        assert_eq!(
            controls.spec(),
            SortSpec::new(SortField::CreatedAt, SortOrder::Asc)
        );
        assert_eq!(controls.price, PriceOrder::LowToHigh);
    }

    #[test]
    fn test_select_values_round_trip() {
        for order in DateOrder::ALL {
            assert_eq!(DateOrder::from_str(order.as_str()), order);
        }
        for order in PriceOrder::ALL {
            assert_eq!(PriceOrder::from_str(order.as_str()), order);
        }
    }
}
